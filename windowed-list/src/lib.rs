//! A headless viewport-windowing engine for large, paginated lists of uniformly sized rows.
//!
//! For host-side glue (clocks, smooth scrolling, drop-driven teardown), see the
//! `windowed-list-adapter` crate.
//!
//! On every scroll event the engine decides which contiguous slice of the collection must be
//! materialized, keeps a total-height spacer so native scrollbars stay proportional, debounces
//! an "is scrolling" flag, and fires a pagination callback near the end of the range. Windowing
//! is opt-in, or forced when the injected [`PerformanceSignal`] reports a constrained device.
//!
//! It is UI-agnostic. The host is expected to provide:
//! - container and row heights
//! - scroll offsets and the current time in milliseconds
//! - a row renderer producing its own fragment type
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod coordinator;
pub mod geometry;
mod list;
mod mode;
mod options;
mod renderer;
mod state;
mod timer;
mod types;


pub use coordinator::ScrollCoordinator;
pub use geometry::compute_visible_range;
pub use list::VirtualList;
pub use mode::{PerformanceSignal, select_render_mode};
pub use options::{
    DEFAULT_END_REACHED_THRESHOLD, DEFAULT_OVERSCAN, DEFAULT_RESET_DELAY_MS, EndReachedCallback,
    EndReachedPolicy, ListOptions, ScrollingChangeCallback,
};
pub use renderer::{
    FrameLayout, Fragments, ListBody, ListFrame, PositionedRow, Row, RowRenderer, render_frame,
};
pub use state::{ListStats, PaginationStatus, ScrollState, ViewportState};
pub use timer::IdleTimer;
pub use types::{Align, Placement, RenderMode, VisibleRange};
