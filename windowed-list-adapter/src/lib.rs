//! Host-side utilities for the `windowed-list` crate.
//!
//! `windowed-list` is UI-agnostic and only does math and state. This crate provides the small,
//! framework-neutral pieces every adapter ends up writing:
//!
//! - Clocks (`MonotonicClock` for real hosts, `ManualClock` for tests)
//! - A `Controller` that drives the scrolling debounce, sanitizes raw scroll offsets, and tears
//!   the list down on drop
//! - Tween-based smooth scrolling to the top, the bottom, or a specific row
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod clock;
mod controller;
mod tween;

#[cfg(test)]
mod tests;

#[cfg(feature = "std")]
pub use clock::MonotonicClock;
pub use clock::{Clock, ManualClock};
pub use controller::{
    Controller, DEFAULT_SCROLL_TO_TOP_THRESHOLD, DEFAULT_SMOOTH_SCROLL_MS, ScrollBehavior,
};
pub use tween::{Easing, ScrollTween};
