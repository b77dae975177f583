use crate::{RenderMode, VisibleRange};

/// The live viewport geometry, owned by [`crate::ScrollCoordinator`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_offset: u64,
    pub container_height: u32,
    pub item_height: u32,
}

/// A lightweight snapshot of the scroll position, for restoring lists across frames or
/// sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    pub is_scrolling: bool,
}

/// Whether more pages exist and whether one is being fetched.
///
/// The end-reached callback is suppressed while `has_next_page` is false or `is_fetching` is
/// true.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginationStatus {
    pub has_next_page: bool,
    pub is_fetching: bool,
}

impl Default for PaginationStatus {
    fn default() -> Self {
        Self {
            has_next_page: true,
            is_fetching: false,
        }
    }
}

impl PaginationStatus {
    pub fn accepts_requests(&self) -> bool {
        self.has_next_page && !self.is_fetching
    }
}

/// Summary of the current render pass, suitable for a status bar.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListStats {
    pub mode: RenderMode,
    pub total_items: usize,
    pub rendered: VisibleRange,
    /// `0.0` at the top, `1.0` at the bottom of the scrollable range.
    pub scroll_progress: f64,
    pub is_at_top: bool,
    pub is_at_bottom: bool,
}

impl ListStats {
    pub fn rendered_items(&self) -> usize {
        self.rendered.len()
    }
}
