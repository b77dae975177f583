/// How a list is materialized for the current render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    /// Only rows near the viewport are rendered, absolutely positioned inside a spacer.
    Windowed,
    /// Every row is rendered in sequence; the host container scrolls natively.
    Full,
}

impl RenderMode {
    pub fn is_windowed(self) -> bool {
        matches!(self, Self::Windowed)
    }
}

/// Alignment used by scroll-to-index helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Scrolls the minimum distance needed to bring the row fully into view.
    Auto,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The range covering every item of a collection.
    pub fn full(count: usize) -> Self {
        Self {
            start: 0,
            end: count,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Returns `true` when `other` lies entirely inside `self`.
    pub fn covers(&self, other: &VisibleRange) -> bool {
        other.is_empty() || (self.start <= other.start && other.end <= self.end)
    }

    pub fn iter(&self) -> core::ops::Range<usize> {
        self.start..self.end
    }
}

/// Where a single row sits inside the scrollable content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub index: usize,
    /// Offset of the row's top edge from the top of the spacer.
    pub top: u64,
    pub height: u32,
}

impl Placement {
    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }
}
