use alloc::sync::Arc;

/// Invoked when the viewport crosses the end-reached threshold.
pub type EndReachedCallback = Arc<dyn Fn() + Send + Sync>;

/// Invoked when the scrolling activity flag flips. The argument is the new `is_scrolling`.
pub type ScrollingChangeCallback = Arc<dyn Fn(bool) + Send + Sync>;

pub const DEFAULT_OVERSCAN: usize = 5;
pub const DEFAULT_END_REACHED_THRESHOLD: f64 = 0.8;
pub const DEFAULT_RESET_DELAY_MS: u64 = 150;

/// Controls how often the end-reached callback may fire while the viewport stays past the
/// threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndReachedPolicy {
    /// Fire on every qualifying scroll event. Pagination handlers must be idempotent.
    #[default]
    EveryEvent,
    /// Fire once per threshold crossing; re-arms when the viewport moves back above the
    /// threshold or the item count changes.
    EdgeTriggered,
    /// Fire at most once every `min_interval_ms`.
    Throttled { min_interval_ms: u64 },
}

/// Configuration for [`crate::VirtualList`].
///
/// Cheap to clone: callbacks live in `Arc`s, so hosts can tweak a field and hand the options
/// back through `VirtualList::set_options` every frame.
pub struct ListOptions {
    /// Uniform row height in pixels. Must be positive; zero forces full rendering.
    pub item_height: u32,
    /// Height of the scroll container in pixels.
    pub container_height: u32,
    /// Extra rows rendered beyond the viewport, in each direction.
    pub overscan: usize,
    /// Opts into windowed rendering. Off by default.
    pub virtualization_enabled: bool,
    /// Fraction of the total height (`0.0..=1.0`) past which `on_end_reached` fires.
    pub end_reached_threshold: f64,
    pub end_reached_policy: EndReachedPolicy,
    pub on_end_reached: Option<EndReachedCallback>,
    /// Quiet period after the last scroll event before `is_scrolling` resets.
    pub reset_delay_ms: u64,
    pub on_scrolling_change: Option<ScrollingChangeCallback>,
    /// Scroll offset applied at construction.
    pub initial_offset: u64,
}

impl Clone for ListOptions {
    fn clone(&self) -> Self {
        Self {
            item_height: self.item_height,
            container_height: self.container_height,
            overscan: self.overscan,
            virtualization_enabled: self.virtualization_enabled,
            end_reached_threshold: self.end_reached_threshold,
            end_reached_policy: self.end_reached_policy,
            on_end_reached: self.on_end_reached.clone(),
            reset_delay_ms: self.reset_delay_ms,
            on_scrolling_change: self.on_scrolling_change.clone(),
            initial_offset: self.initial_offset,
        }
    }
}

impl ListOptions {
    /// Creates options for rows of `item_height` pixels inside a `container_height` viewport.
    ///
    /// Defaults: overscan 5, threshold 0.8 fired on every qualifying event, 150ms scroll
    /// reset delay, virtualization disabled.
    pub fn new(item_height: u32, container_height: u32) -> Self {
        Self {
            item_height,
            container_height,
            overscan: DEFAULT_OVERSCAN,
            virtualization_enabled: false,
            end_reached_threshold: DEFAULT_END_REACHED_THRESHOLD,
            end_reached_policy: EndReachedPolicy::EveryEvent,
            on_end_reached: None,
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
            on_scrolling_change: None,
            initial_offset: 0,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_virtualization(mut self, enabled: bool) -> Self {
        self.virtualization_enabled = enabled;
        self
    }

    pub fn with_end_reached_threshold(mut self, threshold: f64) -> Self {
        self.end_reached_threshold = threshold;
        self
    }

    pub fn with_end_reached_policy(mut self, policy: EndReachedPolicy) -> Self {
        self.end_reached_policy = policy;
        self
    }

    pub fn with_on_end_reached(
        mut self,
        on_end_reached: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_end_reached = on_end_reached.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.reset_delay_ms = delay_ms;
        self
    }

    pub fn with_on_scrolling_change(
        mut self,
        on_scrolling_change: Option<impl Fn(bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scrolling_change = on_scrolling_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_initial_offset(mut self, offset: u64) -> Self {
        self.initial_offset = offset;
        self
    }
}

impl core::fmt::Debug for ListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("item_height", &self.item_height)
            .field("container_height", &self.container_height)
            .field("overscan", &self.overscan)
            .field("virtualization_enabled", &self.virtualization_enabled)
            .field("end_reached_threshold", &self.end_reached_threshold)
            .field("end_reached_policy", &self.end_reached_policy)
            .field("reset_delay_ms", &self.reset_delay_ms)
            .field("initial_offset", &self.initial_offset)
            .finish_non_exhaustive()
    }
}
