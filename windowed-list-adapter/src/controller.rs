use windowed_list::{
    Align, ListFrame, ListOptions, PerformanceSignal, RowRenderer, VirtualList,
};

use crate::{Clock, Easing, ScrollTween};

pub const DEFAULT_SMOOTH_SCROLL_MS: u64 = 300;
pub const DEFAULT_SCROLL_TO_TOP_THRESHOLD: u64 = 200;

/// How a programmatic scroll reaches its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Instant,
    Smooth,
}

/// A framework-neutral controller that owns a [`VirtualList`] and a [`Clock`].
///
/// Adapters call:
/// - `on_scroll` / `on_scroll_px` from the container's scroll handler,
/// - `tick()` from their frame loop or timer, and write back the returned offset while a smooth
///   scroll is running,
/// - `render(items, renderer)` when building the tree.
///
/// Dropping the controller tears the list down, so no callback outlives the host component.
pub struct Controller<S, C> {
    list: VirtualList<S>,
    clock: C,
    tween: Option<ScrollTween>,
    smooth_duration_ms: u64,
    easing: Easing,
    scroll_to_top_threshold: u64,
}

impl<S: PerformanceSignal, C: Clock> Controller<S, C> {
    pub fn new(options: ListOptions, signal: S, clock: C) -> Self {
        Self::from_list(VirtualList::new(options, signal), clock)
    }

    pub fn from_list(list: VirtualList<S>, clock: C) -> Self {
        Self {
            list,
            clock,
            tween: None,
            smooth_duration_ms: DEFAULT_SMOOTH_SCROLL_MS,
            easing: Easing::default(),
            scroll_to_top_threshold: DEFAULT_SCROLL_TO_TOP_THRESHOLD,
        }
    }

    pub fn with_smooth_scroll(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.smooth_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn with_scroll_to_top_threshold(mut self, threshold: u64) -> Self {
        self.scroll_to_top_threshold = threshold;
        self
    }

    pub fn list(&self) -> &VirtualList<S> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut VirtualList<S> {
        &mut self.list
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Call this when the user scrolls. Cancels any running smooth scroll.
    ///
    /// Returns `true` when the end-reached callback fired.
    pub fn on_scroll(&mut self, offset: u64) -> bool {
        self.cancel_animation();
        let now = self.clock.now_ms();
        self.list.on_scroll(offset, now)
    }

    /// Same as `on_scroll`, for hosts that report fractional offsets (e.g. `scrollTop`).
    ///
    /// Negative and non-finite values, seen during elastic overscroll, are treated as `0`.
    pub fn on_scroll_px(&mut self, offset: f64) -> bool {
        let offset = if offset.is_finite() && offset > 0.0 {
            offset as u64
        } else {
            if offset != 0.0 {
                vwarn!(offset, "on_scroll_px: clamping invalid offset to 0");
            }
            0
        };
        self.on_scroll(offset)
    }

    /// Advances the controller.
    ///
    /// - While a smooth scroll runs, moves the list and returns the offset the host should apply.
    /// - Otherwise runs the scrolling debounce and returns `None`.
    pub fn tick(&mut self) -> Option<u64> {
        let now = self.clock.now_ms();
        let Some(tween) = self.tween else {
            self.list.tick(now);
            return None;
        };

        let offset = tween.offset_at(now);
        self.list.on_scroll(offset, now);
        if tween.is_finished(now) {
            vtrace!(offset, "smooth scroll finished");
            self.tween = None;
        }
        Some(offset)
    }

    /// Scrolls to `offset` (clamped). Returns the target offset.
    pub fn scroll_to_offset(&mut self, offset: u64, behavior: ScrollBehavior) -> u64 {
        let target = self.list.clamp_scroll_offset(offset);
        let now = self.clock.now_ms();
        match behavior {
            ScrollBehavior::Instant => {
                self.tween = None;
                self.list.on_scroll(target, now);
            }
            ScrollBehavior::Smooth => {
                let from = self.list.scroll_offset();
                vtrace!(from, target, "smooth scroll started");
                self.tween = Some(ScrollTween::new(
                    from,
                    target,
                    now,
                    self.smooth_duration_ms,
                    self.easing,
                ));
            }
        }
        target
    }

    pub fn scroll_to_index(&mut self, index: usize, align: Align, behavior: ScrollBehavior) -> u64 {
        let offset = self.list.scroll_to_index_offset(index, align);
        self.scroll_to_offset(offset, behavior)
    }

    pub fn scroll_to_top(&mut self, behavior: ScrollBehavior) -> u64 {
        self.scroll_to_offset(0, behavior)
    }

    pub fn scroll_to_bottom(&mut self, behavior: ScrollBehavior) -> u64 {
        let offset = self.list.scroll_to_bottom_offset();
        self.scroll_to_offset(offset, behavior)
    }

    /// Whether a "back to top" affordance should be shown.
    pub fn should_show_scroll_to_top(&self) -> bool {
        self.list.scroll_offset() > self.scroll_to_top_threshold
    }

    pub fn render<T, R>(&mut self, items: &[T], renderer: &mut R) -> ListFrame<R::Fragment>
    where
        R: RowRenderer<T> + ?Sized,
    {
        self.list.render(items, renderer)
    }
}

impl<S, C> Controller<S, C> {
    /// Stops any smooth scroll and tears the list down. Called automatically on drop.
    pub fn teardown(&mut self) {
        if !self.list.is_torn_down() {
            vdebug!(animating = self.tween.is_some(), "Controller::teardown");
        }
        self.tween = None;
        self.list.teardown();
    }
}

impl<S, C> Drop for Controller<S, C> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<S: core::fmt::Debug, C> core::fmt::Debug for Controller<S, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("list", &self.list)
            .field("tween", &self.tween)
            .field("smooth_duration_ms", &self.smooth_duration_ms)
            .field("easing", &self.easing)
            .field("scroll_to_top_threshold", &self.scroll_to_top_threshold)
            .finish_non_exhaustive()
    }
}
