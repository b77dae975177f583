use crate::coordinator::ScrollCoordinator;
use crate::renderer::{FrameLayout, ListFrame, RowRenderer, render_frame};
use crate::{
    Align, ListOptions, ListStats, PaginationStatus, PerformanceSignal, Placement, RenderMode,
    ScrollState, ViewportState, VisibleRange, geometry, select_render_mode,
};

/// A headless virtualized list.
///
/// This type holds no UI objects and no items. The host drives it:
/// - `on_scroll(offset, now_ms)` for every scroll notification,
/// - `tick(now_ms)` from its timer or frame loop, so the scrolling flag can reset,
/// - `set_count` / `render(items, ..)` whenever the collection changes,
/// - `teardown()` when the list is destroyed.
///
/// The low-performance signal `S` is read on every query, never cached.
#[derive(Clone, Debug)]
pub struct VirtualList<S = bool> {
    options: ListOptions,
    count: usize,
    loading: bool,
    coordinator: ScrollCoordinator,
    signal: S,
}

impl<S> VirtualList<S> {
    /// Cancels pending timers and drops callbacks. Later events are ignored.
    pub fn teardown(&mut self) {
        vdebug!(count = self.count, "VirtualList::teardown");
        self.coordinator.teardown();
    }

    pub fn is_torn_down(&self) -> bool {
        self.coordinator.is_torn_down()
    }
}

impl VirtualList<bool> {
    /// Creates a list on a device that never reports low performance.
    pub fn without_signal(options: ListOptions) -> Self {
        Self::new(options, false)
    }
}

impl<S: PerformanceSignal> VirtualList<S> {
    pub fn new(options: ListOptions, signal: S) -> Self {
        vdebug!(
            item_height = options.item_height,
            container_height = options.container_height,
            overscan = options.overscan,
            virtualization_enabled = options.virtualization_enabled,
            "VirtualList::new"
        );
        if options.item_height == 0 {
            vwarn!("VirtualList::new: item_height is zero, rendering in full");
        }
        Self {
            coordinator: ScrollCoordinator::new(&options),
            options,
            count: 0,
            loading: false,
            signal,
        }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ListOptions) {
        vtrace!(
            item_height = options.item_height,
            container_height = options.container_height,
            overscan = options.overscan,
            "VirtualList::set_options"
        );
        if options.item_height == 0 && self.options.item_height != 0 {
            vwarn!("VirtualList::set_options: item_height is zero, rendering in full");
        }
        self.coordinator.apply_options(&options);
        self.options = options;
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ListOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn signal(&self) -> &S {
        &self.signal
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Updates the item count. A change re-arms edge-triggered end-reached detection.
    pub fn set_count(&mut self, count: usize) {
        if self.count == count {
            return;
        }
        vtrace!(prev = self.count, count, "VirtualList::set_count");
        self.count = count;
        self.coordinator.reset_end_reached();
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn pagination(&self) -> PaginationStatus {
        self.coordinator.pagination()
    }

    pub fn set_pagination(&mut self, pagination: PaginationStatus) {
        self.coordinator.set_pagination(pagination);
    }

    pub fn set_container_height(&mut self, container_height: u32) {
        self.options.container_height = container_height;
        self.coordinator.set_container_height(container_height);
    }

    pub fn set_item_height(&mut self, item_height: u32) {
        self.options.item_height = item_height;
        self.coordinator.set_item_height(item_height);
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
    }

    pub fn set_virtualization_enabled(&mut self, enabled: bool) {
        self.options.virtualization_enabled = enabled;
    }

    /// The mode for the next render pass.
    ///
    /// A zero item height cannot be windowed and falls back to [`RenderMode::Full`].
    pub fn render_mode(&self) -> RenderMode {
        if self.options.item_height == 0 {
            return RenderMode::Full;
        }
        select_render_mode(
            self.options.virtualization_enabled,
            self.signal.is_low_performance(),
        )
    }

    /// Rows to materialize, overscan included. Always `0..count` in full mode.
    pub fn visible_range(&self) -> VisibleRange {
        match self.render_mode() {
            RenderMode::Full => VisibleRange::full(self.count),
            RenderMode::Windowed => geometry::compute_visible_range(
                self.coordinator.scroll_offset(),
                self.options.item_height,
                self.options.container_height,
                self.options.overscan,
                self.count,
            ),
        }
    }

    /// Rows actually intersecting the viewport, without overscan.
    pub fn on_screen_range(&self) -> VisibleRange {
        geometry::compute_on_screen_range(
            self.coordinator.scroll_offset(),
            self.options.item_height,
            self.options.container_height,
            self.count,
        )
    }

    pub fn is_index_rendered(&self, index: usize) -> bool {
        self.visible_range().contains(index)
    }

    pub fn total_height(&self) -> u64 {
        geometry::total_height(self.count, self.options.item_height)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        geometry::max_scroll_offset(self.total_height(), self.options.container_height)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    pub fn scroll_offset(&self) -> u64 {
        self.coordinator.scroll_offset()
    }

    pub fn is_scrolling(&self) -> bool {
        self.coordinator.is_scrolling()
    }

    pub fn viewport_state(&self) -> ViewportState {
        self.coordinator.viewport()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.coordinator.scroll_state()
    }

    /// Restores a saved position without raising the scrolling flag.
    pub fn restore_scroll_state(&mut self, state: ScrollState) {
        self.coordinator.set_scroll_offset(state.offset);
    }

    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.coordinator.next_deadline_ms()
    }

    /// Applies a scroll notification. Returns `true` when the end-reached callback fired.
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) -> bool {
        let total = self.total_height();
        self.coordinator.on_scroll(offset, total, now_ms)
    }

    /// Advances the scrolling debounce. Returns `true` when the scrolling flag was reset.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.coordinator.tick(now_ms)
    }

    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        geometry::index_at_offset(offset, self.options.item_height, self.count)
    }

    pub fn placement(&self, index: usize) -> Option<Placement> {
        (index < self.count).then(|| Placement {
            index,
            top: geometry::item_top(index, self.options.item_height),
            height: self.options.item_height,
        })
    }

    /// Calls `f` for every row the next render pass would materialize.
    pub fn for_each_placement(&self, mut f: impl FnMut(Placement)) {
        let h = self.options.item_height;
        for index in self.visible_range().iter() {
            f(Placement {
                index,
                top: geometry::item_top(index, h),
                height: h,
            });
        }
    }

    /// The offset that brings `index` into view; clamped to the scrollable range.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        geometry::scroll_to_index_offset(
            index,
            align,
            self.coordinator.scroll_offset(),
            self.options.item_height,
            self.options.container_height,
            self.count,
        )
    }

    pub fn scroll_to_bottom_offset(&self) -> u64 {
        self.max_scroll_offset()
    }

    pub fn stats(&self) -> ListStats {
        let offset = self.coordinator.scroll_offset();
        let max = self.max_scroll_offset();
        ListStats {
            mode: self.render_mode(),
            total_items: self.count,
            rendered: self.visible_range(),
            scroll_progress: geometry::scroll_progress(
                offset,
                self.total_height(),
                self.options.container_height,
            ),
            is_at_top: offset == 0,
            is_at_bottom: offset.saturating_add(1) >= max,
        }
    }

    /// Renders `items` for the current scroll position.
    ///
    /// The item count is synchronized with `items.len()` first, so the frame always reflects
    /// the collection it was given.
    pub fn render<T, R>(&mut self, items: &[T], renderer: &mut R) -> ListFrame<R::Fragment>
    where
        R: RowRenderer<T> + ?Sized,
    {
        self.set_count(items.len());
        let layout = FrameLayout {
            mode: self.render_mode(),
            item_height: self.options.item_height,
            range: self.visible_range(),
            loading: self.loading,
            is_scrolling: self.coordinator.is_scrolling(),
        };
        render_frame(items, &layout, renderer)
    }
}
