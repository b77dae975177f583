use crate::timer::IdleTimer;
use crate::{
    EndReachedCallback, EndReachedPolicy, ListOptions, PaginationStatus, ScrollState,
    ScrollingChangeCallback, ViewportState,
};

/// Owns the live scroll offset, the debounced scrolling flag, and end-reached detection.
///
/// Time is supplied by the caller (`now_ms`), so the coordinator never blocks and behaves
/// deterministically under test. After [`ScrollCoordinator::teardown`] it ignores every event
/// and never invokes a callback again.
#[derive(Clone)]
pub struct ScrollCoordinator {
    viewport: ViewportState,
    is_scrolling: bool,
    idle_timer: IdleTimer,
    reset_delay_ms: u64,

    end_reached_threshold: f64,
    end_reached_policy: EndReachedPolicy,
    on_end_reached: Option<EndReachedCallback>,
    on_scrolling_change: Option<ScrollingChangeCallback>,
    pagination: PaginationStatus,
    past_threshold: bool,
    last_end_reached_ms: Option<u64>,

    torn_down: bool,
}

impl ScrollCoordinator {
    pub fn new(options: &ListOptions) -> Self {
        Self {
            viewport: ViewportState {
                scroll_offset: options.initial_offset,
                container_height: options.container_height,
                item_height: options.item_height,
            },
            is_scrolling: false,
            idle_timer: IdleTimer::new(),
            reset_delay_ms: options.reset_delay_ms,
            end_reached_threshold: options.end_reached_threshold,
            end_reached_policy: options.end_reached_policy,
            on_end_reached: options.on_end_reached.clone(),
            on_scrolling_change: options.on_scrolling_change.clone(),
            pagination: PaginationStatus::default(),
            past_threshold: false,
            last_end_reached_ms: None,
            torn_down: false,
        }
    }

    /// Takes over geometry, thresholds and callbacks from `options`, keeping the scroll offset
    /// and the pending timer.
    pub fn apply_options(&mut self, options: &ListOptions) {
        if self.torn_down {
            return;
        }
        self.viewport.container_height = options.container_height;
        self.viewport.item_height = options.item_height;
        self.reset_delay_ms = options.reset_delay_ms;
        self.end_reached_threshold = options.end_reached_threshold;
        if self.end_reached_policy != options.end_reached_policy {
            self.end_reached_policy = options.end_reached_policy;
            self.reset_end_reached();
        }
        self.on_end_reached = options.on_end_reached.clone();
        self.on_scrolling_change = options.on_scrolling_change.clone();
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn scroll_offset(&self) -> u64 {
        self.viewport.scroll_offset
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.viewport.scroll_offset,
            is_scrolling: self.is_scrolling,
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// When the scrolling flag will reset, if a scroll burst is in progress.
    ///
    /// Hosts with a real event loop can schedule a wake-up for this instant and call
    /// [`ScrollCoordinator::tick`] then.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.idle_timer.deadline_ms()
    }

    pub fn pagination(&self) -> PaginationStatus {
        self.pagination
    }

    pub fn set_pagination(&mut self, pagination: PaginationStatus) {
        self.pagination = pagination;
    }

    pub fn set_container_height(&mut self, container_height: u32) {
        self.viewport.container_height = container_height;
    }

    pub fn set_item_height(&mut self, item_height: u32) {
        self.viewport.item_height = item_height;
    }

    /// Moves the offset without counting as user scrolling (e.g. restoring a saved position).
    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.torn_down {
            return;
        }
        self.viewport.scroll_offset = offset;
    }

    /// Forgets the edge-trigger and throttle history, e.g. after a new page has arrived.
    pub fn reset_end_reached(&mut self) {
        self.past_threshold = false;
        self.last_end_reached_ms = None;
    }

    /// Handles a scroll notification from the host.
    ///
    /// The offset is applied immediately, the scrolling flag is raised and its idle timer
    /// restarted, and the end-reached check runs against `total_height`. Returns `true` when
    /// the end-reached callback fired.
    pub fn on_scroll(&mut self, offset: u64, total_height: u64, now_ms: u64) -> bool {
        if self.torn_down {
            vwarn!(offset, "on_scroll after teardown ignored");
            return false;
        }
        vtrace!(offset, total_height, now_ms, "on_scroll");
        self.viewport.scroll_offset = offset;
        self.idle_timer.arm(now_ms, self.reset_delay_ms);
        self.set_is_scrolling(true);
        self.check_end_reached(total_height, now_ms)
    }

    /// Advances the debounce timer. Returns `true` when the scrolling flag was reset.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.torn_down {
            return false;
        }
        if self.idle_timer.poll(now_ms) {
            self.set_is_scrolling(false);
            return true;
        }
        false
    }

    /// Cancels the pending timer and drops every callback. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        vdebug!(
            pending = self.idle_timer.is_pending(),
            "ScrollCoordinator::teardown"
        );
        self.idle_timer.cancel();
        self.on_end_reached = None;
        self.on_scrolling_change = None;
        self.is_scrolling = false;
        self.torn_down = true;
    }

    fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if let Some(cb) = &self.on_scrolling_change {
            cb(is_scrolling);
        }
    }

    fn scrolled_fraction(&self, total_height: u64) -> Option<f64> {
        if total_height == 0 {
            return None;
        }
        let bottom = self
            .viewport
            .scroll_offset
            .saturating_add(self.viewport.container_height as u64);
        Some(bottom as f64 / total_height as f64)
    }

    fn check_end_reached(&mut self, total_height: u64, now_ms: u64) -> bool {
        let Some(cb) = self.on_end_reached.clone() else {
            return false;
        };
        if !self.pagination.accepts_requests() {
            return false;
        }
        let Some(fraction) = self.scrolled_fraction(total_height) else {
            return false;
        };
        if fraction < self.end_reached_threshold {
            self.past_threshold = false;
            return false;
        }

        let fire = match self.end_reached_policy {
            EndReachedPolicy::EveryEvent => true,
            EndReachedPolicy::EdgeTriggered => !self.past_threshold,
            EndReachedPolicy::Throttled { min_interval_ms } => self
                .last_end_reached_ms
                .is_none_or(|last| now_ms.saturating_sub(last) >= min_interval_ms),
        };
        self.past_threshold = true;
        if !fire {
            return false;
        }

        vdebug!(
            offset = self.viewport.scroll_offset,
            total_height,
            fraction,
            "end reached"
        );
        self.last_end_reached_ms = Some(now_ms);
        cb();
        true
    }
}

impl core::fmt::Debug for ScrollCoordinator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollCoordinator")
            .field("viewport", &self.viewport)
            .field("is_scrolling", &self.is_scrolling)
            .field("idle_timer", &self.idle_timer)
            .field("reset_delay_ms", &self.reset_delay_ms)
            .field("end_reached_threshold", &self.end_reached_threshold)
            .field("end_reached_policy", &self.end_reached_policy)
            .field("pagination", &self.pagination)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}
