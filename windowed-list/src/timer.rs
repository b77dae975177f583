/// An owned, fire-once deadline used to debounce the scrolling flag.
///
/// The timer never runs on its own: the host polls it with the current time. Re-arming replaces
/// the pending deadline, and a cancelled timer can never fire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdleTimer {
    deadline_ms: Option<u64>,
}

impl IdleTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)starts the timer so it fires `delay_ms` after `now_ms`.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(delay_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Returns `true` exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
