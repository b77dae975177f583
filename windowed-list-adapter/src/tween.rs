/// Easing curves for smooth scrolling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// Fast start, gentle landing. Closest to a browser's `behavior: 'smooth'`.
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 - 2.0 * t;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// An in-flight animated scroll between two offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTween {
    pub from: u64,
    pub to: u64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl ScrollTween {
    pub fn new(from: u64, to: u64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms >= self.start_ms.saturating_add(self.duration_ms)
    }

    /// The offset at `now_ms`. Exactly `to` once the tween has finished.
    pub fn offset_at(&self, now_ms: u64) -> u64 {
        if self.is_finished(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let eased = self.easing.apply(elapsed as f32 / self.duration_ms as f32);
        let span = self.to as f64 - self.from as f64;
        let offset = self.from as f64 + span * eased as f64;
        if offset <= 0.0 { 0 } else { offset as u64 }
    }
}
