use alloc::rc::Rc;
use alloc::sync::Arc;
use core::cell::Cell;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::RenderMode;

/// Chooses between full and windowed rendering.
///
/// Windowing is opt-in: the list renders in full unless the caller enables virtualization or
/// the host reports a constrained device, in which case windowing is forced on.
pub fn select_render_mode(virtualization_enabled: bool, low_performance: bool) -> RenderMode {
    if virtualization_enabled || low_performance {
        RenderMode::Windowed
    } else {
        RenderMode::Full
    }
}

/// A device-capability signal injected into a list.
///
/// The signal is read on every render pass, so implementations backed by shared state (an
/// `Arc<AtomicBool>` flipped by a thermal monitor, for example) take effect on the next frame.
pub trait PerformanceSignal {
    fn is_low_performance(&self) -> bool;
}

impl PerformanceSignal for bool {
    fn is_low_performance(&self) -> bool {
        *self
    }
}

impl PerformanceSignal for Cell<bool> {
    fn is_low_performance(&self) -> bool {
        self.get()
    }
}

impl PerformanceSignal for AtomicBool {
    fn is_low_performance(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<S: PerformanceSignal + ?Sized> PerformanceSignal for &S {
    fn is_low_performance(&self) -> bool {
        (**self).is_low_performance()
    }
}

impl<S: PerformanceSignal + ?Sized> PerformanceSignal for Arc<S> {
    fn is_low_performance(&self) -> bool {
        (**self).is_low_performance()
    }
}

impl<S: PerformanceSignal + ?Sized> PerformanceSignal for Rc<S> {
    fn is_low_performance(&self) -> bool {
        (**self).is_low_performance()
    }
}
