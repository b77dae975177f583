use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use windowed_list::{Align, ListOptions, RenderMode, VisibleRange};

fn controller(clock: &ManualClock) -> Controller<bool, &ManualClock> {
    let opts = ListOptions::new(50, 500).with_virtualization(true);
    let mut c = Controller::new(opts, false, clock);
    c.list_mut().set_count(1000);
    c
}

#[test]
fn controller_debounces_with_its_clock() {
    let clock = ManualClock::new(1_000);
    let mut c = controller(&clock);

    c.on_scroll(2_500);
    assert!(c.list().is_scrolling());
    assert_eq!(c.list().visible_range(), VisibleRange::new(45, 65));

    clock.advance(100);
    c.on_scroll(2_600);
    clock.advance(149);
    assert_eq!(c.tick(), None);
    assert!(c.list().is_scrolling());

    clock.advance(1);
    assert_eq!(c.tick(), None);
    assert!(!c.list().is_scrolling());
}

#[test]
fn negative_and_nan_offsets_clamp_to_zero() {
    let clock = ManualClock::new(0);
    let mut c = controller(&clock);
    c.on_scroll_px(1_234.9);
    assert_eq!(c.list().scroll_offset(), 1_234);
    c.on_scroll_px(-40.0);
    assert_eq!(c.list().scroll_offset(), 0);
    c.on_scroll(300);
    c.on_scroll_px(f64::NAN);
    assert_eq!(c.list().scroll_offset(), 0);
}

#[test]
fn smooth_scroll_to_index_reaches_target_monotonically() {
    let clock = ManualClock::new(0);
    let mut c = controller(&clock).with_smooth_scroll(200, Easing::EaseInOutCubic);

    let target = c.scroll_to_index(500, Align::Start, ScrollBehavior::Smooth);
    assert_eq!(target, 25_000);
    assert!(c.is_animating());
    assert_eq!(c.list().scroll_offset(), 0);

    let mut last = 0;
    for _ in 0..20 {
        clock.advance(16);
        if let Some(offset) = c.tick() {
            assert!(offset >= last);
            last = offset;
        }
    }
    assert!(!c.is_animating());
    assert_eq!(c.list().scroll_offset(), target);
    assert!(c.list().visible_range().contains(500));
}

#[test]
fn user_scroll_interrupts_smooth_scroll() {
    let clock = ManualClock::new(0);
    let mut c = controller(&clock);
    c.scroll_to_bottom(ScrollBehavior::Smooth);
    clock.advance(50);
    assert!(c.tick().is_some());

    c.on_scroll(10);
    assert!(!c.is_animating());
    clock.advance(50);
    assert_eq!(c.tick(), None);
    assert_eq!(c.list().scroll_offset(), 10);
}

#[test]
fn instant_scroll_helpers_clamp() {
    let clock = ManualClock::new(0);
    let mut c = controller(&clock);
    assert_eq!(c.scroll_to_bottom(ScrollBehavior::Instant), 49_500);
    assert_eq!(c.list().scroll_offset(), 49_500);
    assert!(c.should_show_scroll_to_top());

    assert_eq!(c.scroll_to_offset(1_000_000, ScrollBehavior::Instant), 49_500);
    assert_eq!(c.scroll_to_top(ScrollBehavior::Instant), 0);
    assert!(!c.should_show_scroll_to_top());
    assert!(c.list().is_scrolling());
}

#[test]
fn smooth_scroll_to_bottom_triggers_pagination() {
    let hits = Arc::new(AtomicUsize::new(0));
    let opts = ListOptions::new(50, 500)
        .with_virtualization(true)
        .with_on_end_reached(Some({
            let hits = Arc::clone(&hits);
            move || {
                hits.fetch_add(1, Ordering::SeqCst);
            }
        }));
    let clock = ManualClock::new(0);
    let mut c = Controller::new(opts, false, &clock);
    c.list_mut().set_count(100);

    c.scroll_to_bottom(ScrollBehavior::Smooth);
    while c.is_animating() {
        clock.advance(16);
        c.tick();
    }
    assert!(hits.load(Ordering::SeqCst) >= 1);
}

#[test]
fn teardown_silences_callbacks() {
    let changes = Arc::new(AtomicUsize::new(0));
    let opts = ListOptions::new(10, 100).with_on_scrolling_change(Some({
        let changes = Arc::clone(&changes);
        move |_: bool| {
            changes.fetch_add(1, Ordering::SeqCst);
        }
    }));
    let clock = ManualClock::new(0);
    let mut c = Controller::new(opts, false, &clock);
    c.on_scroll(5);
    assert_eq!(changes.load(Ordering::SeqCst), 1);

    // Dropping tears down the controller's own list, not clones of it.
    let mut list = c.list().clone();
    drop(c);
    assert!(!list.is_torn_down());

    c = Controller::from_list(list.clone(), &clock);
    c.teardown();
    assert!(c.list().is_torn_down());
    clock.advance(1_000);
    assert_eq!(c.tick(), None);
    assert_eq!(changes.load(Ordering::SeqCst), 1);

    list.teardown();
}

#[test]
fn controller_renders_with_signal() {
    let clock = ManualClock::new(0);
    let opts = ListOptions::new(20, 100);
    let mut c = Controller::new(opts, true, &clock);
    let data: Vec<u32> = (0..500).collect();
    let frame = c.render(&data, &mut |item: &u32, _: usize| *item);
    assert_eq!(frame.mode, RenderMode::Windowed);
    assert_eq!(frame.range, VisibleRange::new(0, 15));
}

#[test]
fn tween_is_exact_at_the_ends() {
    let tween = ScrollTween::new(100, 900, 10, 100, Easing::EaseOutCubic);
    assert_eq!(tween.offset_at(0), 100);
    assert_eq!(tween.offset_at(10), 100);
    assert_eq!(tween.offset_at(110), 900);
    assert!(tween.offset_at(60) > 500);

    let back = ScrollTween::new(900, 100, 0, 100, Easing::Linear);
    assert_eq!(back.offset_at(50), 500);
    assert_eq!(ScrollTween::new(0, 10, 0, 0, Easing::Linear).duration_ms, 1);
}

#[test]
fn easing_curves_are_bounded() {
    for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert_eq!(easing.apply(2.0), 1.0);
        let mut prev = 0.0;
        for step in 1..=10 {
            let v = easing.apply(step as f32 / 10.0);
            assert!(v >= prev);
            prev = v;
        }
    }
}

#[cfg(feature = "std")]
#[test]
fn monotonic_clock_advances() {
    let clock = MonotonicClock::new();
    let a = clock.now_ms();
    std::thread::sleep(std::time::Duration::from_millis(5));
    assert!(clock.now_ms() >= a + 1);
}

#[test]
fn manual_clock_wraps_instead_of_overflowing() {
    let clock = ManualClock::new(u64::MAX - 1);
    assert_eq!(clock.advance(3), 1);
    assert_eq!(clock.now_ms(), 1);
}
