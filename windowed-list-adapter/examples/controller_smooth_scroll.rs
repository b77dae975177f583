// Example: a host loop driving the controller with a real clock.
use std::time::Duration;

use windowed_list::{Align, ListOptions};
use windowed_list_adapter::{Controller, Easing, MonotonicClock, ScrollBehavior};

fn main() {
    let opts = ListOptions::new(32, 480).with_virtualization(true);
    let mut c = Controller::new(opts, false, MonotonicClock::new())
        .with_smooth_scroll(240, Easing::EaseInOutCubic);

    let rows: Vec<String> = (0..5_000).map(|i| format!("row {i}")).collect();
    c.list_mut().set_count(rows.len());

    let target = c.scroll_to_index(2_000, Align::Center, ScrollBehavior::Smooth);
    println!("smooth scrolling to offset {target}");

    while c.is_animating() {
        std::thread::sleep(Duration::from_millis(16));
        if let Some(offset) = c.tick() {
            // A real host would write `offset` back into its scroll container here.
            println!("offset={offset} range={:?}", c.list().visible_range());
        }
    }

    let frame = c.render(&rows, &mut |row: &String, _: usize| row.clone());
    println!(
        "landed: range={:?} back_to_top={}",
        frame.range,
        c.should_show_scroll_to_top()
    );

    std::thread::sleep(Duration::from_millis(200));
    c.tick();
    println!("is_scrolling={}", c.list().is_scrolling());
}
