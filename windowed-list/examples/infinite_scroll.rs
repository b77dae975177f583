// Example: end-reached pagination with a simulated fetch and a low-performance signal.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use windowed_list::{EndReachedPolicy, Fragments, ListOptions, PaginationStatus, VirtualList};

const PAGE: usize = 50;

fn main() {
    let requested = Arc::new(AtomicUsize::new(0));
    let low_performance = Arc::new(AtomicBool::new(false));

    let opts = ListOptions::new(40, 400)
        .with_end_reached_policy(EndReachedPolicy::EdgeTriggered)
        .with_on_end_reached(Some({
            let requested = Arc::clone(&requested);
            move || {
                requested.fetch_add(1, Ordering::SeqCst);
            }
        }));
    let mut list = VirtualList::new(opts, Arc::clone(&low_performance));

    let mut orders: Vec<u32> = (0..PAGE as u32).collect();
    let mut now_ms = 0u64;
    let mut offset = 0u64;

    // The device starts struggling: windowing is forced on even though it was not requested.
    low_performance.store(true, Ordering::Relaxed);

    for _ in 0..200 {
        now_ms += 16;
        offset = list.clamp_scroll_offset(offset + 120);
        list.set_count(orders.len());
        list.on_scroll(offset, now_ms);

        if requested.swap(0, Ordering::SeqCst) > 0 {
            list.set_pagination(PaginationStatus {
                has_next_page: orders.len() < 400,
                is_fetching: true,
            });
            list.set_loading(true);

            let next = orders.len() as u32;
            orders.extend(next..next + PAGE as u32);

            list.set_pagination(PaginationStatus {
                has_next_page: orders.len() < 400,
                is_fetching: false,
            });
            list.set_loading(false);
            println!("t={now_ms}ms loaded page, total={}", orders.len());
        }

        list.tick(now_ms);
    }

    let mut renderer = Fragments::new(|order: &u32, _| format!("order {order}"))
        .with_empty(|| "no orders yet".to_string())
        .with_loading(|| "loading more...".to_string());
    let frame = list.render(&orders, &mut renderer);
    println!(
        "final: mode={:?} range={:?} rows={} scrolling={}",
        frame.mode,
        frame.range,
        frame.row_indexes().len(),
        !frame.pointer_events
    );

    list.teardown();
}
