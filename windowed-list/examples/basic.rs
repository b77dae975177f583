// Example: windowing a large list and rendering one frame.
use windowed_list::{ListBody, ListOptions, VirtualList};

fn main() {
    let products: Vec<String> = (0..10_000).map(|i| format!("product #{i}")).collect();

    let mut list = VirtualList::without_signal(ListOptions::new(48, 600).with_virtualization(true));
    list.on_scroll(48 * 2_500, 0);

    let frame = list.render(&products, &mut |name: &String, index: usize| {
        format!("{index:>5} | {name}")
    });

    println!("mode={:?} range={:?}", frame.mode, frame.range);
    if let ListBody::Windowed {
        spacer_height,
        rows,
    } = &frame.body
    {
        println!("spacer_height={spacer_height} rows={}", rows.len());
        for row in rows.iter().take(3) {
            println!("  top={:>7} {}", row.top, row.fragment);
        }
    }
    println!("stats={:?}", list.stats());
}
