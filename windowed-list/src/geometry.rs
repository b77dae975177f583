//! Pure viewport math over a collection of uniformly sized rows.
//!
//! Every function here is side-effect free and total: degenerate inputs (zero item height,
//! empty collections, offsets past the content) produce a defined result instead of a panic.

use crate::{Align, VisibleRange};

fn to_index(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Computes the contiguous index range to render, overscan included.
///
/// `start` backs off `overscan` rows from the first row under the viewport top, and `end`
/// extends `2 * overscan` rows past the visible count so both scroll directions are covered
/// by a single computation.
///
/// An `item_height` of zero is a contract violation; the full range is returned so callers
/// never lose rows.
pub fn compute_visible_range(
    scroll_offset: u64,
    item_height: u32,
    container_height: u32,
    overscan: usize,
    item_count: usize,
) -> VisibleRange {
    if item_count == 0 {
        return VisibleRange::EMPTY;
    }
    if item_height == 0 {
        vwarn!(item_count, "compute_visible_range: item_height must be positive");
        return VisibleRange::full(item_count);
    }

    let first = to_index(scroll_offset / item_height as u64);
    let start = first.saturating_sub(overscan).min(item_count);
    let visible = to_index((container_height as u64).div_ceil(item_height as u64));
    let end = start
        .saturating_add(visible)
        .saturating_add(overscan.saturating_mul(2))
        .max(on_screen_end(scroll_offset, item_height, container_height))
        .min(item_count);

    VisibleRange { start, end }
}

/// Rows intersecting the viewport, without overscan.
pub fn compute_on_screen_range(
    scroll_offset: u64,
    item_height: u32,
    container_height: u32,
    item_count: usize,
) -> VisibleRange {
    if item_count == 0 || container_height == 0 {
        return VisibleRange::EMPTY;
    }
    if item_height == 0 {
        return VisibleRange::full(item_count);
    }
    let first = to_index(scroll_offset / item_height as u64).min(item_count);
    let end = on_screen_end(scroll_offset, item_height, container_height).min(item_count);
    VisibleRange {
        start: first,
        end: end.max(first),
    }
}

// Exclusive index of the last row touched by `[offset, offset + container)`. Only raises `end`
// when an unaligned offset lets the bottom row peek in and there is no overscan to absorb it.
fn on_screen_end(scroll_offset: u64, item_height: u32, container_height: u32) -> usize {
    let bottom = scroll_offset.saturating_add(container_height as u64);
    to_index(bottom.div_ceil(item_height as u64))
}

pub fn total_height(item_count: usize, item_height: u32) -> u64 {
    (item_count as u64).saturating_mul(item_height as u64)
}

pub fn item_top(index: usize, item_height: u32) -> u64 {
    (index as u64).saturating_mul(item_height as u64)
}

/// The row under `offset`, clamped to the last row. `None` for an empty collection.
pub fn index_at_offset(offset: u64, item_height: u32, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    if item_height == 0 {
        return Some(0);
    }
    Some(to_index(offset / item_height as u64).min(item_count - 1))
}

pub fn max_scroll_offset(total_height: u64, container_height: u32) -> u64 {
    total_height.saturating_sub(container_height as u64)
}

/// The scroll offset that brings `index` into view with the requested alignment.
///
/// `current_offset` only matters for [`Align::Auto`]. The result is clamped to
/// `[0, max_scroll_offset]`; an out-of-range index is clamped to the last row.
pub fn scroll_to_index_offset(
    index: usize,
    align: Align,
    current_offset: u64,
    item_height: u32,
    container_height: u32,
    item_count: usize,
) -> u64 {
    if item_count == 0 || item_height == 0 {
        return 0;
    }
    let index = index.min(item_count - 1);
    let top = item_top(index, item_height);
    let h = item_height as u64;
    let view = container_height as u64;
    let max = max_scroll_offset(total_height(item_count, item_height), container_height);

    let target = match align {
        Align::Start => top,
        Align::End => top.saturating_add(h).saturating_sub(view),
        Align::Center => {
            let row_mid = top.saturating_add(h / 2);
            row_mid.saturating_sub(view / 2)
        }
        Align::Auto => {
            let bottom = top.saturating_add(h);
            if top < current_offset {
                top
            } else if bottom > current_offset.saturating_add(view) {
                bottom.saturating_sub(view)
            } else {
                current_offset
            }
        }
    };
    target.min(max)
}

/// How far through the scrollable range the viewport is, in `[0.0, 1.0]`.
pub fn scroll_progress(scroll_offset: u64, total_height: u64, container_height: u32) -> f64 {
    let max = max_scroll_offset(total_height, container_height);
    if max == 0 {
        return 0.0;
    }
    (scroll_offset.min(max) as f64) / (max as f64)
}
