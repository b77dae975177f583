use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::{RenderMode, VisibleRange, geometry};

/// Produces render fragments for rows and placeholders.
///
/// Any `FnMut(&T, usize) -> F` closure is a row renderer with no placeholders; use
/// [`Fragments`] to attach empty-state and loading placeholders.
pub trait RowRenderer<T> {
    type Fragment;

    /// Renders `item`, which sits at `index` in the full collection.
    fn render_row(&mut self, item: &T, index: usize) -> Self::Fragment;

    fn render_empty(&mut self) -> Option<Self::Fragment> {
        None
    }

    fn render_loading(&mut self) -> Option<Self::Fragment> {
        None
    }
}

impl<T, F, R> RowRenderer<T> for R
where
    R: FnMut(&T, usize) -> F,
{
    type Fragment = F;

    fn render_row(&mut self, item: &T, index: usize) -> F {
        self(item, index)
    }
}

/// A row closure bundled with optional placeholder closures.
pub struct Fragments<'a, T, F> {
    row: Box<dyn FnMut(&T, usize) -> F + 'a>,
    empty: Option<Box<dyn FnMut() -> F + 'a>>,
    loading: Option<Box<dyn FnMut() -> F + 'a>>,
}

impl<'a, T, F> Fragments<'a, T, F> {
    pub fn new(row: impl FnMut(&T, usize) -> F + 'a) -> Self {
        Self {
            row: Box::new(row),
            empty: None,
            loading: None,
        }
    }

    pub fn with_empty(mut self, empty: impl FnMut() -> F + 'a) -> Self {
        self.empty = Some(Box::new(empty));
        self
    }

    pub fn with_loading(mut self, loading: impl FnMut() -> F + 'a) -> Self {
        self.loading = Some(Box::new(loading));
        self
    }
}

impl<T, F> RowRenderer<T> for Fragments<'_, T, F> {
    type Fragment = F;

    fn render_row(&mut self, item: &T, index: usize) -> F {
        (self.row)(item, index)
    }

    fn render_empty(&mut self) -> Option<F> {
        self.empty.as_mut().map(|f| f())
    }

    fn render_loading(&mut self) -> Option<F> {
        self.loading.as_mut().map(|f| f())
    }
}

/// A row rendered in sequence (full mode).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row<F> {
    pub index: usize,
    pub height: u32,
    pub fragment: F,
}

/// A row absolutely positioned inside the spacer (windowed mode).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionedRow<F> {
    pub index: usize,
    pub top: u64,
    pub height: u32,
    pub fragment: F,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListBody<F> {
    /// The collection is empty; carries the empty-state placeholder, if any.
    Empty(Option<F>),
    Sequential(Vec<Row<F>>),
    Windowed {
        /// Height of the element that gives the scroll container its full extent.
        spacer_height: u64,
        rows: Vec<PositionedRow<F>>,
    },
}

/// The output of one render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListFrame<F> {
    pub mode: RenderMode,
    pub range: VisibleRange,
    pub body: ListBody<F>,
    /// Trailing placeholder rendered after the body while loading.
    pub loading: Option<F>,
    /// `false` while the user is scrolling; hosts should ignore pointer input on rows.
    pub pointer_events: bool,
}

impl<F> ListFrame<F> {
    /// Indexes of the rows present in this frame, in order.
    pub fn row_indexes(&self) -> Vec<usize> {
        match &self.body {
            ListBody::Empty(_) => Vec::new(),
            ListBody::Sequential(rows) => rows.iter().map(|r| r.index).collect(),
            ListBody::Windowed { rows, .. } => rows.iter().map(|r| r.index).collect(),
        }
    }
}

/// Inputs of a render pass that do not depend on the item type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameLayout {
    pub mode: RenderMode,
    pub item_height: u32,
    /// Rows to materialize in windowed mode; ignored in full mode.
    pub range: VisibleRange,
    pub loading: bool,
    pub is_scrolling: bool,
}

/// Builds a [`ListFrame`] for `items`.
///
/// In windowed mode the renderer is only called for indexes inside `layout.range`.
pub fn render_frame<T, R>(
    items: &[T],
    layout: &FrameLayout,
    renderer: &mut R,
) -> ListFrame<R::Fragment>
where
    R: RowRenderer<T> + ?Sized,
{
    let count = items.len();
    let range = match layout.mode {
        RenderMode::Full => VisibleRange::full(count),
        RenderMode::Windowed => VisibleRange {
            start: layout.range.start.min(count),
            end: layout.range.end.min(count),
        },
    };

    let body = if count == 0 {
        // A list that is still loading its first page shows only the loading placeholder.
        let empty = if layout.loading {
            None
        } else {
            renderer.render_empty()
        };
        ListBody::Empty(empty)
    } else {
        match layout.mode {
            RenderMode::Full => ListBody::Sequential(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| Row {
                        index,
                        height: layout.item_height,
                        fragment: renderer.render_row(item, index),
                    })
                    .collect(),
            ),
            RenderMode::Windowed => {
                let rows = items[range.start..range.end.max(range.start)]
                    .iter()
                    .zip(range.iter())
                    .map(|(item, index)| PositionedRow {
                        index,
                        top: geometry::item_top(index, layout.item_height),
                        height: layout.item_height,
                        fragment: renderer.render_row(item, index),
                    })
                    .collect();
                ListBody::Windowed {
                    spacer_height: geometry::total_height(count, layout.item_height),
                    rows,
                }
            }
        }
    };

    let loading = if layout.loading {
        renderer.render_loading()
    } else {
        None
    };

    vtrace!(
        count,
        start = range.start,
        end = range.end,
        windowed = layout.mode.is_windowed(),
        "render_frame"
    );

    ListFrame {
        mode: layout.mode,
        range,
        body,
        loading,
        pointer_events: !layout.is_scrolling,
    }
}
