use serde::Serialize;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Most page numbers shown at once in the navigation bar.
const MAX_VISIBLE_PAGES: usize = 5;

/// Page numbers around `current_page`, at most [`MAX_VISIBLE_PAGES`] of them.
fn get_pages(total_pages: usize, current_page: usize) -> Vec<usize> {
    if total_pages == 0 {
        return vec![];
    }

    let start = current_page.saturating_sub(2).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);

    (start..=end).collect()
}

/// Navigation state for one rendered page of results.
///
/// `previous`/`next` are `None` when the control is disabled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub page: usize,
    pub page_count: usize,
    pub pages: Vec<usize>,
    pub previous: Option<usize>,
    pub next: Option<usize>,
    pub showing_from: usize,
    pub showing_to: usize,
    pub total: usize,
}

/// Current page position over a list of results.
///
/// The page number is 1-based and must be [`reset`](Paginator::reset) whenever
/// the underlying list changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    items_per_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl Paginator {
    /// A zero page size is bumped to one.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn page_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.items_per_page)
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Moves to `page`, clamped into the valid range. Returns the new page.
    pub fn go_to(&mut self, page: usize, item_count: usize) -> usize {
        let last = self.page_count(item_count).max(1);
        self.current_page = page.clamp(1, last);
        self.current_page
    }

    pub fn next(&mut self, item_count: usize) -> usize {
        self.go_to(self.current_page + 1, item_count)
    }

    pub fn previous(&mut self, item_count: usize) -> usize {
        self.go_to(self.current_page.saturating_sub(1), item_count)
    }

    /// Items on `page`; out-of-range pages are empty.
    pub fn items_for_page<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        if page == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(self.items_per_page);
        let end = start.saturating_add(self.items_per_page).min(items.len());
        items.get(start..end).unwrap_or(&[])
    }

    pub fn current_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        self.items_for_page(items, self.current_page)
    }

    /// Navigation for the current page, `None` when everything fits on one page.
    pub fn controls(&self, item_count: usize) -> Option<PageControls> {
        let page_count = self.page_count(item_count);
        if page_count <= 1 {
            return None;
        }

        let page = self.current_page.min(page_count);
        let showing_from = (page - 1) * self.items_per_page + 1;
        let showing_to = (page * self.items_per_page).min(item_count);

        Some(PageControls {
            page,
            page_count,
            pages: get_pages(page_count, page),
            previous: (page > 1).then(|| page - 1),
            next: (page < page_count).then(|| page + 1),
            showing_from,
            showing_to,
            total: item_count,
        })
    }
}

/// One page of items ready for rendering.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total: usize,
    pub controls: Option<PageControls>,
}

impl<T: Clone> Paginated<T> {
    /// Slices the current page out of `items` according to `paginator`.
    pub fn new(items: &[T], paginator: &Paginator) -> Self {
        Self {
            items: paginator.current_items(items).to_vec(),
            page: paginator.current_page(),
            total: items.len(),
            controls: paginator.controls(items.len()),
        }
    }
}
