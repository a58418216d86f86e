//! 1-based page slicing for card grids.

/// Number of pages needed for `len` items. Zero items means zero pages.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Items visible on `page` (1-based). Out-of-range pages yield an empty slice.
pub fn slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Grid pagination policy.
///
/// With `exclude_head` set, the first item is held back as the spotlight
/// and paging runs over the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    pub page_size: usize,
    pub exclude_head: bool,
}

pub const DEFAULT_PAGE_SIZE: usize = 8;

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            exclude_head: false,
        }
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            exclude_head: false,
        }
    }

    pub fn with_spotlight(mut self, exclude_head: bool) -> Self {
        self.exclude_head = exclude_head;
        self
    }

    fn pageable<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.exclude_head {
            items.get(1..).unwrap_or(&[])
        } else {
            items
        }
    }

    pub fn spotlight<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        if self.exclude_head {
            items.first()
        } else {
            None
        }
    }

    pub fn page_count(&self, len: usize) -> usize {
        let pageable = if self.exclude_head {
            len.saturating_sub(1)
        } else {
            len
        };
        page_count(pageable, self.page_size)
    }

    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        slice(self.pageable(items), page, self.page_size)
    }

    /// Clamp `page` into `[1, max(1, page_count)]`.
    pub fn clamp_page(&self, len: usize, page: usize) -> usize {
        page.clamp(1, self.page_count(len).max(1))
    }
}
