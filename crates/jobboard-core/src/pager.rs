//! Page arithmetic shared by the job listing and the company directory.

/// Pages are 1-based. A page size of zero is bumped to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(len / page_size)`; zero for an empty list.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Clamp a requested page into `[1, total_pages]`, or 1 when there are no pages.
    pub fn clamp(&self, requested: i64, total_pages: usize) -> usize {
        if total_pages == 0 {
            return 1;
        }
        let upper = i64::try_from(total_pages).unwrap_or(i64::MAX);
        requested.clamp(1, upper) as usize
    }

    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let start = page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    /// Target of the "Previous" control.
    pub fn previous(&self, page: usize) -> usize {
        page.saturating_sub(1).max(1)
    }

    /// Target of the "Next" control.
    pub fn next(&self, page: usize, total_pages: usize) -> usize {
        page.saturating_add(1).min(total_pages).max(1)
    }

    /// Pagination controls are only shown when results overflow one page.
    pub fn is_needed(&self, len: usize) -> bool {
        len > self.page_size
    }
}
