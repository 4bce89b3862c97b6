//! Table pagination with the same arithmetic as the consuming data table.

/// Rows-per-page choices offered by the table footer.
pub const ITEMS_PER_PAGE_OPTIONS: [usize; 3] = [6, 8, 10];

/// The visible window of a paged table.
///
/// `from` and `to` keep the raw `[page * per_page, min((page + 1) *
/// per_page, total))` bounds even when the page is out of range, so the
/// footer label stays faithful to what was asked for; [`Self::slice`] is
/// what clamps to the records that actually exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

impl PageWindow {
    /// Window for the zero-based `page` at `per_page` rows over `total`
    /// records.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let from = page * per_page;
        let to = ((page + 1) * per_page).min(total);
        Self { from, to, total }
    }

    /// The records visible on this page; empty when the page is out of
    /// range.
    pub fn slice<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        let end = self.to.min(records.len());
        if self.from >= end {
            return &[];
        }
        &records[self.from..end]
    }

    /// Footer label, one-based: `"1-6 of 14"`.
    pub fn label(&self) -> String {
        format!("{}-{} of {}", self.from + 1, self.to, self.total)
    }
}

/// Number of pages needed for `total` records at `per_page` rows per page.
///
/// `per_page` must be non-zero.
pub fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_page_shows_a_full_window() {
        let window = PageWindow::new(0, 6, 14);
        assert_eq!((window.from, window.to), (0, 6));
        assert_eq!(window.label(), "1-6 of 14");

        let records: Vec<u32> = (0..14).collect();
        assert_eq!(window.slice(&records), &records[0..6]);
    }

    #[test]
    fn last_page_shows_the_remainder() {
        let window = PageWindow::new(2, 6, 14);
        assert_eq!((window.from, window.to), (12, 14));
        assert_eq!(window.label(), "13-14 of 14");

        let records: Vec<u32> = (0..14).collect();
        assert_eq!(window.slice(&records), &[12, 13]);
        assert_eq!(page_count(14, 6), 3);
    }

    #[test]
    fn out_of_range_page_yields_an_empty_slice() {
        let window = PageWindow::new(5, 6, 14);
        assert_eq!(window.from, 30);

        let records: Vec<u32> = (0..14).collect();
        assert!(window.slice(&records).is_empty());
    }

    #[test]
    fn exact_division_needs_no_extra_page() {
        assert_eq!(page_count(12, 6), 2);
        assert_eq!(page_count(13, 6), 3);
        assert_eq!(page_count(0, 6), 0);
    }

    #[test]
    fn empty_table_slices_to_nothing() {
        let window = PageWindow::new(0, 8, 0);
        let records: Vec<u32> = Vec::new();
        assert!(window.slice(&records).is_empty());
        assert_eq!(window.label(), "1-0 of 0");
    }

    #[test]
    fn per_page_options_match_the_table_footer() {
        assert_eq!(ITEMS_PER_PAGE_OPTIONS, [6, 8, 10]);
    }
}
