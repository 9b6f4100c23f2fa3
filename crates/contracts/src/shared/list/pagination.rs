//! Fixed-size page windows over a filtered record sequence.
//!
//! Pages are numbered from 1. An empty sequence has zero pages but is shown
//! as a single empty page.

/// Page size used when the configuration does not override it
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Current page and page size of one screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Moves to `page`, clamped into `1..=max(total_pages, 1)`.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    /// Pulls the current page back inside `total_pages`. Returns whether it moved.
    pub fn clamp(&mut self, total_pages: usize) -> bool {
        let clamped = self.current_page.clamp(1, total_pages.max(1));
        let moved = clamped != self.current_page;
        self.current_page = clamped;
        moved
    }
}

/// `ceil(count / page_size)`
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// One page window
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl<T> Page<T> {
    /// Navigation is only rendered when there is somewhere to go.
    pub fn show_controls(&self) -> bool {
        self.total_pages > 1
    }
}

/// Slices `items` at `(current_page - 1) * page_size`, truncated at the end.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, current_page: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let current_page = current_page.max(1);
    let offset = (current_page - 1).saturating_mul(page_size);

    Page {
        items: items.iter().skip(offset).take(page_size).cloned().collect(),
        total_count: items.len(),
        total_pages: total_pages(items.len(), page_size),
        current_page,
    }
}

/// Entry of the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Page numbers to render: the first and last page, the current page and
/// its neighbours, with every gap collapsed into one ellipsis.
pub fn page_markers(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);

    let mut pages: Vec<usize> = vec![1, current.saturating_sub(1), current, current + 1, total]
        .into_iter()
        .filter(|p| (1..=total).contains(p))
        .collect();
    pages.sort_unstable();
    pages.dedup();

    let mut markers = Vec::with_capacity(pages.len() + 2);
    let mut previous = 0;
    for page in pages {
        if previous != 0 && page > previous + 1 {
            markers.push(PageMarker::Ellipsis);
        }
        markers.push(PageMarker::Page(page));
        previous = page;
    }
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page as P};

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(1, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(12, 5), 3);
        assert_eq!(total_pages(12, 0), 0);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (1..=12).collect();
        let page = paginate(&items, 5, 3);
        assert_eq!(page.items, vec![11, 12]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 12);
        assert!(page.show_controls());
    }

    #[test]
    fn test_pages_concatenate_to_input() {
        for n in 0..=23usize {
            for size in 1..=7usize {
                let items: Vec<usize> = (0..n).collect();
                let pages = total_pages(n, size);
                let joined: Vec<usize> = (1..=pages)
                    .flat_map(|p| paginate(&items, size, p).items)
                    .collect();
                assert_eq!(joined, items, "n={} size={}", n, size);
            }
        }
    }

    #[test]
    fn test_empty_sequence_has_no_pages() {
        let page = paginate::<u32>(&[], 5, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.show_controls());
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<u32> = (1..=10).collect();
        assert!(paginate(&items, 5, 3).items.is_empty());
    }

    #[test]
    fn test_page_state() {
        let mut state = PageState::new(5);
        assert_eq!(state.current_page(), 1);
        state.set_page(9, 3);
        assert_eq!(state.current_page(), 3);
        state.set_page(0, 3);
        assert_eq!(state.current_page(), 1);
        state.set_page(3, 3);
        assert!(state.clamp(2));
        assert_eq!(state.current_page(), 2);
        assert!(state.clamp(0));
        assert_eq!(state.current_page(), 1);
        assert_eq!(PageState::new(0).page_size(), 1);
    }

    #[test]
    fn test_markers_small_totals() {
        assert_eq!(page_markers(1, 0), vec![P(1)]);
        assert_eq!(page_markers(1, 1), vec![P(1)]);
        assert_eq!(page_markers(2, 3), vec![P(1), P(2), P(3)]);
    }

    #[test]
    fn test_markers_collapse_gaps() {
        assert_eq!(page_markers(1, 10), vec![P(1), P(2), Ellipsis, P(10)]);
        assert_eq!(
            page_markers(5, 10),
            vec![P(1), Ellipsis, P(4), P(5), P(6), Ellipsis, P(10)]
        );
        assert_eq!(page_markers(10, 10), vec![P(1), Ellipsis, P(9), P(10)]);
        assert_eq!(page_markers(3, 10), vec![P(1), P(2), P(3), P(4), Ellipsis, P(10)]);
        // a single hidden page still collapses
        assert_eq!(page_markers(1, 4), vec![P(1), P(2), Ellipsis, P(4)]);
    }

    #[test]
    fn test_markers_clamp_current() {
        assert_eq!(page_markers(42, 3), vec![P(1), P(2), P(3)]);
    }
}
