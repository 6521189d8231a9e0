//! Fixed-size pages over whichever dataset is active.

/// Records per page for the whole session.
pub const PAGE_SIZE: usize = 20;

/// Number of pages needed for `count` records; 0 for an empty dataset.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// The slice for 1-based `page_number`.
///
/// A page past the end (or page 0) is an empty slice, never an error: the
/// current page may outlive a dataset that shrank under it.
pub fn page<T>(dataset: &[T], page_number: usize, page_size: usize) -> &[T] {
    if page_number == 0 {
        return &[];
    }
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= dataset.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(dataset.len());
    &dataset[start..end]
}

pub fn next_page(current: usize, total: usize) -> usize {
    if current < total {
        current + 1
    } else {
        current
    }
}

pub fn prev_page(current: usize) -> usize {
    if current > 1 {
        current - 1
    } else {
        current
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_pages() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(45, 20), 3);
    }

    #[test]
    fn test_last_partial_page() {
        let data: Vec<usize> = (0..45).collect();
        assert_eq!(page(&data, 3, 20).to_vec(), vec![40usize, 41, 42, 43, 44]);
    }

    #[test]
    fn test_full_pages() {
        let data: Vec<usize> = (0..45).collect();
        assert_eq!(page(&data, 1, 20), &data[0..20]);
        assert_eq!(page(&data, 2, 20), &data[20..40]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let data: Vec<usize> = (0..45).collect();
        assert!(page(&data, 4, 20).is_empty());
        assert!(page(&data, 0, 20).is_empty());
        assert!(page(&data, usize::MAX, 20).is_empty());
        let empty: Vec<usize> = Vec::new();
        assert!(page(&empty, 1, 20).is_empty());
    }

    #[test]
    fn test_navigation_is_clamped() {
        assert_eq!(next_page(1, 3), 2);
        assert_eq!(next_page(3, 3), 3);
        assert_eq!(next_page(1, 0), 1);
        assert_eq!(prev_page(2), 1);
        assert_eq!(prev_page(1), 1);
    }

    #[test]
    fn test_default_state_starts_on_first_page() {
        let state = PageState::default();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_size, PAGE_SIZE);
    }
}
