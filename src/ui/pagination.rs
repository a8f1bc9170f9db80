//! Pagination arithmetic for page-number widgets.
//!
//! Pure functions only: given the page/size/total triple they compute the
//! visible page window, boundary flags, the "items X–Y of Z" range, and
//! 1-based global row numbers. No I/O, no state.

use serde::Serialize;

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [u32; 5] = [5, 10, 20, 50, 100];

/// Display configuration of one paginated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationConfig {
    pub current_page: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub show_first_last: bool,
    pub show_prev_next: bool,
    pub max_visible_pages: u32,
}

/// Everything a page-number widget needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    pub pages: Vec<u32>,
    pub show_start_ellipsis: bool,
    pub show_end_ellipsis: bool,
    pub is_first_page: bool,
    pub is_last_page: bool,
    /// 1-based index of the first item on the current page.
    pub start_item: u64,
    /// 1-based index of the last item on the current page.
    pub end_item: u64,
}

/// Navigation requests coming from a page widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
    Page(u32),
}

/// Ordered page indices to show around `current`.
///
/// The window keeps `current` visible, holds `max_visible` slots whenever
/// there are enough pages, and slides instead of shrinking at either end.
pub fn visible_pages(current: u32, total: u32, max_visible: u32) -> Vec<u32> {
    if total == 0 || max_visible == 0 {
        return Vec::new();
    }
    if total <= max_visible {
        return (0..total).collect();
    }

    let last = total - 1;
    let half = max_visible / 2;
    let mut start = current.min(last).saturating_sub(half);
    let mut end = last.min(start.saturating_add(max_visible - 1));

    if end == last {
        start = (end + 1).saturating_sub(max_visible);
    }
    if start == 0 {
        end = last.min(max_visible - 1);
    }

    (start..=end).collect()
}

/// 1-based display number of the row at `local_index` on page `current`.
pub fn global_index(local_index: usize, current: u32, size: u32) -> u64 {
    u64::from(current) * u64::from(size) + local_index as u64 + 1
}

impl PageWindow {
    pub fn new(config: &PaginationConfig) -> Self {
        let PaginationConfig {
            current_page,
            page_size,
            total_elements,
            total_pages,
            max_visible_pages,
            ..
        } = *config;

        let pages = visible_pages(current_page, total_pages, max_visible_pages);
        let show_start_ellipsis = pages.first().is_some_and(|first| *first > 1);
        let show_end_ellipsis = pages
            .last()
            .is_some_and(|last| i64::from(*last) < i64::from(total_pages) - 2);

        let start_item = u64::from(current_page) * u64::from(page_size) + 1;
        let end_item = ((u64::from(current_page) + 1) * u64::from(page_size)).min(total_elements);

        Self {
            pages,
            show_start_ellipsis,
            show_end_ellipsis,
            is_first_page: current_page == 0 || total_pages == 0,
            is_last_page: total_pages == 0 || current_page + 1 >= total_pages,
            start_item,
            end_item,
        }
    }
}

impl PaginationConfig {
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self)
    }

    /// Page to request for `nav`, or `None` when the click is a no-op
    /// (already there, or outside the known pages).
    pub fn navigate(&self, nav: PageNav) -> Option<u32> {
        let window = self.window();
        match nav {
            PageNav::First if !window.is_first_page => Some(0),
            PageNav::Previous if !window.is_first_page => Some(self.current_page - 1),
            PageNav::Next if !window.is_last_page => Some(self.current_page + 1),
            PageNav::Last if !window.is_last_page => Some(self.total_pages - 1),
            PageNav::Page(page) if page != self.current_page && page < self.total_pages => {
                Some(page)
            }
            _ => None,
        }
    }
}

/// An item paired with its 1-based position across all pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Indexed<T> {
    pub global_index: u64,
    #[serde(flatten)]
    pub item: T,
}

/// Number every item of the current page.
pub fn with_global_index<'a, T>(items: &'a [T], config: &PaginationConfig) -> Vec<Indexed<&'a T>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| Indexed {
            global_index: global_index(i, config.current_page, config.page_size),
            item,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(current_page: u32, page_size: u32, total_elements: u64) -> PaginationConfig {
        PaginationConfig {
            current_page,
            page_size,
            total_elements,
            total_pages: total_elements.div_ceil(u64::from(page_size)) as u32,
            show_first_last: true,
            show_prev_next: true,
            max_visible_pages: 5,
        }
    }

    #[test]
    fn window_centers_on_current_page() {
        assert_eq!(visible_pages(5, 20, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn few_pages_are_all_visible() {
        assert_eq!(visible_pages(0, 3, 5), vec![0, 1, 2]);
    }

    #[test]
    fn no_pages_means_empty_window() {
        assert!(visible_pages(0, 0, 5).is_empty());
    }

    #[test]
    fn window_shifts_left_at_the_end() {
        assert_eq!(visible_pages(19, 20, 5), vec![15, 16, 17, 18, 19]);
        assert_eq!(visible_pages(18, 20, 5), vec![15, 16, 17, 18, 19]);
    }

    #[test]
    fn window_fills_right_at_the_start() {
        assert_eq!(visible_pages(0, 20, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(visible_pages(1, 20, 5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn even_window_sizes_keep_full_width() {
        assert_eq!(visible_pages(5, 20, 4), vec![3, 4, 5, 6]);
        assert_eq!(visible_pages(5, 20, 3), vec![4, 5, 6]);
    }

    #[test]
    fn out_of_range_current_clamps_to_last_page() {
        assert_eq!(visible_pages(40, 10, 3), vec![7, 8, 9]);
    }

    #[test]
    fn huge_page_counts_do_not_overflow() {
        let last = u32::MAX - 1;
        assert_eq!(
            visible_pages(last, u32::MAX, 5),
            vec![last - 4, last - 3, last - 2, last - 1, last]
        );
    }

    #[test]
    fn zero_max_visible_shows_nothing() {
        assert!(visible_pages(2, 10, 0).is_empty());
    }

    #[test]
    fn ellipses_follow_window_edges() {
        let middle = config(10, 5, 100).window();
        assert!(middle.show_start_ellipsis);
        assert!(middle.show_end_ellipsis);

        let start = config(0, 5, 100).window();
        assert!(!start.show_start_ellipsis);
        assert!(start.show_end_ellipsis);

        let end = config(19, 5, 100).window();
        assert!(end.show_start_ellipsis);
        assert!(!end.show_end_ellipsis);
    }

    #[test]
    fn item_range_is_clamped_to_total() {
        let window = config(4, 5, 23).window();
        assert_eq!(window.start_item, 21);
        assert_eq!(window.end_item, 23);
    }

    #[test]
    fn empty_collection_is_degenerate() {
        let window = config(0, 5, 0).window();
        assert!(window.pages.is_empty());
        assert!(!window.show_start_ellipsis);
        assert!(!window.show_end_ellipsis);
        assert!(window.is_first_page);
        assert!(window.is_last_page);
    }

    #[test]
    fn global_index_is_stable_across_pages() {
        assert_eq!(global_index(0, 0, 5), 1);
        assert_eq!(global_index(2, 3, 5), 18);
    }

    #[test]
    fn items_are_numbered_from_page_offset() {
        let items = ["a", "b", "c"];
        let indexed = with_global_index(&items, &config(2, 3, 9));
        let numbers: Vec<u64> = indexed.iter().map(|i| i.global_index).collect();
        assert_eq!(numbers, vec![7, 8, 9]);
        assert_eq!(*indexed[1].item, "b");
    }

    #[test]
    fn navigation_targets() {
        let cfg = config(2, 5, 23);
        assert_eq!(cfg.navigate(PageNav::First), Some(0));
        assert_eq!(cfg.navigate(PageNav::Previous), Some(1));
        assert_eq!(cfg.navigate(PageNav::Next), Some(3));
        assert_eq!(cfg.navigate(PageNav::Last), Some(4));
        assert_eq!(cfg.navigate(PageNav::Page(4)), Some(4));
        assert_eq!(cfg.navigate(PageNav::Page(2)), None);
        assert_eq!(cfg.navigate(PageNav::Page(5)), None);
    }

    #[test]
    fn navigation_is_noop_at_boundaries() {
        let first = config(0, 5, 23);
        assert_eq!(first.navigate(PageNav::First), None);
        assert_eq!(first.navigate(PageNav::Previous), None);

        let last = config(4, 5, 23);
        assert_eq!(last.navigate(PageNav::Next), None);
        assert_eq!(last.navigate(PageNav::Last), None);

        let empty = config(0, 5, 0);
        assert_eq!(empty.navigate(PageNav::Next), None);
        assert_eq!(empty.navigate(PageNav::Last), None);
    }
}
