//! Page Number Windowing
//!
//! Compresses long page strips into `1 … 4 5 6 … 10` style windows so the
//! list screens never render an unbounded row of buttons.

/// One slot in the rendered page strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Window the page strip around the current page.
///
/// Up to 5 pages render in full. Beyond that: the first four pages near the
/// start, the last four near the end, and `first … prev current next … last`
/// in the middle.
pub fn page_numbers(total_pages: u32, current_page: u32) -> Vec<PageItem> {
    use PageItem::*;

    let mut pages = Vec::new();
    if total_pages <= 5 {
        pages.extend((1..=total_pages).map(Page));
    } else if current_page <= 3 {
        pages.extend((1..=4).map(Page));
        pages.push(Ellipsis);
        pages.push(Page(total_pages));
    } else if current_page >= total_pages - 2 {
        pages.push(Page(1));
        pages.push(Ellipsis);
        pages.extend((total_pages - 3..=total_pages).map(Page));
    } else {
        pages.push(Page(1));
        pages.push(Ellipsis);
        pages.extend((current_page - 1..=current_page + 1).map(Page));
        pages.push(Ellipsis);
        pages.push(Page(total_pages));
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::*;

    #[test]
    fn short_strips_render_every_page() {
        assert_eq!(
            page_numbers(5, 3),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(page_numbers(1, 1), vec![Page(1)]);
    }

    #[test]
    fn near_start_shows_first_four() {
        assert_eq!(
            page_numbers(10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn near_end_shows_last_four() {
        assert_eq!(
            page_numbers(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn middle_windows_around_current() {
        assert_eq!(
            page_numbers(10, 5),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }
}
