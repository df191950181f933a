use serde::Deserialize;

/// Query half of a paged list request. Created per request, discarded after
/// the render that consumes the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub record_size: u32,
    pub page_size: u32,
}

impl PageQuery {
    pub fn new(page: u32, record_size: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            record_size,
            page_size,
        }
    }

    pub fn first(record_size: u32, page_size: u32) -> Self {
        Self::new(1, record_size, page_size)
    }

    pub fn with_page(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    pub fn as_params(&self) -> [(&'static str, String); 3] {
        [
            ("page", self.page.to_string()),
            ("recordSize", self.record_size.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }

    /// Page holding the last record of a list with `record_count` entries.
    pub fn last_page(record_count: u64, record_size: u32) -> u32 {
        if record_size == 0 {
            return 1;
        }
        (record_count.div_ceil(record_size as u64).max(1)) as u32
    }
}

/// Server-reported paging metadata. Used only to rebuild the page controls
/// after a load, never cached across loads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub total_record_count: u64,
    pub page: u32,
    pub page_size: u32,
}

/// One clickable page control. The delegated-click markup attributes of the
/// original become plain fields here; the active button is never dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButton {
    pub label: String,
    pub page: u32,
    pub url: String,
    pub active: bool,
}

impl PageButton {
    fn numbered(page: u32, url: &str, active: bool) -> Self {
        Self {
            label: page.to_string(),
            page,
            url: url.to_string(),
            active,
        }
    }

    fn jump(label: &str, page: u32, url: &str) -> Self {
        Self {
            label: label.to_string(),
            page,
            url: url.to_string(),
            active: false,
        }
    }
}

/// Builds the sliding window of page controls around the current page.
/// Either input missing degenerates to no controls at all.
pub fn page_controls(
    descriptor: Option<&Pagination>,
    query: Option<&PageQuery>,
    url: &str,
) -> Vec<PageButton> {
    let (Some(descriptor), Some(query)) = (descriptor, query) else {
        return Vec::new();
    };
    if query.record_size == 0 || query.page_size == 0 {
        return Vec::new();
    }

    let total_pages = descriptor.total_record_count.div_ceil(query.record_size as u64) as u32;
    if total_pages == 0 {
        return Vec::new();
    }

    let current = query.page.clamp(1, total_pages);
    let window_start = ((current - 1) / query.page_size) * query.page_size + 1;
    let window_end = (window_start + query.page_size - 1).min(total_pages);

    let mut buttons = Vec::with_capacity((window_end - window_start + 3) as usize);
    if window_start > 1 {
        buttons.push(PageButton::jump("«", window_start - 1, url));
    }
    for page in window_start..=window_end {
        buttons.push(PageButton::numbered(page, url, page == current));
    }
    if window_end < total_pages {
        buttons.push(PageButton::jump("»", window_end + 1, url));
    }

    buttons
}

/// Renders page controls into list markup, empty markup for no controls.
pub fn pagination_markup(buttons: &[PageButton]) -> String {
    if buttons.is_empty() {
        return String::new();
    }

    let mut markup = String::from("<ul class=\"pagination\">");
    for button in buttons {
        let item_class = if button.active {
            "page-item active"
        } else {
            "page-item"
        };
        markup.push_str(&format!(
            "<li class=\"{}\"><button class=\"page-link\" url=\"{}\" page=\"{}\">{}</button></li>",
            item_class, button.url, button.page, button.label
        ));
    }
    markup.push_str("</ul>");
    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(total: u64) -> Pagination {
        Pagination {
            total_record_count: total,
            ..Pagination::default()
        }
    }

    #[test]
    fn one_numbered_button_per_page_with_one_active() {
        let descriptor = descriptor(95);
        for page in 1..=10u32 {
            let query = PageQuery::new(page, 10, 10);
            let buttons = page_controls(Some(&descriptor), Some(&query), "/comment/1/2");

            let numbered: Vec<_> = buttons.iter().filter(|b| b.label != "«" && b.label != "»").collect();
            assert_eq!(numbered.len(), 10);

            let pages: std::collections::HashSet<u32> = numbered.iter().map(|b| b.page).collect();
            assert_eq!(pages.len(), 10);

            let active: Vec<_> = buttons.iter().filter(|b| b.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].page, page);
        }
    }

    #[test]
    fn missing_descriptor_or_query_yields_empty_markup() {
        let query = PageQuery::first(20, 10);
        let descriptor = descriptor(40);

        let without_descriptor = page_controls(None, Some(&query), "/comment/1/2");
        let without_query = page_controls(Some(&descriptor), None, "/comment/1/2");

        assert!(without_descriptor.is_empty());
        assert!(without_query.is_empty());
        assert_eq!(pagination_markup(&without_descriptor), "");
        assert_eq!(pagination_markup(&without_query), "");
        // Re-running the degenerate build changes nothing.
        assert_eq!(pagination_markup(&page_controls(None, Some(&query), "/comment/1/2")), "");
    }

    #[test]
    fn window_slides_around_current_page() {
        let descriptor = descriptor(125);
        let query = PageQuery::new(13, 5, 10);
        let buttons = page_controls(Some(&descriptor), Some(&query), "/music/play-list");

        let numbered: Vec<u32> = buttons
            .iter()
            .filter(|b| b.label != "«" && b.label != "»")
            .map(|b| b.page)
            .collect();
        assert_eq!(numbered, (11..=20).collect::<Vec<_>>());

        assert_eq!(buttons.first().map(|b| (b.label.as_str(), b.page)), Some(("«", 10)));
        assert_eq!(buttons.last().map(|b| (b.label.as_str(), b.page)), Some(("»", 21)));
    }

    #[test]
    fn markup_marks_exactly_the_active_item() {
        let descriptor = descriptor(30);
        let query = PageQuery::new(2, 10, 10);
        let markup = pagination_markup(&page_controls(Some(&descriptor), Some(&query), "/u"));

        assert_eq!(markup.matches("page-item active").count(), 1);
        assert!(markup.contains("url=\"/u\" page=\"2\">2</button>"));
        assert!(markup.starts_with("<ul class=\"pagination\">"));
    }

    #[test]
    fn empty_list_has_no_controls() {
        let query = PageQuery::first(5, 5);
        assert!(page_controls(Some(&descriptor(0)), Some(&query), "/u").is_empty());
    }

    #[test]
    fn last_page_rounds_up() {
        assert_eq!(PageQuery::last_page(25, 20), 2);
        assert_eq!(PageQuery::last_page(20, 20), 1);
        assert_eq!(PageQuery::last_page(21, 20), 2);
        assert_eq!(PageQuery::last_page(0, 20), 1);
    }

    #[test]
    fn page_query_floors_at_one() {
        assert_eq!(PageQuery::new(0, 20, 10).page, 1);
        assert_eq!(PageQuery::first(20, 10).with_page(0).page, 1);
    }
}
