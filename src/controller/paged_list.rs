use crate::model::paging::{self, PageButton, PageQuery, Pagination};

/// The one request/render/paginate cycle shared by both panels: issue a
/// generation-tagged load, swap the rendered rows in on the matching
/// response, rebuild the page controls from the server descriptor.
///
/// A response whose generation is not the newest issued one is discarded,
/// so a late reply can never overwrite newer state.
#[derive(Debug, Clone)]
pub struct PagedList<T> {
    url: String,
    record_size: u32,
    page_size: u32,
    generation: u64,
    loading: bool,
    query: Option<PageQuery>,
    items: Vec<T>,
    controls: Vec<PageButton>,
}

impl<T> PagedList<T> {
    pub fn new(url: impl Into<String>, record_size: u32, page_size: u32) -> Self {
        Self {
            url: url.into(),
            record_size,
            page_size,
            generation: 0,
            loading: false,
            query: None,
            items: Vec::new(),
            controls: Vec::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn record_size(&self) -> u32 {
        self.record_size
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn controls(&self) -> &[PageButton] {
        &self.controls
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn current_page(&self) -> u32 {
        self.query.map(|q| q.page).unwrap_or(1)
    }

    /// Starts a load of `page` and returns the tag and query to send with it.
    pub fn begin_load(&mut self, page: u32) -> (u64, PageQuery) {
        self.generation += 1;
        self.loading = true;
        (
            self.generation,
            PageQuery::new(page, self.record_size, self.page_size),
        )
    }

    /// Starts a load for a page control. The active control is not
    /// dispatchable, matching the original's ignored clicks on the active
    /// list item.
    pub fn begin_load_for(&mut self, button: &PageButton) -> Option<(u64, PageQuery)> {
        if button.active {
            return None;
        }
        Some(self.begin_load(button.page))
    }

    /// Applies a response. Returns false (leaving everything untouched) when
    /// the response is stale.
    pub fn apply(
        &mut self,
        generation: u64,
        items: Vec<T>,
        descriptor: Option<Pagination>,
        query: PageQuery,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        self.items = items;
        self.query = Some(query);
        self.controls = paging::page_controls(descriptor.as_ref(), Some(&query), &self.url);
        true
    }

    /// A failed load keeps the prior rows and controls.
    pub fn fail(&mut self, generation: u64) {
        if generation == self.generation {
            self.loading = false;
        }
    }

    pub fn markup(&self) -> String {
        paging::pagination_markup(&self.controls)
    }
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
    fn apply_swaps_rows_and_rebuilds_controls() {
        let mut list: PagedList<&str> = PagedList::new("/comment/1/2", 20, 10);
        let (generation, query) = list.begin_load(2);

        assert!(list.apply(generation, vec!["a", "b"], Some(descriptor(25)), query));
        assert_eq!(list.items(), &["a", "b"]);
        assert_eq!(list.current_page(), 2);
        assert_eq!(list.controls().len(), 2);
        assert!(!list.is_loading());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut list: PagedList<&str> = PagedList::new("/music/play-list", 5, 5);
        let (first_generation, first_query) = list.begin_load(1);
        let (second_generation, second_query) = list.begin_load(3);

        // The late reply to the superseded request must not land.
        assert!(!list.apply(first_generation, vec!["old"], Some(descriptor(50)), first_query));
        assert!(list.items().is_empty());
        assert!(list.is_loading());

        assert!(list.apply(second_generation, vec!["new"], Some(descriptor(50)), second_query));
        assert_eq!(list.items(), &["new"]);
        assert_eq!(list.current_page(), 3);
    }

    #[test]
    fn failed_load_leaves_prior_state_untouched() {
        let mut list: PagedList<&str> = PagedList::new("/comment/1/2", 20, 10);
        let (generation, query) = list.begin_load(1);
        assert!(list.apply(generation, vec!["kept"], Some(descriptor(40)), query));

        let (failed_generation, _) = list.begin_load(2);
        list.fail(failed_generation);

        assert_eq!(list.items(), &["kept"]);
        assert_eq!(list.current_page(), 1);
        assert!(!list.controls().is_empty());
        assert!(!list.is_loading());
    }

    #[test]
    fn active_control_is_not_dispatchable() {
        let mut list: PagedList<&str> = PagedList::new("/comment/1/2", 20, 10);
        let (generation, query) = list.begin_load(2);
        assert!(list.apply(generation, vec!["row"], Some(descriptor(60)), query));

        let active = list
            .controls()
            .iter()
            .find(|b| b.active)
            .cloned()
            .unwrap();
        let inactive = list
            .controls()
            .iter()
            .find(|b| !b.active && b.label != "«" && b.label != "»")
            .cloned()
            .unwrap();

        assert!(list.begin_load_for(&active).is_none());
        assert!(list.begin_load_for(&inactive).is_some());
    }

    #[test]
    fn missing_descriptor_clears_stale_controls() {
        let mut list: PagedList<&str> = PagedList::new("/music/play-list", 5, 5);
        let (generation, query) = list.begin_load(1);
        assert!(list.apply(generation, vec!["row"], Some(descriptor(9)), query));
        assert!(!list.controls().is_empty());

        // An empty result set renders no rows and drops the old controls.
        let (generation, query) = list.begin_load(1);
        assert!(list.apply(generation, Vec::new(), None, query));
        assert!(list.items().is_empty());
        assert!(list.controls().is_empty());
        assert_eq!(list.markup(), "");
    }
}
