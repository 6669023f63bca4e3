use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::DeckController;

impl DeckController {
    /// Open or close the search overlay from the handle.
    pub fn toggle_search(&mut self) {
        self.ui.search.open = !self.ui.search.open;
        if self.ui.search.open {
            self.refresh_search();
        }
    }

    /// Update the query and recompute the ranked matches.
    pub fn set_search_query(&mut self, query: String) {
        if self.ui.search.query != query {
            self.ui.search.query = query;
            self.refresh_search();
        }
    }

    /// Activate the `hit`-th ranked search result.
    pub fn launch_search_hit(&mut self, hit: usize) {
        if let Some(&index) = self.ui.search.matches.get(hit) {
            self.ui.search.open = false;
            self.launch_entry(index);
        }
    }

    /// Recompute the ranked matches for the current query.
    pub(super) fn refresh_search(&mut self) {
        let query = self.ui.search.query.trim().to_owned();
        if query.is_empty() {
            self.ui.search.matches = (0..self.entries.len()).collect();
            return;
        }
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                matcher
                    .fuzzy_match(&entry.title, &query)
                    .map(|score| (score, index))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        self.ui.search.matches = scored.into_iter().map(|(_, index)| index).collect();
    }
}
