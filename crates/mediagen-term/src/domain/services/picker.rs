use mediagen_core::Catalog;
use mediagen_core::RankedSearch;

use crate::domain::models::SelectOption;

#[cfg(test)]
#[path = "picker_test.rs"]
mod tests;

/// Selection state of the model list: the loaded catalog, the live query and
/// the options currently shown for it.
pub struct ModelPicker {
    search: RankedSearch,
    catalog: Catalog,
    loaded: bool,
    query: String,
    options: Vec<SelectOption>,
    match_count: usize,
    selected: usize,
}

impl ModelPicker {
    pub fn new(search: RankedSearch) -> ModelPicker {
        return ModelPicker {
            search,
            catalog: Catalog::default(),
            loaded: false,
            query: "".to_string(),
            options: vec![SelectOption::loading()],
            match_count: 0,
            selected: 0,
        };
    }

    pub fn load_catalog(&mut self, catalog: Catalog) {
        tracing::info!(models = catalog.len(), "catalog loaded");
        self.catalog = catalog;
        self.loaded = true;
        self.refresh();
    }

    /// Replace the query and recompute the option list from scratch.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        if self.loaded {
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        let matches = self.search.rank(self.catalog.items(), &self.query);
        self.match_count = matches.len();

        self.options = if matches.is_empty() {
            vec![SelectOption::no_matches()]
        } else {
            matches.iter().map(SelectOption::from).collect()
        };
        self.selected = 0;

        tracing::debug!(
            query = self.query.as_str(),
            matches = self.match_count,
            "filtered models"
        );
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn select_previous(&mut self) {
        let len = self.options.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// The highlighted option, unless it is a placeholder.
    pub fn selected(&self) -> Option<&SelectOption> {
        return self
            .options
            .get(self.selected)
            .filter(|option| return option.is_selectable());
    }

    pub fn selected_index(&self) -> usize {
        return self.selected;
    }

    pub fn options(&self) -> &[SelectOption] {
        return &self.options;
    }

    pub fn query(&self) -> &str {
        return &self.query;
    }

    pub fn catalog(&self) -> &Catalog {
        return &self.catalog;
    }

    pub fn is_loaded(&self) -> bool {
        return self.loaded;
    }

    pub fn status(&self) -> String {
        if !self.loaded {
            return "Loading...".to_string();
        }

        let counts = format!("{}/{}", self.match_count, self.catalog.len());
        if let Some(option) = self.selected() {
            return format!("{} | {counts}", option.name);
        }

        return format!("{counts} models");
    }
}
