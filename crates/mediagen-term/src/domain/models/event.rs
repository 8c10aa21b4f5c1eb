use mediagen_core::Catalog;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    CatalogLoaded(Catalog),
    QueryChanged(String),
    SelectNext,
    SelectPrevious,
    Confirm,
    Quit,
}

impl Event {
    /// Interpret one line of terminal input. Slash commands drive the
    /// selection; anything else replaces the search query.
    pub fn from_input(line: &str) -> Event {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim() {
            "/next" | "/n" => Event::SelectNext,
            "/prev" | "/p" => Event::SelectPrevious,
            "/select" | "/s" => Event::Confirm,
            "/quit" | "/q" | "/exit" => Event::Quit,
            _ => Event::QueryChanged(line.to_string()),
        }
    }
}
