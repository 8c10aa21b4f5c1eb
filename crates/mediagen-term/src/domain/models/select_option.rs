use mediagen_core::ScoredMatch;
use serde::Serialize;

/// Display width of an option description.
pub const DESCRIPTION_WIDTH: usize = 50;

/// One row of the model list. An empty `value` marks a placeholder row that
/// cannot be selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub name: String,
    pub value: String,
    pub description: String,
}

impl SelectOption {
    pub fn no_matches() -> SelectOption {
        return SelectOption {
            name: "No matches".to_string(),
            value: "".to_string(),
            description: "Try different terms".to_string(),
        };
    }

    pub fn loading() -> SelectOption {
        return SelectOption {
            name: "Loading...".to_string(),
            value: "".to_string(),
            description: "Fetching...".to_string(),
        };
    }

    pub fn is_selectable(&self) -> bool {
        return !self.value.is_empty();
    }
}

impl From<&ScoredMatch<'_>> for SelectOption {
    fn from(scored: &ScoredMatch<'_>) -> SelectOption {
        let item = scored.item;
        let description = format!("[{}] {}", item.category, item.description)
            .chars()
            .take(DESCRIPTION_WIDTH)
            .collect();

        return SelectOption {
            name: item.title.clone(),
            value: item.id.clone(),
            description,
        };
    }
}
