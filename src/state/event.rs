use super::model::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEvent {
    Select(Category),
    /// "Show Favorites" / "Show All" button.
    ToggleFavoritesOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTransition {
    pub from: Category,
    pub event: FilterEvent,
    pub to: Category,
}

impl FilterTransition {
    pub const fn new(from: Category, event: FilterEvent, to: Category) -> Self {
        Self { from, event, to }
    }
}
