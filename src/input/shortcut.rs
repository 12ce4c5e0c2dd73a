use crate::state::{Category, SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKey {
    Character(char),
    Enter,
    Escape,
}

/// Element holding keyboard focus when a key is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputContext {
    #[default]
    Page,
    SearchInput {
        text: String,
    },
    Card {
        id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryAction {
    ApplySearch(String),
    ClearSearch,
    SelectCategory(Category),
    ToggleFavoritesOnly,
    SetSort(Option<SortKey>),
    ToggleFavorite(String),
    ShowDetails(String),
}

fn resolve_search_shortcut(key: ShortcutKey, text: &str) -> Option<GalleryAction> {
    match key {
        ShortcutKey::Enter => Some(GalleryAction::ApplySearch(text.to_string())),
        ShortcutKey::Escape => Some(GalleryAction::ClearSearch),
        ShortcutKey::Character(_) => None,
    }
}

fn resolve_card_shortcut(key: ShortcutKey, id: &str) -> Option<GalleryAction> {
    match key {
        ShortcutKey::Enter => Some(GalleryAction::ToggleFavorite(id.to_string())),
        ShortcutKey::Character('d') => Some(GalleryAction::ShowDetails(id.to_string())),
        _ => None,
    }
}

pub fn resolve_shortcut(key: ShortcutKey, context: &InputContext) -> Option<GalleryAction> {
    match context {
        InputContext::SearchInput { text } => resolve_search_shortcut(key, text),
        InputContext::Card { id } => resolve_card_shortcut(key, id),
        InputContext::Page => None,
    }
}

/// Maps a card button's `data-action` tag to an action on `id`.
pub fn resolve_card_action(tag: &str, id: &str) -> Option<GalleryAction> {
    if id.is_empty() {
        return None;
    }
    match tag {
        "fav" => Some(GalleryAction::ToggleFavorite(id.to_string())),
        "details" => Some(GalleryAction::ShowDetails(id.to_string())),
        _ => None,
    }
}

/// Maps a category button's `data-filter` tag. Untagged buttons select `all`.
pub fn resolve_category_button(tag: Option<&str>) -> Option<GalleryAction> {
    match tag.filter(|tag| !tag.is_empty()) {
        None => Some(GalleryAction::SelectCategory(Category::All)),
        Some(tag) => Category::parse(tag).map(GalleryAction::SelectCategory),
    }
}

/// Maps the sort select's value; an empty value clears the sort.
pub fn resolve_sort_select(value: &str) -> Option<GalleryAction> {
    if value.is_empty() || value == "none" {
        return Some(GalleryAction::SetSort(None));
    }
    SortKey::parse(value).map(|key| GalleryAction::SetSort(Some(key)))
}
