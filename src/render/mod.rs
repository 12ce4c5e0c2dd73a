use serde::Deserialize;

use crate::catalog::CatalogItem;
use crate::state::Favorites;

mod html;
mod lazy;
mod plain;

pub use html::HtmlSurface;
pub use lazy::{CardLayout, ImageSlot, LazyImageLoader, LazyImageSettings, Viewport};
pub use plain::PlainSurface;

pub const FAVORITE_LABEL: &str = "★ Favorite";
pub const ADD_FAVORITE_LABEL: &str = "☆ Add Favorite";

/// Text of the per-card favorite toggle, configurable per gallery page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CardLabels {
    pub favorite: String,
    pub add_favorite: String,
}

impl Default for CardLabels {
    fn default() -> Self {
        Self {
            favorite: FAVORITE_LABEL.to_string(),
            add_favorite: ADD_FAVORITE_LABEL.to_string(),
        }
    }
}

impl CardLabels {
    pub fn for_state(&self, favorite: bool) -> &str {
        if favorite {
            &self.favorite
        } else {
            &self.add_favorite
        }
    }
}

/// Presentation model of one gallery card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub meta: String,
    pub description: String,
    pub size_label: Option<String>,
    pub image: String,
    pub favorite: bool,
    pub favorite_label: String,
}

impl Card {
    pub fn from_item(item: &CatalogItem, favorite: bool, labels: &CardLabels) -> Self {
        Self {
            id: item.id.clone(),
            title: item.name.clone(),
            meta: format!("{} • {}", item.location, item.year),
            description: item.description.clone(),
            size_label: item.size.map(|size| format!("{} sq ft", group_thousands(size))),
            image: item.image.clone(),
            favorite,
            favorite_label: labels.for_state(favorite).to_string(),
        }
    }
}

pub fn cards_for(view: &[&CatalogItem], favorites: &Favorites, labels: &CardLabels) -> Vec<Card> {
    view.iter()
        .map(|item| Card::from_item(item, favorites.contains(&item.id), labels))
        .collect()
}

pub fn result_count_text(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} temple{suffix} shown")
}

pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Presentation side of the gallery. Only implementors touch visible elements.
///
/// Each method returns `false` when the target container does not exist on
/// this surface; callers treat that as a no-op.
pub trait Surface {
    fn replace_cards(&mut self, cards: &[Card]) -> bool;
    fn set_result_count(&mut self, text: &str) -> bool;
    fn set_favorite_count(&mut self, count: usize) -> bool;
    /// Switches the card image `card_id` from deferred to loaded.
    fn resolve_image(&mut self, card_id: &str) -> bool;
}
