use std::collections::HashSet;
use std::fmt::Write as _;

use super::{Card, Surface};

#[derive(Debug, Clone, Default)]
struct Grid {
    cards: Vec<Card>,
    resolved: HashSet<String>,
}

/// Renders the gallery into HTML fragments, one per page container.
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    grid: Option<Grid>,
    result_count: Option<String>,
    favorite_count: Option<String>,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::with_containers(true, true, true)
    }

    /// Surface for a page that only carries some of the gallery containers.
    pub fn with_containers(grid: bool, result_count: bool, favorite_count: bool) -> Self {
        Self {
            grid: grid.then(Grid::default),
            result_count: result_count.then(String::new),
            favorite_count: favorite_count.then(String::new),
        }
    }

    pub fn grid_html(&self) -> Option<String> {
        let grid = self.grid.as_ref()?;
        let mut html = String::new();
        for card in &grid.cards {
            write_card(&mut html, card, grid.resolved.contains(&card.id));
        }
        Some(html)
    }

    pub fn result_count(&self) -> Option<&str> {
        self.result_count.as_deref()
    }

    pub fn favorite_count(&self) -> Option<&str> {
        self.favorite_count.as_deref()
    }
}

impl Default for HtmlSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for HtmlSurface {
    fn replace_cards(&mut self, cards: &[Card]) -> bool {
        let Some(grid) = self.grid.as_mut() else {
            return false;
        };
        grid.cards = cards.to_vec();
        grid.resolved.clear();
        true
    }

    fn set_result_count(&mut self, text: &str) -> bool {
        match self.result_count.as_mut() {
            Some(slot) => {
                *slot = text.to_string();
                true
            }
            None => false,
        }
    }

    fn set_favorite_count(&mut self, count: usize) -> bool {
        match self.favorite_count.as_mut() {
            Some(slot) => {
                *slot = count.to_string();
                true
            }
            None => false,
        }
    }

    fn resolve_image(&mut self, card_id: &str) -> bool {
        let Some(grid) = self.grid.as_mut() else {
            return false;
        };
        if !grid.cards.iter().any(|card| card.id == card_id) {
            return false;
        }
        grid.resolved.insert(card_id.to_string());
        true
    }
}

fn write_card(html: &mut String, card: &Card, image_loaded: bool) {
    let id = escape(&card.id);
    let title = escape(&card.title);
    let image_attr = if image_loaded { "src" } else { "data-src" };
    let saved = if card.favorite { " saved" } else { "" };

    // Writing into a String cannot fail.
    let _ = write!(
        html,
        concat!(
            "<article class=\"card\" data-id=\"{id}\" tabindex=\"0\">",
            "<div class=\"card-figure\"><img {image_attr}=\"{image}\" alt=\"{title} photo\" loading=\"lazy\"></div>",
            "<div class=\"card-body\">",
            "<h3 class=\"card-title\">{title}</h3>",
            "<div class=\"card-meta\">{meta}</div>",
            "<p>{description}</p>",
            "<div class=\"card-actions\">",
            "<button class=\"btn\" data-action=\"details\" data-id=\"{id}\">Details</button>",
            "<button class=\"fav-btn{saved}\" data-action=\"fav\" data-id=\"{id}\" aria-pressed=\"{pressed}\">{label}</button>",
        ),
        id = id,
        image_attr = image_attr,
        image = escape(&card.image),
        title = title,
        meta = escape(&card.meta),
        description = escape(&card.description),
        saved = saved,
        pressed = card.favorite,
        label = escape(&card.favorite_label),
    );
    if let Some(size) = &card.size_label {
        let _ = write!(html, "<div class=\"card-size\">{}</div>", escape(size));
    }
    html.push_str("</div></div></article>");
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
