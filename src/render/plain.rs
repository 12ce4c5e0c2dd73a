use super::{Card, Surface};

/// Line-oriented surface used by the terminal front end.
#[derive(Debug, Clone, Default)]
pub struct PlainSurface {
    cards: Vec<Card>,
    lines: Vec<String>,
}

impl PlainSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains everything rendered since the last call.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Surface for PlainSurface {
    fn replace_cards(&mut self, cards: &[Card]) -> bool {
        self.cards = cards.to_vec();
        for card in cards {
            let marker = if card.favorite { '★' } else { '☆' };
            let mut line = format!("{marker} [{}] {} | {}", card.id, card.title, card.meta);
            if let Some(size) = &card.size_label {
                line.push_str(" | ");
                line.push_str(size);
            }
            self.lines.push(line);
        }
        true
    }

    fn set_result_count(&mut self, text: &str) -> bool {
        self.lines.push(text.to_string());
        true
    }

    fn set_favorite_count(&mut self, count: usize) -> bool {
        self.lines.push(format!("favorites: {count}"));
        true
    }

    fn resolve_image(&mut self, card_id: &str) -> bool {
        let Some(card) = self.cards.iter().find(|card| card.id == card_id) else {
            return false;
        };
        self.lines.push(format!("  loaded {}", card.image));
        true
    }
}
