use super::error::{StateError, StateResult};
use super::{Category, FilterEvent, FilterTransition};

/// Category selector state. Transitions only happen on explicit user events.
#[derive(Debug, Clone)]
pub struct CategoryMachine {
    state: Category,
    enabled: Vec<Category>,
    transition_history: Vec<FilterTransition>,
}

impl CategoryMachine {
    pub fn new(enabled: &[Category]) -> Self {
        let mut enabled = enabled.to_vec();
        // `all` is the initial state, so it is always reachable.
        if !enabled.contains(&Category::All) {
            enabled.insert(0, Category::All);
        }
        Self {
            state: Category::All,
            enabled,
            transition_history: Vec::new(),
        }
    }

    pub fn state(&self) -> Category {
        self.state
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        self.enabled.contains(&category)
    }

    pub fn can_transition(&self, event: FilterEvent) -> bool {
        self.next_state(event).is_ok()
    }

    pub fn next_state(&self, event: FilterEvent) -> StateResult<Category> {
        let target = match event {
            FilterEvent::Select(category) => category,
            FilterEvent::ToggleFavoritesOnly if self.state == Category::FavoritesOnly => {
                Category::All
            }
            FilterEvent::ToggleFavoritesOnly => Category::FavoritesOnly,
        };

        if self.is_enabled(target) {
            Ok(target)
        } else {
            Err(StateError::CategoryDisabled {
                from: self.state,
                event,
                category: target,
            })
        }
    }

    pub fn transition(&mut self, event: FilterEvent) -> StateResult<Category> {
        tracing::debug!(from = ?self.state, event = ?event, "request category transition");
        let next = self.next_state(event).inspect_err(|_| {
            tracing::warn!(from = ?self.state, event = ?event, "disabled category requested");
        })?;

        self.transition_history
            .push(FilterTransition::new(self.state, event, next));
        self.state = next;
        Ok(next)
    }

    pub fn history(&self) -> &[FilterTransition] {
        &self.transition_history
    }
}

impl std::fmt::Display for CategoryMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category::{:?}", self.state)
    }
}
