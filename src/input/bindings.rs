use std::collections::HashSet;

use super::shortcut::{
    resolve_card_action, resolve_category_button, resolve_shortcut, resolve_sort_select,
    GalleryAction, InputContext, ShortcutKey,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    GalleryGrid,
    SearchInput,
    SearchButton,
    CategoryButtons,
    ShowFavorites,
    SortSelect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    KeyDown,
    Change,
}

/// Raw page event, before it is mapped to a gallery action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    CardClick { action: String, id: String },
    CardKey { id: String, key: ShortcutKey },
    SearchKey { text: String, key: ShortcutKey },
    SearchClick { text: String },
    CategoryClick { filter: Option<String> },
    ShowFavoritesClick,
    SortChange { value: String },
}

impl UiEvent {
    pub fn binding(&self) -> (Control, EventKind) {
        match self {
            UiEvent::CardClick { .. } => (Control::GalleryGrid, EventKind::Click),
            UiEvent::CardKey { .. } => (Control::GalleryGrid, EventKind::KeyDown),
            UiEvent::SearchKey { .. } => (Control::SearchInput, EventKind::KeyDown),
            UiEvent::SearchClick { .. } => (Control::SearchButton, EventKind::Click),
            UiEvent::CategoryClick { .. } => (Control::CategoryButtons, EventKind::Click),
            UiEvent::ShowFavoritesClick => (Control::ShowFavorites, EventKind::Click),
            UiEvent::SortChange { .. } => (Control::SortSelect, EventKind::Change),
        }
    }
}

/// Handler registrations. Registering the same (control, event) twice is a no-op.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    registered: HashSet<(Control, EventKind)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the handler was already registered.
    pub fn register(&mut self, control: Control, event: EventKind) -> bool {
        let inserted = self.registered.insert((control, event));
        if !inserted {
            tracing::debug!(?control, ?event, "handler already registered; skipping");
        }
        inserted
    }

    /// Registers the standard gallery handlers for the controls a page has.
    pub fn register_gallery(&mut self, controls: &[Control]) -> usize {
        let mut added = 0;
        for &control in controls {
            let events: &[EventKind] = match control {
                Control::GalleryGrid => &[EventKind::Click, EventKind::KeyDown],
                Control::SearchInput => &[EventKind::KeyDown],
                Control::SortSelect => &[EventKind::Change],
                Control::SearchButton | Control::CategoryButtons | Control::ShowFavorites => {
                    &[EventKind::Click]
                }
            };
            for &event in events {
                if self.register(control, event) {
                    added += 1;
                }
            }
        }
        added
    }

    pub fn is_bound(&self, control: Control, event: EventKind) -> bool {
        self.registered.contains(&(control, event))
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Maps `event` to an action if a handler is bound for it.
    pub fn dispatch(&self, event: &UiEvent) -> Option<GalleryAction> {
        let (control, kind) = event.binding();
        if !self.is_bound(control, kind) {
            tracing::trace!(?control, ?kind, "no handler bound");
            return None;
        }

        match event {
            UiEvent::CardClick { action, id } => resolve_card_action(action, id),
            UiEvent::CardKey { id, key } => {
                resolve_shortcut(*key, &InputContext::Card { id: id.clone() })
            }
            UiEvent::SearchKey { text, key } => {
                resolve_shortcut(*key, &InputContext::SearchInput { text: text.clone() })
            }
            UiEvent::SearchClick { text } => Some(GalleryAction::ApplySearch(text.clone())),
            UiEvent::CategoryClick { filter } => resolve_category_button(filter.as_deref()),
            UiEvent::ShowFavoritesClick => Some(GalleryAction::ToggleFavoritesOnly),
            UiEvent::SortChange { value } => resolve_sort_select(value),
        }
    }
}
