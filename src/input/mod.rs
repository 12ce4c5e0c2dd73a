mod bindings;
mod shortcut;

pub use bindings::{Bindings, Control, EventKind, UiEvent};
pub use shortcut::{
    resolve_card_action, resolve_category_button, resolve_shortcut, resolve_sort_select,
    GalleryAction, InputContext, ShortcutKey,
};
