use super::event::FilterEvent;
use super::model::Category;
use thiserror::Error;

pub type StateResult<T> = std::result::Result<T, StateError>;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("category {category:?} is not enabled (from {from:?} using event {event:?})")]
    CategoryDisabled {
        from: Category,
        event: FilterEvent,
        category: Category,
    },
}
