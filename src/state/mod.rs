pub mod error;
pub mod event;
pub mod favorites;
pub mod machine;
pub mod model;

pub use error::{StateError, StateResult};
pub use event::{FilterEvent, FilterTransition};
pub use favorites::Favorites;
pub use machine::CategoryMachine;
pub use model::{Category, FilterState, SortKey};
