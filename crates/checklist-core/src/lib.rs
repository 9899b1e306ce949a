pub mod error;
pub mod models;
pub mod traits;

#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

pub use error::AppError;
pub use models::{Item, ItemChanges, NewItem};
pub use traits::ItemStore;
