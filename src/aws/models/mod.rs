pub mod error;
pub mod layout;
pub mod sync;

pub use error::{Result, SyncError};
