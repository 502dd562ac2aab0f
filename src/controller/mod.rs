// src/controller/mod.rs

pub mod actor;
pub mod errors;
pub mod filter;
pub mod handle;
pub mod messages;
pub use actor::{ControllerSettings, SearchRefreshController};
pub use errors::ControllerError;
pub use filter::filter_items;
pub use handle::ControllerHandle;
