// src/controller/errors.rs

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("❌ SearchRefreshController channel is closed")]
    ChannelClosed,
    #[error("❌ SearchRefreshController stopped before the refresh settled")]
    RefreshDropped,
}
