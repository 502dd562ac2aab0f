// src/controller/messages.rs

use std::fmt;

use tokio::sync::{mpsc, oneshot};

use crate::fetcher::FetchError;
use crate::model::{FetchQuery, PriceRecord};

#[derive(Debug)]
pub enum ControllerCommand {
    SetSearchText(String),
    RequestRefresh,
    RefreshWithLoadingIndicator { done: oneshot::Sender<()> },
    Shutdown,
}

impl fmt::Display for ControllerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetSearchText(text) => write!(f, "SetSearchText({text:?})"),
            Self::RequestRefresh => write!(f, "RequestRefresh"),
            Self::RefreshWithLoadingIndicator { .. } => write!(f, "RefreshWithLoadingIndicator"),
            Self::Shutdown => write!(f, "Shutdown"),
        }
    }
}

/// Sent from fetch workers back to the controller loop.
#[derive(Debug)]
pub enum WorkerEvent {
    Fetched {
        seq: u64,
        query: FetchQuery,
        result: Result<Vec<PriceRecord>, FetchError>,
    },
    LoadingReleased {
        seq: u64,
    },
}

/// Held by a fetch worker started with the loading indicator. Dropping it,
/// on any exit path, tells the controller that fetch has settled.
pub struct LoadingGuard {
    seq: u64,
    events: mpsc::UnboundedSender<WorkerEvent>,
}

impl LoadingGuard {
    pub fn new(seq: u64, events: mpsc::UnboundedSender<WorkerEvent>) -> Self {
        Self { seq, events }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let _ = self.events.send(WorkerEvent::LoadingReleased { seq: self.seq });
    }
}
