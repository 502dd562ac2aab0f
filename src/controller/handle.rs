// src/controller/handle.rs

// 📦 External crates
use tokio::sync::{mpsc, oneshot, watch};

// 🧠 Internal modules
use super::errors::ControllerError;
use super::messages::ControllerCommand;
use crate::model::DisplaySnapshot;

/// Cloneable front door to a running [`super::SearchRefreshController`].
/// The controller stops once every handle is dropped.
#[derive(Clone)]
pub struct ControllerHandle {
    sender: mpsc::Sender<ControllerCommand>,
    snapshot: watch::Receiver<DisplaySnapshot>,
}

impl ControllerHandle {
    pub(super) fn new(
        sender: mpsc::Sender<ControllerCommand>,
        snapshot: watch::Receiver<DisplaySnapshot>,
    ) -> Self {
        Self { sender, snapshot }
    }

    async fn send(&self, command: ControllerCommand) -> Result<(), ControllerError> {
        self.sender
            .send(command)
            .await
            .map_err(|_| ControllerError::ChannelClosed)
    }

    /// Updates the filter right away; a re-fetch follows once typing pauses.
    pub async fn set_search_text(&self, text: impl Into<String>) -> Result<(), ControllerError> {
        self.send(ControllerCommand::SetSearchText(text.into())).await
    }

    pub async fn request_refresh(&self) -> Result<(), ControllerError> {
        self.send(ControllerCommand::RequestRefresh).await
    }

    /// Refreshes with `is_loading` raised, returning once the fetch has settled
    /// and the indicator has been released.
    pub async fn refresh_with_loading_indicator(&self) -> Result<(), ControllerError> {
        let (done, settled) = oneshot::channel();
        self.send(ControllerCommand::RefreshWithLoadingIndicator { done })
            .await?;
        settled.await.map_err(|_| ControllerError::RefreshDropped)
    }

    pub async fn shutdown(&self) -> Result<(), ControllerError> {
        self.send(ControllerCommand::Shutdown).await
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DisplaySnapshot> {
        self.snapshot.clone()
    }

    /// Waits until the published snapshot satisfies `predicate`.
    pub async fn wait_for<F>(&self, predicate: F) -> Result<DisplaySnapshot, ControllerError>
    where
        F: FnMut(&DisplaySnapshot) -> bool,
    {
        let mut receiver = self.snapshot.clone();
        let snapshot = receiver
            .wait_for(predicate)
            .await
            .map_err(|_| ControllerError::ChannelClosed)?;
        Ok(snapshot.clone())
    }
}
