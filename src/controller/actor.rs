// src/controller/actor.rs

// 🌍 Standard library
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

// 📦 External crates
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{self, Instant};
use tracing::{debug, info, warn, Instrument};

// 🧠 Internal modules
use super::filter::filter_items;
use super::handle::ControllerHandle;
use super::messages::{ControllerCommand, LoadingGuard, WorkerEvent};
use crate::config::{DEFAULT_COMMAND_BUFFER, DEFAULT_SEARCH_DEBOUNCE};
use crate::fetcher::{FetchError, PriceFetcher};
use crate::flags::{FeatureFlagStore, FlagObserver};
use crate::model::{ControllerPhase, DisplaySnapshot, FeatureFlag, FetchQuery, PriceRecord};

#[derive(Debug, Clone, Copy)]
pub struct ControllerSettings {
    pub search_debounce: Duration,
    pub command_buffer: usize,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            command_buffer: DEFAULT_COMMAND_BUFFER,
        }
    }
}

/// Owns the list screen state. Search text, `supportEUR` changes and refresh
/// requests all funnel into one latest-wins fetch; the fetched set is then
/// filtered by the current search text for display.
///
/// Every fetch gets a sequence number. A result is applied only if its
/// number is still the newest one issued, so a slow early fetch can never
/// overwrite a later one.
pub struct SearchRefreshController {
    fetcher: Arc<dyn PriceFetcher>,
    flag_observer: FlagObserver,
    from_handle: mpsc::Receiver<ControllerCommand>,
    worker_sender: mpsc::UnboundedSender<WorkerEvent>,
    from_workers: mpsc::UnboundedReceiver<WorkerEvent>,
    snapshot_sender: watch::Sender<DisplaySnapshot>,
    snapshot: DisplaySnapshot,
    search_debounce: Duration,
    search_text: String,
    search_deadline: Option<Instant>,
    last_search_trigger: Option<String>,
    support_eur: bool,
    all_items: Vec<PriceRecord>,
    latest_seq: u64,
    loading: HashMap<u64, oneshot::Sender<()>>,
}

impl SearchRefreshController {
    pub fn new(
        fetcher: Arc<dyn PriceFetcher>,
        flags: &FeatureFlagStore,
        settings: ControllerSettings,
    ) -> (Self, ControllerHandle) {
        let mut flag_observer = flags.observe(FeatureFlag::SupportEur);
        let support_eur = flag_observer
            .try_next()
            .unwrap_or_else(|| flags.get_value(FeatureFlag::SupportEur));

        let snapshot = DisplaySnapshot {
            show_eur_price: support_eur,
            ..DisplaySnapshot::default()
        };
        let (snapshot_sender, snapshot_receiver) = watch::channel(snapshot.clone());
        let (command_sender, from_handle) = mpsc::channel(settings.command_buffer.max(1));
        let (worker_sender, from_workers) = mpsc::unbounded_channel();

        let controller = Self {
            fetcher,
            flag_observer,
            from_handle,
            worker_sender,
            from_workers,
            snapshot_sender,
            snapshot,
            search_debounce: settings.search_debounce,
            search_text: String::new(),
            search_deadline: None,
            last_search_trigger: None,
            support_eur,
            all_items: Vec::new(),
            latest_seq: 0,
            loading: HashMap::new(),
        };
        let handle = ControllerHandle::new(command_sender, snapshot_receiver);
        (controller, handle)
    }

    /// Builds a controller and runs it on the current tokio runtime.
    pub fn spawn(
        fetcher: Arc<dyn PriceFetcher>,
        flags: &FeatureFlagStore,
        settings: ControllerSettings,
    ) -> ControllerHandle {
        let (controller, handle) = Self::new(fetcher, flags, settings);
        tokio::spawn(controller.run());
        handle
    }

    pub async fn run(mut self) {
        let span = tracing::info_span!("SearchRefreshController");
        async move {
            info!("Starting run loop");
            let mut flags_open = true;
            loop {
                let deadline = self.search_deadline;
                tokio::select! {
                    command = self.from_handle.recv() => match command {
                        Some(ControllerCommand::Shutdown) => {
                            info!("Received shutdown command, exiting run loop");
                            break;
                        }
                        Some(command) => self.handle_command(command),
                        None => {
                            info!("All handles dropped, exiting run loop");
                            break;
                        }
                    },
                    Some(event) = self.from_workers.recv() => {
                        self.handle_worker_event(event);
                    }
                    value = self.flag_observer.next(), if flags_open => match value {
                        Some(value) => self.handle_flag_change(value),
                        None => {
                            warn!("Flag store closed, no further flag changes");
                            flags_open = false;
                        }
                    },
                    _ = time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                        self.fire_search_trigger();
                    }
                }
            }
        }
        .instrument(span)
        .await
    }

    fn handle_command(&mut self, command: ControllerCommand) {
        debug!("Handling {command}");
        match command {
            ControllerCommand::SetSearchText(text) => {
                self.search_text = text;
                self.search_deadline = Some(Instant::now() + self.search_debounce);
                self.refresh_display();
            }
            ControllerCommand::RequestRefresh => {
                self.start_fetch(None);
            }
            ControllerCommand::RefreshWithLoadingIndicator { done } => {
                self.start_fetch(Some(done));
            }
            ControllerCommand::Shutdown => {}
        }
    }

    fn handle_flag_change(&mut self, support_eur: bool) {
        if support_eur == self.support_eur {
            return;
        }
        info!("supportEUR changed to {support_eur}, re-fetching");
        self.support_eur = support_eur;
        self.start_fetch(None);
    }

    fn fire_search_trigger(&mut self) {
        self.search_deadline = None;
        if self.last_search_trigger.as_deref() == Some(self.search_text.as_str()) {
            debug!("Search text {:?} unchanged since last trigger", self.search_text);
            return;
        }
        self.last_search_trigger = Some(self.search_text.clone());
        self.start_fetch(None);
    }

    fn start_fetch(&mut self, done: Option<oneshot::Sender<()>>) -> u64 {
        // A flag change may still be queued behind the command being handled.
        if let Some(support_eur) = self.flag_observer.latest() {
            self.support_eur = support_eur;
        }
        self.latest_seq += 1;
        let seq = self.latest_seq;
        let query = FetchQuery {
            search_text: self.search_text.clone(),
            support_eur: self.support_eur,
        };

        let guard = done.map(|done| {
            self.loading.insert(seq, done);
            LoadingGuard::new(seq, self.worker_sender.clone())
        });

        self.snapshot.phase = ControllerPhase::Fetching;
        self.snapshot.is_loading = !self.loading.is_empty();
        self.publish();

        debug!("Starting fetch #{seq} for {query:?}");
        let fetcher = Arc::clone(&self.fetcher);
        let events = self.worker_sender.clone();
        tokio::spawn(
            async move {
                let _guard = guard;
                let support_eur = query.support_eur;
                let result = match tokio::spawn(async move { fetcher.fetch(support_eur).await }).await {
                    Ok(result) => result,
                    Err(e) => Err(FetchError::Unknown(format!("fetch task failed: {e}"))),
                };
                let _ = events.send(WorkerEvent::Fetched { seq, query, result });
            }
            .instrument(tracing::debug_span!("fetch", seq)),
        );
        seq
    }

    fn handle_worker_event(&mut self, event: WorkerEvent) {
        match event {
            WorkerEvent::Fetched { seq, query, result } => {
                if seq != self.latest_seq {
                    debug!("Discarding stale fetch #{seq}, latest is #{}", self.latest_seq);
                    return;
                }
                match result {
                    Ok(items) => {
                        info!("Fetch #{seq} returned {} items", items.len());
                        self.all_items = items;
                    }
                    Err(e) => {
                        warn!("Fetch #{seq} failed, showing empty list: {e}");
                        self.all_items = Vec::new();
                    }
                }
                self.snapshot.show_eur_price = query.support_eur;
                self.snapshot.phase = ControllerPhase::Ready;
                self.refresh_display();
            }
            WorkerEvent::LoadingReleased { seq } => {
                let done = self.loading.remove(&seq);
                self.snapshot.is_loading = !self.loading.is_empty();
                self.publish();
                if let Some(done) = done {
                    let _ = done.send(());
                }
            }
        }
    }

    fn refresh_display(&mut self) {
        self.snapshot.items = filter_items(&self.all_items, &self.search_text);
        self.publish();
    }

    fn publish(&self) {
        self.snapshot_sender.send_replace(self.snapshot.clone());
    }
}
