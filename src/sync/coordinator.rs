//! NameSync coordinator.
//!
//! Top-level protocol state holder. Binds the local participant's identity,
//! announcement log, and shared namespace to the external synchronizer,
//! transport, and signer, and drains the event queue that everything else
//! feeds.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use super::event::{Event, InsertOrigin};
use super::initiator::FetchInitiator;
use super::log::{AnnouncementEntry, AnnouncementLog};
use super::payload::ResponseBody;
use super::responder::FetchResponder;
use crate::core::{
    FetchTransport, Name, NameError, Signer, SyncError, Synchronizer,
    DEFAULT_LOG_CAPACITY, DEFAULT_RESPONSE_FRESHNESS, EVENT_CHANNEL_DEPTH,
};
use crate::namespace::Namespace;

/// Coordinator configuration.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// The local participant's data prefix. Fetch requests from peers
    /// arrive under this prefix.
    pub participant: Name,

    /// Root of the group's broadcast naming convention.
    pub broadcast_root: Name,

    /// Prefix of the shared namespace all announced names fall under.
    pub namespace_prefix: Name,

    /// Capacity of the announcement log.
    pub log_capacity: usize,

    /// Freshness period of signed fetch responses.
    pub response_freshness: Duration,
}

impl SyncConfig {
    /// The group broadcast name, `<broadcast-root>/<namespace-prefix>`,
    /// under which the synchronizer coordinates this namespace.
    pub fn broadcast_name(&self) -> Name {
        self.broadcast_root.join(&self.namespace_prefix)
    }
}

/// Builder for [`SyncConfig`].
#[derive(Debug)]
pub struct SyncConfigBuilder {
    config: SyncConfig,
}

impl SyncConfigBuilder {
    /// Start a config for the given participant and shared namespace prefix.
    pub fn new(participant: Name, namespace_prefix: Name) -> Self {
        Self {
            config: SyncConfig {
                participant,
                broadcast_root: Name::parse("/ndn/broadcast").expect("static name parses"),
                namespace_prefix,
                log_capacity: DEFAULT_LOG_CAPACITY,
                response_freshness: DEFAULT_RESPONSE_FRESHNESS,
            },
        }
    }

    /// Set the broadcast root.
    pub fn broadcast_root(mut self, root: Name) -> Self {
        self.config.broadcast_root = root;
        self
    }

    /// Set the announcement log capacity.
    pub fn log_capacity(mut self, capacity: usize) -> Self {
        self.config.log_capacity = capacity;
        self
    }

    /// Set the response freshness period.
    pub fn response_freshness(mut self, freshness: Duration) -> Self {
        self.config.response_freshness = freshness;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> SyncConfig {
        self.config
    }
}

/// Clonable handle feeding events into the coordinator's queue.
///
/// Application code uses [`insert`](Self::insert); synchronizer and
/// transport adapters use the `notify_*` methods to translate their
/// callbacks into events.
#[derive(Debug, Clone)]
pub struct NameSyncHandle {
    tx: mpsc::Sender<Event>,
}

impl NameSyncHandle {
    async fn send(&self, event: Event) -> Result<(), SyncError> {
        self.tx
            .send(event)
            .await
            .map_err(|_| SyncError::ChannelClosed)
    }

    /// Insert a name into the shared namespace as local application
    /// content. Newly added names are announced to the group.
    pub async fn insert(&self, name: Name) -> Result<(), SyncError> {
        self.send(Event::NameAdded {
            name,
            origin: InsertOrigin::Local,
        })
        .await
    }

    /// Deliver a state-vector change notification from the synchronizer.
    pub async fn notify_state_changed(
        &self,
        states: Vec<crate::core::SyncState>,
        is_recovery: bool,
    ) -> Result<(), SyncError> {
        self.send(Event::StateChanged {
            states,
            is_recovery,
        })
        .await
    }

    /// Deliver an inbound fetch request from the transport.
    pub async fn notify_fetch_request(&self, address: Name) -> Result<(), SyncError> {
        self.send(Event::FetchRequested { address }).await
    }

    /// Deliver a fetch response payload from the transport.
    pub async fn notify_fetch_response(&self, payload: Vec<u8>) -> Result<(), SyncError> {
        self.send(Event::FetchResponded { payload }).await
    }

    /// Deliver a fetch timeout from the transport.
    pub async fn notify_fetch_timeout(&self, address: Name) -> Result<(), SyncError> {
        self.send(Event::FetchTimedOut { address }).await
    }
}

/// The NameSync coordinator.
///
/// All state is owned here and mutated only from [`handle_event`] /
/// [`announce`], which the event loop invokes one at a time; no locking is
/// needed or used.
///
/// [`handle_event`]: Self::handle_event
/// [`announce`]: Self::announce
pub struct NameSync {
    config: SyncConfig,
    log: AnnouncementLog,
    namespace: Namespace,
    responder: FetchResponder,
    initiator: FetchInitiator,
    synchronizer: Box<dyn Synchronizer>,
    transport: Box<dyn FetchTransport>,
    signer: Box<dyn Signer>,
    events: mpsc::Receiver<Event>,
}

impl NameSync {
    /// Create a coordinator and its event handle.
    ///
    /// Registers the local participant prefix with the transport; a
    /// registration failure is fatal and returned.
    pub fn new(
        config: SyncConfig,
        synchronizer: Box<dyn Synchronizer>,
        mut transport: Box<dyn FetchTransport>,
        signer: Box<dyn Signer>,
    ) -> Result<(Self, NameSyncHandle), SyncError> {
        transport.register(&config.participant)?;

        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_DEPTH);
        let responder = FetchResponder::new(
            config.participant.clone(),
            synchronizer.session(),
            config.response_freshness,
        );
        let initiator = FetchInitiator::new(config.participant.clone());
        let namespace = Namespace::new(config.namespace_prefix.clone());
        let log = AnnouncementLog::new(config.log_capacity);

        let coordinator = Self {
            config,
            log,
            namespace,
            responder,
            initiator,
            synchronizer,
            transport,
            signer,
            events: rx,
        };
        Ok((coordinator, NameSyncHandle { tx }))
    }

    /// The coordinator configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// The local participant's data prefix.
    pub fn participant(&self) -> &Name {
        &self.config.participant
    }

    /// The announcement log.
    pub fn log(&self) -> &AnnouncementLog {
        &self.log
    }

    /// The shared namespace.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Announce a name to the group.
    ///
    /// Advances the publication counter through the synchronizer and
    /// records the announcement so peers can fetch it. Performs no network
    /// I/O itself; the synchronizer propagates the counter change. Returns
    /// the new sequence number.
    pub fn announce(&mut self, name: &Name) -> Result<u64, SyncError> {
        if name.is_empty() {
            return Err(NameError::Empty.into());
        }
        let sequence = self.synchronizer.advance()?;
        self.log.append(AnnouncementEntry {
            sequence,
            name: name.clone(),
            timestamp_ms: now_ms(),
        });
        debug!(%name, sequence, "announced");
        Ok(sequence)
    }

    /// Process a single event.
    ///
    /// Steady-state irregularities (timeouts, evicted entries, malformed
    /// payloads, send failures) are absorbed here and only logged, per the
    /// protocol's propagation policy.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::StateChanged {
                states,
                is_recovery,
            } => self.on_state_changed(&states, is_recovery),
            Event::FetchRequested { address } => self.on_fetch_request(&address),
            Event::FetchResponded { payload } => self.on_fetch_response(&payload),
            Event::FetchTimedOut { address } => {
                // No retry. A missed update is recovered by a later
                // state-vector change.
                debug!(%address, "fetch request timed out");
            }
            Event::NameAdded { name, origin } => self.on_name_added(&name, origin),
        }
    }

    /// Drain the event queue until every handle is dropped.
    pub async fn run(&mut self) {
        while let Some(event) = self.events.recv().await {
            self.handle_event(event);
        }
    }

    fn on_state_changed(&mut self, states: &[crate::core::SyncState], is_recovery: bool) {
        let issued = self.initiator.issue_fetches(
            states,
            is_recovery,
            self.synchronizer.lifetime(),
            &mut *self.transport,
        );
        debug!(batch = states.len(), issued, is_recovery, "state vector changed");
    }

    fn on_fetch_request(&mut self, address: &Name) {
        let Some(response) = self
            .responder
            .build_response(&self.log, &*self.signer, address)
        else {
            return;
        };
        if let Err(err) = self.transport.respond(address, response) {
            // Functionally identical to the requester timing out.
            error!(%address, %err, "failed to send fetch response");
        }
    }

    fn on_fetch_response(&mut self, payload: &[u8]) {
        let names = match ResponseBody::decode(payload).and_then(|body| body.parsed_names()) {
            Ok(names) => names,
            Err(err) => {
                warn!(%err, "discarding malformed fetch response");
                return;
            }
        };
        for name in &names {
            match self.namespace.insert(name) {
                Ok(added) => {
                    if added {
                        debug!(%name, "merged fetched name");
                    }
                }
                Err(err) => warn!(%name, %err, "skipping unmergeable fetched name"),
            }
        }
    }

    fn on_name_added(&mut self, name: &Name, origin: InsertOrigin) {
        let added = match self.namespace.insert(name) {
            Ok(added) => added,
            Err(err) => {
                warn!(%name, %err, "rejecting namespace insert");
                return;
            }
        };
        if added && origin == InsertOrigin::Local {
            if let Err(err) = self.announce(name) {
                error!(%name, %err, "failed to announce added name");
            }
        }
    }
}

/// Current wall-clock time in milliseconds since the epoch.
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
