//! Seams toward the external collaborators.
//!
//! The coordinator does not implement state-vector reconciliation, transport,
//! or signing itself; it talks to them through these traits. Production code
//! plugs in real implementations, tests plug in recording mocks.

use std::time::Duration;

use super::constants::DEFAULT_SYNC_LIFETIME;
use super::error::SyncError;
use super::name::Name;

/// One participant's entry in the shared state vector, as reported by the
/// synchronizer. Read-only input to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncState {
    /// The participant's data prefix.
    pub participant: Name,
    /// The participant's current session.
    pub session: u64,
    /// The participant's latest publication sequence number.
    pub sequence: u64,
}

impl SyncState {
    /// Create a state-vector entry.
    pub fn new(participant: Name, session: u64, sequence: u64) -> Self {
        Self {
            participant,
            session,
            sequence,
        }
    }
}

/// A signed fetch response, ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedResponse {
    /// Serialized response body.
    pub body: Vec<u8>,
    /// Signature over the body.
    pub signature: Vec<u8>,
    /// How long receivers may treat the response as fresh.
    pub freshness: Duration,
}

/// The group state-vector synchronizer.
///
/// Maintains the eventually-consistent view of "highest sequence number per
/// participant". Owns the local session number. Changed-state notifications
/// arrive at the coordinator as [`Event::StateChanged`] values pushed through
/// its handle, not through this trait.
///
/// [`Event::StateChanged`]: crate::sync::Event::StateChanged
pub trait Synchronizer {
    /// Advance the local participant's publication counter by one and
    /// propagate the new value to the group. Returns the new sequence number.
    fn advance(&mut self) -> Result<u64, SyncError>;

    /// The local session number for this run.
    fn session(&self) -> u64;

    /// The synchronizer's configured lifetime. Also used as the timeout of
    /// outbound fetch requests.
    fn lifetime(&self) -> Duration {
        DEFAULT_SYNC_LIFETIME
    }
}

/// The request/response transport, addressed by hierarchical names.
///
/// Requests are fire-and-forget from the coordinator's point of view: the
/// eventual response or timeout comes back as an event on the coordinator's
/// queue. Request/response correlation is the transport's job.
pub trait FetchTransport {
    /// Bind as a responder for the given prefix. Inbound requests under the
    /// prefix are delivered as [`Event::FetchRequested`] values.
    ///
    /// Failure here is fatal to the coordinator's ability to serve fetches
    /// and is surfaced from construction.
    ///
    /// [`Event::FetchRequested`]: crate::sync::Event::FetchRequested
    fn register(&mut self, prefix: &Name) -> Result<(), SyncError>;

    /// Send a fetch request for `address`, expiring after `timeout`.
    fn request(&mut self, address: &Name, timeout: Duration);

    /// Send a signed response for a previously received request.
    fn respond(&mut self, address: &Name, response: SignedResponse) -> Result<(), SyncError>;
}

/// Signing applied to outbound response bodies.
///
/// Verification of inbound payloads is the transport's concern, not the
/// coordinator's.
pub trait Signer {
    /// Produce a signature over `body`.
    fn sign(&self, body: &[u8]) -> Vec<u8>;
}
