//! Coordinator events.
//!
//! Every notification the coordinator reacts to is an explicit event value
//! delivered through its single-consumer queue. One event is processed at a
//! time, which is the crate's whole concurrency story: no handler ever runs
//! concurrently with another.

use crate::core::{Name, SyncState};

/// Where a namespace insertion came from.
///
/// Carried with [`Event::NameAdded`] so the coordinator can tell local
/// application inserts (which must be announced to the group) from remote
/// merges (which must not be, or every merge would echo back out as a fresh
/// announcement and loop forever).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOrigin {
    /// Inserted by local application logic; announce it.
    Local,
    /// Inserted while merging a fetched response; never announce.
    RemoteMerge,
}

/// A notification delivered to the coordinator's event loop.
#[derive(Debug, Clone)]
pub enum Event {
    /// The synchronizer's state vector changed.
    StateChanged {
        /// Changed entries, one or more per batch.
        states: Vec<SyncState>,
        /// True when the batch is a bulk catch-up rather than an
        /// incremental update. Advisory; does not change behavior.
        is_recovery: bool,
    },

    /// A peer requested the announcement at a fetch address.
    FetchRequested {
        /// Full request address, `<local-prefix>/<session>/<sequence>`.
        address: Name,
    },

    /// A fetch request completed with a response payload.
    FetchResponded {
        /// Raw response body, expected to decode as a
        /// [`ResponseBody`](crate::sync::ResponseBody).
        payload: Vec<u8>,
    },

    /// A fetch request expired without a response.
    FetchTimedOut {
        /// The address of the expired request.
        address: Name,
    },

    /// A name was added to the shared namespace.
    NameAdded {
        /// The full added name.
        name: Name,
        /// Who inserted it.
        origin: InsertOrigin,
    },
}
