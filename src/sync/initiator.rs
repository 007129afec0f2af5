//! Fetch initiator.
//!
//! Turns state-vector change notifications into outbound fetch requests:
//! one request per remote participant whose counter advanced, addressed by
//! `<participant>/<session>/<sequence>`.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::core::{FetchTransport, Name, SyncState};

/// Issues fetch requests for changed remote state-vector entries.
#[derive(Debug)]
pub struct FetchInitiator {
    local_participant: Name,
}

impl FetchInitiator {
    /// Create an initiator that never fetches from `local_participant`.
    pub fn new(local_participant: Name) -> Self {
        Self { local_participant }
    }

    /// The request address for a state-vector entry.
    pub fn request_address(state: &SyncState) -> Name {
        state
            .participant
            .appended_u64(state.session)
            .appended_u64(state.sequence)
    }

    /// Collapse a batch last-write-wins per participant and drop the local
    /// participant's own entries.
    ///
    /// When a batch mentions the same participant more than once, only the
    /// last entry survives; fetching an intermediate sequence would be
    /// wasted work. Self-entries are dropped because the local log already
    /// holds everything this participant announced.
    fn collapse<'a>(&self, states: &'a [SyncState]) -> Vec<&'a SyncState> {
        let mut order: Vec<&Name> = Vec::new();
        let mut latest: HashMap<&Name, &SyncState> = HashMap::new();
        for state in states {
            if state.participant == self.local_participant {
                continue;
            }
            if latest.insert(&state.participant, state).is_none() {
                order.push(&state.participant);
            }
        }
        order
            .into_iter()
            .map(|participant| latest[participant])
            .collect()
    }

    /// Issue one fetch request per distinct changed remote participant.
    ///
    /// `is_recovery` marks a bulk catch-up batch; it is currently advisory
    /// and does not change behavior. Returns the number of requests issued.
    pub fn issue_fetches(
        &self,
        states: &[SyncState],
        is_recovery: bool,
        timeout: Duration,
        transport: &mut dyn FetchTransport,
    ) -> usize {
        let survivors = self.collapse(states);
        for state in &survivors {
            let address = Self::request_address(state);
            debug!(%address, is_recovery, "issuing fetch request");
            transport.request(&address, timeout);
        }
        survivors.len()
    }
}
