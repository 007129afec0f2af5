//! Fetch responder.
//!
//! Answers inbound fetch requests for the local participant's announcements.
//! A request that cannot be answered (evicted entry, unknown sequence, stale
//! session, malformed address) gets no response at all: absence of a log
//! entry is indistinguishable from "not yet published", and the protocol
//! relies on eventual re-sync rather than an explicit not-found signal.

use std::time::Duration;

use tracing::debug;

use super::log::AnnouncementLog;
use super::payload::ResponseBody;
use crate::core::{Name, PayloadError, SignedResponse, Signer};

/// Serves the announcement log to peers.
///
/// Fetch addresses have the form `<local-prefix>/<session>/<sequence>`.
#[derive(Debug)]
pub struct FetchResponder {
    prefix: Name,
    session: u64,
    freshness: Duration,
}

impl FetchResponder {
    /// Create a responder for the given local prefix and session.
    pub fn new(prefix: Name, session: u64, freshness: Duration) -> Self {
        Self {
            prefix,
            session,
            freshness,
        }
    }

    /// The prefix this responder serves.
    pub fn prefix(&self) -> &Name {
        &self.prefix
    }

    /// Extract the `(session, sequence)` suffix of a fetch address.
    fn parse_address(&self, address: &Name) -> Result<(u64, u64), PayloadError> {
        let suffix = address
            .suffix_after(&self.prefix)
            .ok_or(PayloadError::MissingSequence)?;
        match suffix {
            [session, sequence] => session
                .as_u64()
                .zip(sequence.as_u64())
                .ok_or(PayloadError::MissingSequence),
            _ => Err(PayloadError::MissingSequence),
        }
    }

    /// Build a signed response for `address` from the log, or `None` when
    /// the request cannot be answered.
    pub fn build_response(
        &self,
        log: &AnnouncementLog,
        signer: &dyn Signer,
        address: &Name,
    ) -> Option<SignedResponse> {
        let (session, sequence) = match self.parse_address(address) {
            Ok(parts) => parts,
            Err(err) => {
                debug!(%address, %err, "ignoring unparseable fetch request");
                return None;
            }
        };

        if session != self.session {
            debug!(%address, session, "ignoring fetch request for another session");
            return None;
        }

        let Some(entry) = log.find(sequence) else {
            debug!(%address, sequence, "no log entry for fetch request");
            return None;
        };

        let body = ResponseBody::single(&entry.name, entry.timestamp_ms).encode();
        let signature = signer.sign(&body);
        Some(SignedResponse {
            body,
            signature,
            freshness: self.freshness,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_RESPONSE_FRESHNESS;
    use crate::signing::DigestSigner;
    use crate::sync::log::AnnouncementEntry;

    fn responder() -> FetchResponder {
        FetchResponder::new(
            Name::parse("/alice").unwrap(),
            5,
            DEFAULT_RESPONSE_FRESHNESS,
        )
    }

    fn log_with(sequences: &[u64]) -> AnnouncementLog {
        let mut log = AnnouncementLog::new(100);
        for &sequence in sequences {
            log.append(AnnouncementEntry {
                sequence,
                name: Name::parse(&format!("/app/doc/{sequence}")).unwrap(),
                timestamp_ms: 1_700_000_003_000,
            });
        }
        log
    }

    #[test]
    fn test_responds_to_known_sequence() {
        let responder = responder();
        let log = log_with(&[1, 2, 3]);
        let signer = DigestSigner::new();

        let address = Name::parse("/alice/5/2").unwrap();
        let response = responder.build_response(&log, &signer, &address).unwrap();

        let body = ResponseBody::decode(&response.body).unwrap();
        assert_eq!(body.names, ["/app/doc/2"]);
        assert_eq!(body.timestamp, 1_700_000_003);
        assert_eq!(response.freshness, DEFAULT_RESPONSE_FRESHNESS);
        assert!(!response.signature.is_empty());
    }

    #[test]
    fn test_silent_on_unknown_sequence() {
        let responder = responder();
        let log = log_with(&[1, 2, 3]);
        let signer = DigestSigner::new();

        let address = Name::parse("/alice/5/9").unwrap();
        assert!(responder.build_response(&log, &signer, &address).is_none());
    }

    #[test]
    fn test_silent_on_session_mismatch() {
        let responder = responder();
        let log = log_with(&[1]);
        let signer = DigestSigner::new();

        let address = Name::parse("/alice/4/1").unwrap();
        assert!(responder.build_response(&log, &signer, &address).is_none());
    }

    #[test]
    fn test_silent_on_malformed_address() {
        let responder = responder();
        let log = log_with(&[1]);
        let signer = DigestSigner::new();

        for uri in ["/alice", "/alice/5", "/alice/5/1/extra", "/alice/x/y", "/bob/5/1"] {
            let address = Name::parse(uri).unwrap();
            assert!(
                responder.build_response(&log, &signer, &address).is_none(),
                "expected silence for {uri}"
            );
        }
    }

    #[test]
    fn test_parse_address() {
        let responder = responder();
        let address = Name::parse("/alice/5/12").unwrap();
        assert_eq!(responder.parse_address(&address).unwrap(), (5, 12));
    }
}
