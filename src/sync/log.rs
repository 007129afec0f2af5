//! Announcement log.
//!
//! Bounded, ordered record of the names this participant has announced,
//! indexed by publication sequence number. Serves later fetch requests from
//! peers until entries age out.

use std::collections::VecDeque;

use crate::core::Name;

/// One announcement made by the local participant. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementEntry {
    /// Publication sequence number assigned by the synchronizer.
    pub sequence: u64,
    /// The announced name.
    pub name: Name,
    /// Wall-clock time of the announcement, milliseconds since the epoch.
    pub timestamp_ms: i64,
}

/// Capacity-bounded FIFO log of [`AnnouncementEntry`].
///
/// Entries are strictly increasing by sequence number. When the log is full
/// the oldest entry is evicted; a fetch for an evicted sequence gets no
/// response, by design.
#[derive(Debug)]
pub struct AnnouncementLog {
    entries: VecDeque<AnnouncementEntry>,
    capacity: usize,
}

impl AnnouncementLog {
    /// Create an empty log with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new entry, evicting the oldest if the log is full.
    ///
    /// Sequence numbers must arrive strictly increasing; the synchronizer
    /// guarantees this within a session.
    pub fn append(&mut self, entry: AnnouncementEntry) {
        debug_assert!(
            self.entries
                .back()
                .is_none_or(|last| entry.sequence > last.sequence),
            "announcement sequence must be strictly increasing"
        );
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Look up the entry with the given sequence number, scanning from the
    /// most recent backward. Returns `None` for evicted or never-announced
    /// sequences.
    pub fn find(&self, sequence: u64) -> Option<&AnnouncementEntry> {
        self.entries.iter().rev().find(|e| e.sequence == sequence)
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&AnnouncementEntry> {
        self.entries.back()
    }

    /// Iterate over entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &AnnouncementEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(sequence: u64) -> AnnouncementEntry {
        AnnouncementEntry {
            sequence,
            name: Name::parse(&format!("/app/doc/{sequence}")).unwrap(),
            timestamp_ms: 1_700_000_000_000 + sequence as i64,
        }
    }

    #[test]
    fn test_append_and_find() {
        let mut log = AnnouncementLog::new(10);
        log.append(entry(1));
        log.append(entry(2));
        log.append(entry(3));

        assert_eq!(log.len(), 3);
        assert_eq!(log.find(2).unwrap().name.to_string(), "/app/doc/2");
        assert!(log.find(4).is_none());
    }

    #[test]
    fn test_eviction_is_fifo() {
        let mut log = AnnouncementLog::new(3);
        for seq in 1..=5 {
            log.append(entry(seq));
        }

        assert_eq!(log.len(), 3);
        assert!(log.find(1).is_none());
        assert!(log.find(2).is_none());
        for seq in 3..=5 {
            assert_eq!(log.find(seq).unwrap().sequence, seq);
        }
    }

    #[test]
    fn test_entries_strictly_increasing_after_eviction() {
        let mut log = AnnouncementLog::new(2);
        for seq in 1..=4 {
            log.append(entry(seq));
        }
        let sequences: Vec<_> = log.iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, [3, 4]);
    }

    #[test]
    fn test_latest() {
        let mut log = AnnouncementLog::new(4);
        assert!(log.latest().is_none());
        log.append(entry(7));
        log.append(entry(9));
        assert_eq!(log.latest().unwrap().sequence, 9);
    }

    #[test]
    fn test_find_on_empty() {
        let log = AnnouncementLog::new(4);
        assert!(log.find(1).is_none());
        assert!(log.is_empty());
    }
}
