//! Append-only in-memory event log with deterministic sequencing.

use serde::{Deserialize, Serialize};

use super::event::WorkspaceEvent;

/// An event paired with its position in the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub seq: u64,
    pub event: WorkspaceEvent,
}

/// Append-only event log. Sequence numbers start at 0 and never repeat.
#[derive(Debug, Default)]
pub struct EventLog {
    records: Vec<EventRecord>,
    next_seq: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and return the created record with its sequence number.
    pub fn append(&mut self, event: WorkspaceEvent) -> EventRecord {
        let record = EventRecord {
            seq: self.next_seq,
            event,
        };
        self.next_seq += 1;
        self.records.push(record.clone());
        record
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Return the last `limit` records (oldest first within the slice).
    pub fn tail(&self, limit: usize) -> Vec<EventRecord> {
        let start = self.records.len().saturating_sub(limit);
        self.records[start..].to_vec()
    }

    /// Return all records with seq > `seq`.
    pub fn since(&self, seq: u64) -> Vec<EventRecord> {
        self.records
            .iter()
            .filter(|r| r.seq > seq)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_event(repo_id: &str) -> WorkspaceEvent {
        WorkspaceEvent::RepositoryCreated {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            repo_id: repo_id.to_string(),
        }
    }

    #[test]
    fn starts_empty() {
        let log = EventLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn append_increments_seq() {
        let mut log = EventLog::new();

        let r0 = log.append(make_event("a"));
        let r1 = log.append(make_event("b"));
        let r2 = log.append(make_event("c"));

        assert_eq!(r0.seq, 0);
        assert_eq!(r1.seq, 1);
        assert_eq!(r2.seq, 2);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn tail_returns_last_n() {
        let mut log = EventLog::new();
        for i in 0..5 {
            log.append(make_event(&format!("r{i}")));
        }

        let tail = log.tail(3);
        assert_eq!(tail.len(), 3);
        assert_eq!(tail[0].seq, 2);
        assert_eq!(tail[2].seq, 4);
    }

    #[test]
    fn tail_larger_than_log_returns_all() {
        let mut log = EventLog::new();
        log.append(make_event("a"));

        let tail = log.tail(10);
        assert_eq!(tail.len(), 1);
    }

    #[test]
    fn since_filters_by_seq() {
        let mut log = EventLog::new();
        for i in 0..4 {
            log.append(make_event(&format!("r{i}")));
        }

        let rest = log.since(1);
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0].seq, 2);
        assert_eq!(rest[1].seq, 3);
    }
}
