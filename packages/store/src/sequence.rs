//! Search request sequencing.
//!
//! A search response may only replace the store if no newer search was issued
//! and the store has not been changed locally since the request went out. The
//! second rule keeps a create, edit or delete committed while a search is in
//! flight from being overwritten by the older snapshot.

/// Ticket handed out for one search request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket {
    seq: u64,
    revision: u64,
}

impl SearchTicket {
    /// Store revision at the time the request was issued.
    pub fn revision(self) -> u64 {
        self.revision
    }
}

/// Orders search requests so that only the newest one may commit its results.
///
/// A response that resolves after a newer request was issued is stale and must
/// be dropped, whatever order the responses arrive in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    issued: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a new request issued against store `revision`. Every earlier ticket
    /// becomes stale.
    pub fn issue(&mut self, revision: u64) -> SearchTicket {
        self.issued += 1;
        SearchTicket {
            seq: self.issued,
            revision,
        }
    }

    pub fn is_latest(&self, ticket: SearchTicket) -> bool {
        ticket.seq == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_newest_ticket_is_latest() {
        let mut seq = RequestSequencer::new();
        let first = seq.issue(0);
        assert!(seq.is_latest(first));

        let second = seq.issue(0);
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
        assert!(first < second);
    }

    #[test]
    fn test_ticket_remembers_store_revision() {
        let mut seq = RequestSequencer::new();
        let ticket = seq.issue(7);
        assert_eq!(ticket.revision(), 7);
        assert!(seq.is_latest(ticket));
    }
}
