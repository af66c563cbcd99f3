//! Ordering of async completions that write the same state slot.
//!
//! Every fetch takes a ticket when it is issued. A completion is applied
//! only if its ticket is still the latest one issued for that slot, so a
//! slow response can never overwrite the result of a newer request.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Invalidate every outstanding ticket without issuing a new request
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_applies() {
        let mut seq = RequestSeq::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(first < second);
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }

    #[test]
    fn test_invalidate() {
        let mut seq = RequestSeq::new();
        let ticket = seq.issue();
        seq.invalidate();
        assert!(!seq.is_latest(ticket));
    }
}
