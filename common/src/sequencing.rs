//! Last-issued-wins guard for overlapping requests.
//!
//! Nothing cancels an in-flight fetch, so an older response may resolve after
//! a newer one. Each request is tagged with a `RequestId` when it is issued;
//! a response is applied only if its id is still the latest.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new id; every previously issued id becomes stale.
    pub fn issue(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    pub fn is_latest(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }

    /// Makes every outstanding id stale without issuing a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
