use crate::domain::errors::ChainLogError;
use crate::domain::invariants::check_append;
use crate::ports::inbound::ChainLog;
use parking_lot::RwLock;
use shared_types::{Header, Height, ShortHex};
use tracing::{debug, warn};

/// In-memory chain log.
///
/// Header at height `h` lives at index `h - 1`. Appends take the write lock
/// for the whole check-then-push sequence.
#[derive(Default)]
pub struct InMemoryChainLog {
    headers: RwLock<Vec<Header>>,
}

impl InMemoryChainLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored headers.
    pub fn len(&self) -> usize {
        self.headers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.read().is_empty()
    }

    /// Copy of the tip, if any.
    pub fn tip(&self) -> Option<Header> {
        self.headers.read().last().cloned()
    }
}

fn index_of(height: Height) -> Option<usize> {
    usize::try_from(height.checked_sub(1)?).ok()
}

impl ChainLog for InMemoryChainLog {
    fn append(&self, header: Header) -> Result<(), ChainLogError> {
        let mut headers = self.headers.write();

        if let Err(e) = check_append(headers.last(), &header) {
            warn!(height = header.height, reason = %e, "Chain log append rejected");
            return Err(e);
        }

        debug!(
            height = header.height,
            hash = %header.hash().map(|h| ShortHex(&h).to_string()).unwrap_or_default(),
            "Header appended"
        );
        headers.push(header);
        Ok(())
    }

    fn get(&self, height: Height) -> Result<Header, ChainLogError> {
        let headers = self.headers.read();
        index_of(height)
            .and_then(|idx| headers.get(idx))
            .cloned()
            .ok_or(ChainLogError::NotFound(height))
    }

    fn range(&self, min_height: Height, max_height: Height) -> Vec<Header> {
        let headers = self.headers.read();
        let tip = Height::try_from(headers.len()).unwrap_or(Height::MAX);

        let lo = min_height.max(1);
        let hi = max_height.min(tip);
        if lo > hi {
            return Vec::new();
        }

        match (index_of(lo), index_of(hi)) {
            (Some(start), Some(end)) => headers[start..=end].to_vec(),
            _ => Vec::new(),
        }
    }

    fn latest_height(&self) -> Height {
        Height::try_from(self.headers.read().len()).unwrap_or(Height::MAX)
    }
}
