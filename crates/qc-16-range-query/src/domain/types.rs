//! Response types.

use serde::{Deserialize, Serialize};
use shared_types::{Header, Height};

/// "Blockchain info" response: the tip plus the requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    /// Chain tip at query time (0 for an empty chain).
    pub last_height: Height,
    /// Headers in the normalized window, ascending.
    pub headers: Vec<Header>,
}
