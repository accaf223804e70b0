//! Identifier generation for nodes and connections.

use crate::types::ElementId;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Number of random hex characters appended after the timestamp.
const RANDOM_SUFFIX_LEN: usize = 9;

/// Generates a fresh element id.
///
/// The id combines the current wall-clock timestamp (milliseconds since the
/// Unix epoch) with a random suffix, e.g. `node_1756500000000_3f9c1a2b4`.
/// Collisions within a session are possible in principle but negligibly
/// likely; callers that need persisted-id stability across clients should use
/// a full 128-bit random identifier instead.
pub fn generate_id() -> ElementId {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    let random = Uuid::new_v4().simple().to_string();
    format!("node_{}_{}", millis, &random[..RANDOM_SUFFIX_LEN])
}
