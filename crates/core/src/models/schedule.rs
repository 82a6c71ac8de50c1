use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Provider key to the ordered time slots the server computed for it.
pub type Schedule = BTreeMap<String, Vec<String>>;

/// Envelope returned by `GET /schedule`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub schedule: Schedule,
}
