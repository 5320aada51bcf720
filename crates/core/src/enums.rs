use serde::{Deserialize, Serialize};

/// Job lifecycle. Status only moves forward:
/// Open -> Hired -> Completed, one step at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Open,
    Hired,
    Completed,
}
