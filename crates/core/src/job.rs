use serde::{Deserialize, Serialize};

use crate::{
    enums::JobStatus,
    ids::{AccountId, JobId},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub budget: u64,
    /// Block height the work must be delivered by.
    pub deadline: u64,
    pub client: AccountId,
    pub freelancer: Option<AccountId>,
    pub status: JobStatus,
    pub milestones: u32,
    pub category: String,
    pub skills: Vec<String>,
    pub payment_terms: String,
    pub revision_limit: u32,
    /// Escrow fee in basis points.
    pub escrow_fee: u32,
    /// Block height of creation or the last edit. Hiring and
    /// completion do not refresh it.
    pub updated_at: u64,
}

/// Client-supplied input for a new job posting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
    pub budget: u64,
    pub deadline: u64,
    pub milestones: u32,
    pub category: String,
    pub skills: Vec<String>,
    pub payment_terms: String,
    pub revision_limit: u32,
    pub escrow_fee: u32,
}

/// The latest edit applied to a job. One slot per job, overwritten on
/// every successive update; this is not a history log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobUpdate {
    pub title: String,
    pub description: String,
    pub budget: u64,
    pub updated_at: u64,
    pub updater: AccountId,
}
