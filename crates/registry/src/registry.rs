use std::collections::HashMap;

use gig_core::enums::JobStatus;
use gig_core::ids::{AccountId, JobId};
use gig_core::job::{Job, JobPosting, JobUpdate};
use serde::{Deserialize, Serialize};

use crate::config::RegistryConfig;
use crate::error::RegistryError;

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 1000;
pub const MAX_CATEGORY_CHARS: usize = 50;
pub const MAX_SKILLS: usize = 10;
pub const MAX_PAYMENT_TERMS_CHARS: usize = 100;
pub const MAX_MILESTONES: u32 = 10;
pub const MAX_REVISION_LIMIT: u32 = 5;
pub const MAX_ESCROW_FEE_BPS: u32 = 1000;

/// The job registry aggregate: job table, title index, id sequence and
/// the per-job update slots.
///
/// All mutation goes through `&mut self`, so one logical owner
/// serializes every transition; hosts that share the registry across
/// tasks wrap it in [`crate::snapshot::SharedRegistry`]. Every
/// operation validates completely before its first write, so a failed
/// call leaves the aggregate untouched.
///
/// Job ids are dense, starting at 1, and never reused; there is no
/// delete operation. A job's title is unique across all live titles,
/// and the title index always mirrors the job table exactly.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Registry {
    config: RegistryConfig,
    jobs: HashMap<JobId, Job>,
    updates: HashMap<JobId, JobUpdate>,
    by_title: HashMap<String, JobId>,
    /// Last assigned job id; also the count of jobs ever created.
    next_job_id: u64,
}

impl Registry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            jobs: HashMap::new(),
            updates: HashMap::new(),
            by_title: HashMap::new(),
            next_job_id: 0,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Posts a new job owned by `caller` at block height `now`.
    ///
    /// Validation order is part of the contract: capacity, then each
    /// field in declaration order, then title uniqueness. The first
    /// violation wins even when several fields are invalid at once.
    pub fn create_job(
        &mut self,
        posting: JobPosting,
        caller: AccountId,
        now: u64,
    ) -> Result<JobId, RegistryError> {
        if self.next_job_id >= self.config.max_jobs {
            return Err(RegistryError::CapacityExceeded);
        }
        validate_title(&posting.title)?;
        validate_description(&posting.description)?;
        validate_budget(posting.budget)?;
        if posting.deadline <= now {
            return Err(RegistryError::InvalidDeadline);
        }
        if posting.milestones == 0 || posting.milestones > MAX_MILESTONES {
            return Err(RegistryError::InvalidMilestones);
        }
        if posting.category.is_empty() || char_len(&posting.category) > MAX_CATEGORY_CHARS {
            return Err(RegistryError::InvalidCategory);
        }
        if posting.skills.len() > MAX_SKILLS {
            return Err(RegistryError::InvalidSkills);
        }
        if char_len(&posting.payment_terms) > MAX_PAYMENT_TERMS_CHARS {
            return Err(RegistryError::InvalidPaymentTerms);
        }
        if posting.revision_limit > MAX_REVISION_LIMIT {
            return Err(RegistryError::InvalidRevisionLimit);
        }
        if posting.escrow_fee > MAX_ESCROW_FEE_BPS {
            return Err(RegistryError::InvalidEscrowFee);
        }
        if self.by_title.contains_key(&posting.title) {
            return Err(RegistryError::JobAlreadyExists);
        }

        let id = JobId(self.next_job_id + 1);
        let job = Job {
            id,
            title: posting.title.clone(),
            description: posting.description,
            budget: posting.budget,
            deadline: posting.deadline,
            client: caller,
            freelancer: None,
            status: JobStatus::Open,
            milestones: posting.milestones,
            category: posting.category,
            skills: posting.skills,
            payment_terms: posting.payment_terms,
            revision_limit: posting.revision_limit,
            escrow_fee: posting.escrow_fee,
            updated_at: now,
        };
        tracing::info!(job_id = %id, client = %job.client, title = %job.title, "job created");
        self.by_title.insert(posting.title, id);
        self.jobs.insert(id, job);
        self.next_job_id = id.0;
        Ok(id)
    }

    /// Assigns `freelancer` to an open job and moves it to Hired.
    ///
    /// Only the client may hire, and not itself. The job's
    /// `updated_at` stays at its previous value.
    pub fn hire_freelancer(
        &mut self,
        id: JobId,
        freelancer: AccountId,
        caller: &AccountId,
        now: u64,
    ) -> Result<(), RegistryError> {
        let job = self.jobs.get_mut(&id).ok_or(RegistryError::JobNotFound)?;
        if job.client != *caller {
            return Err(RegistryError::NotAuthorized);
        }
        if job.status != JobStatus::Open {
            return Err(RegistryError::InvalidStatus);
        }
        if freelancer == *caller {
            return Err(RegistryError::InvalidFreelancer);
        }
        tracing::info!(job_id = %id, freelancer = %freelancer, height = now, "freelancer hired");
        job.freelancer = Some(freelancer);
        job.status = JobStatus::Hired;
        Ok(())
    }

    /// Moves a hired job to Completed. Either party may complete.
    pub fn complete_job(
        &mut self,
        id: JobId,
        caller: &AccountId,
        now: u64,
    ) -> Result<(), RegistryError> {
        let job = self.jobs.get_mut(&id).ok_or(RegistryError::JobNotFound)?;
        let is_party = job.client == *caller || job.freelancer.as_ref() == Some(caller);
        if !is_party {
            return Err(RegistryError::NotAuthorized);
        }
        if job.status != JobStatus::Hired {
            return Err(RegistryError::InvalidStatus);
        }
        tracing::info!(job_id = %id, by = %caller, height = now, "job completed");
        job.status = JobStatus::Completed;
        Ok(())
    }

    /// Rewrites a job's title, description and budget, refreshes its
    /// `updated_at` and overwrites the job's update slot.
    ///
    /// Renaming to the job's own current title is a no-op on the
    /// index; renaming onto another job's title fails. Known
    /// permissive behavior, kept deliberately: no status gate is
    /// applied, so a client may edit a job after it is Hired or even
    /// Completed, which also frees the old title for reuse.
    pub fn update_job(
        &mut self,
        id: JobId,
        title: String,
        description: String,
        budget: u64,
        caller: AccountId,
        now: u64,
    ) -> Result<(), RegistryError> {
        let job = self.jobs.get(&id).ok_or(RegistryError::JobNotFound)?;
        if job.client != caller {
            return Err(RegistryError::NotAuthorized);
        }
        validate_title(&title)?;
        validate_description(&description)?;
        validate_budget(budget)?;
        if let Some(&holder) = self.by_title.get(&title) {
            if holder != id {
                return Err(RegistryError::JobAlreadyExists);
            }
        }

        let old_title = job.title.clone();
        self.reindex_title(&old_title, title.clone(), id);
        let job = self.jobs.get_mut(&id).ok_or(RegistryError::JobNotFound)?;
        job.title = title.clone();
        job.description = description.clone();
        job.budget = budget;
        job.updated_at = now;
        tracing::info!(job_id = %id, updater = %caller, height = now, "job updated");
        self.updates.insert(
            id,
            JobUpdate {
                title,
                description,
                budget,
                updated_at: now,
                updater: caller,
            },
        );
        Ok(())
    }

    pub fn get_job(&self, id: JobId) -> Option<&Job> {
        self.jobs.get(&id)
    }

    /// Latest edit applied through [`Registry::update_job`], if any.
    pub fn last_update(&self, id: JobId) -> Option<&JobUpdate> {
        self.updates.get(&id)
    }

    /// Total number of jobs ever created.
    pub fn job_count(&self) -> u64 {
        self.next_job_id
    }

    pub fn title_exists(&self, title: &str) -> bool {
        self.by_title.contains_key(title)
    }

    /// Single code path that moves a title between index entries, so
    /// the job table and the title index can never drift apart.
    fn reindex_title(&mut self, old: &str, new: String, id: JobId) {
        self.by_title.remove(old);
        self.by_title.insert(new, id);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

fn char_len(s: &str) -> usize {
    // Limits count Unicode scalar values, not bytes.
    s.chars().count()
}

fn validate_title(title: &str) -> Result<(), RegistryError> {
    if title.is_empty() || char_len(title) > MAX_TITLE_CHARS {
        return Err(RegistryError::InvalidTitle);
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), RegistryError> {
    if description.is_empty() || char_len(description) > MAX_DESCRIPTION_CHARS {
        return Err(RegistryError::InvalidDescription);
    }
    Ok(())
}

fn validate_budget(budget: u64) -> Result<(), RegistryError> {
    if budget == 0 {
        return Err(RegistryError::InvalidBudget);
    }
    Ok(())
}
