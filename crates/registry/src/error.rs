use thiserror::Error;

/// Every way a registry operation can fail.
///
/// Failures are expected, typed outcomes: nothing in this crate
/// panics on bad input, and a failed call leaves the registry exactly
/// as it was. Each variant carries a stable numeric code that the
/// surrounding services (escrow, bidding, milestones, disputes,
/// reputation) key their own handling off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("caller is not authorized for this operation")]
    NotAuthorized,
    #[error("title must be non-empty and at most 100 characters")]
    InvalidTitle,
    #[error("description must be non-empty and at most 1000 characters")]
    InvalidDescription,
    #[error("budget must be positive")]
    InvalidBudget,
    #[error("deadline must lie beyond the current block height")]
    InvalidDeadline,
    #[error("a job with this title already exists")]
    JobAlreadyExists,
    #[error("no job with this id")]
    JobNotFound,
    #[error("job status does not permit this operation")]
    InvalidStatus,
    #[error("milestone count must be between 1 and 10")]
    InvalidMilestones,
    #[error("client cannot hire itself")]
    InvalidFreelancer,
    #[error("category must be non-empty and at most 50 characters")]
    InvalidCategory,
    #[error("at most 10 skills may be listed")]
    InvalidSkills,
    #[error("payment terms must be at most 100 characters")]
    InvalidPaymentTerms,
    #[error("revision limit must be at most 5")]
    InvalidRevisionLimit,
    #[error("escrow fee must be at most 1000 basis points")]
    InvalidEscrowFee,
    #[error("registry is at its job capacity")]
    CapacityExceeded,
}

impl RegistryError {
    /// Stable numeric tag shared with collaborator services.
    pub const fn code(self) -> u32 {
        match self {
            Self::NotAuthorized => 100,
            Self::InvalidTitle => 101,
            Self::InvalidDescription => 102,
            Self::InvalidBudget => 103,
            Self::InvalidDeadline => 104,
            Self::JobAlreadyExists => 105,
            Self::JobNotFound => 106,
            Self::InvalidStatus => 107,
            Self::InvalidMilestones => 108,
            Self::InvalidFreelancer => 109,
            Self::InvalidCategory => 117,
            Self::InvalidSkills => 118,
            Self::InvalidPaymentTerms => 119,
            Self::InvalidRevisionLimit => 120,
            Self::InvalidEscrowFee => 121,
            Self::CapacityExceeded => 122,
        }
    }
}
