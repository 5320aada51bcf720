use gig_core::ids::AccountId;
use serde::{Deserialize, Serialize};

/// Registry-wide settings plus the principals of the collaborator
/// services wired in at deployment time.
///
/// The collaborator principals and the platform fee are stored and
/// exposed for the surrounding runtime; no operation in this crate
/// consults them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Hard ceiling on the number of jobs ever created.
    pub max_jobs: u64,
    /// Platform fee in basis points.
    pub platform_fee: u32,
    pub escrow_contract: Option<AccountId>,
    pub bid_manager_contract: Option<AccountId>,
    pub milestone_manager_contract: Option<AccountId>,
    pub dispute_resolution_contract: Option<AccountId>,
    pub reputation_system_contract: Option<AccountId>,
    pub ipfs_verifier_contract: Option<AccountId>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_jobs: 10_000,
            platform_fee: 500,
            escrow_contract: None,
            bid_manager_contract: None,
            milestone_manager_contract: None,
            dispute_resolution_contract: None,
            reputation_system_contract: None,
            ipfs_verifier_contract: None,
        }
    }
}
