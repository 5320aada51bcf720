use std::sync::Arc;
use std::time::Duration;

use gig_core::enums::JobStatus;
use gig_core::ids::{AccountId, JobId};
use gig_core::job::JobPosting;
use gig_registry::snapshot::{load_registry, save_registry, spawn_snapshot_task};
use gig_registry::{Registry, RegistryConfig};
use tokio::sync::RwLock;

fn posting(title: &str) -> JobPosting {
    JobPosting {
        title: title.to_string(),
        description: "Build a website".to_string(),
        budget: 1000,
        deadline: 100,
        milestones: 3,
        category: "Development".to_string(),
        skills: vec!["HTML".to_string()],
        payment_terms: "50% upfront".to_string(),
        revision_limit: 2,
        escrow_fee: 100,
    }
}

fn client() -> AccountId {
    AccountId::new("ST1CLIENT")
}

#[test]
fn missing_snapshot_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.json");

    let reg = load_registry(&path, RegistryConfig::default());
    assert_eq!(reg.job_count(), 0);
}

#[test]
fn save_then_load_round_trips_the_aggregate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.json");

    let mut reg = Registry::new(RegistryConfig::default());
    reg.create_job(posting("Persisted Job"), client(), 0).unwrap();
    let second = reg.create_job(posting("Hired Job"), client(), 0).unwrap();
    reg.hire_freelancer(second, AccountId::new("ST2FREELANCER"), &client(), 1)
        .unwrap();

    save_registry(&path, &reg).unwrap();
    let mut restored = load_registry(&path, RegistryConfig::default());

    assert_eq!(restored.job_count(), 2);
    assert!(restored.title_exists("Persisted Job"));
    let job = restored.get_job(second).unwrap();
    assert_eq!(job.status, JobStatus::Hired);
    assert_eq!(job.freelancer, Some(AccountId::new("ST2FREELANCER")));

    // The id sequence continues where it left off.
    let next = restored.create_job(posting("After Restore"), client(), 2).unwrap();
    assert_eq!(next, JobId(3));
}

#[test]
fn corrupt_snapshot_falls_back_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.json");
    std::fs::write(&path, "not json at all").unwrap();

    let reg = load_registry(&path, RegistryConfig::default());
    assert_eq!(reg.job_count(), 0);
}

#[tokio::test]
async fn snapshot_task_writes_periodically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.json");

    let mut reg = Registry::new(RegistryConfig::default());
    reg.create_job(posting("Background Job"), client(), 0).unwrap();
    let shared = Arc::new(RwLock::new(reg));

    spawn_snapshot_task(shared, path.clone(), Duration::from_millis(20));
    tokio::time::sleep(Duration::from_millis(200)).await;

    let restored = load_registry(&path, RegistryConfig::default());
    assert_eq!(restored.job_count(), 1);
    assert!(restored.title_exists("Background Job"));
}
