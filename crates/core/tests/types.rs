use std::collections::HashMap;

use gig_core::enums::JobStatus;
use gig_core::ids::{AccountId, JobId};
use gig_core::job::{Job, JobUpdate};
use serde_json::json;

#[test]
fn job_id_serializes_as_bare_number() {
    assert_eq!(serde_json::to_value(JobId(7)).unwrap(), json!(7));
}

#[test]
fn job_status_serializes_as_plain_tag() {
    assert_eq!(serde_json::to_value(JobStatus::Open).unwrap(), json!("Open"));
    assert_eq!(serde_json::to_value(JobStatus::Hired).unwrap(), json!("Hired"));
    assert_eq!(
        serde_json::to_value(JobStatus::Completed).unwrap(),
        json!("Completed")
    );
}

#[test]
fn job_round_trips_through_json() {
    let job = Job {
        id: JobId(1),
        title: "Web Dev Project".to_string(),
        description: "Build a website".to_string(),
        budget: 1000,
        deadline: 100,
        client: AccountId::new("ST1CLIENT"),
        freelancer: None,
        status: JobStatus::Open,
        milestones: 3,
        category: "Development".to_string(),
        skills: vec!["HTML".to_string(), "CSS".to_string()],
        payment_terms: "50% upfront".to_string(),
        revision_limit: 2,
        escrow_fee: 100,
        updated_at: 0,
    };
    let data = serde_json::to_string(&job).unwrap();
    let recovered: Job = serde_json::from_str(&data).unwrap();
    assert_eq!(job, recovered);
}

#[test]
fn update_record_round_trips_through_json() {
    let rec = JobUpdate {
        title: "New Title".to_string(),
        description: "New Desc".to_string(),
        budget: 2000,
        updated_at: 9,
        updater: AccountId::new("ST1CLIENT"),
    };
    let data = serde_json::to_string(&rec).unwrap();
    let recovered: JobUpdate = serde_json::from_str(&data).unwrap();
    assert_eq!(rec, recovered);
}

#[test]
fn job_id_works_as_map_key() {
    let mut map: HashMap<JobId, &str> = HashMap::new();
    map.insert(JobId(1), "first");
    map.insert(JobId(2), "second");
    assert_eq!(map.get(&JobId(1)), Some(&"first"));
    assert_eq!(map.len(), 2);
}

#[test]
fn account_ids_compare_by_value() {
    assert_eq!(AccountId::new("ST1CLIENT"), AccountId::from("ST1CLIENT"));
    assert_ne!(AccountId::new("ST1CLIENT"), AccountId::new("ST2FREELANCER"));
    assert_eq!(AccountId::new("ST1CLIENT").to_string(), "ST1CLIENT");
}
