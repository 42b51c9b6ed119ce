//! # Guarded Deletion
//!
//! A child cannot be removed while symptom records still point at it. The
//! check is made twice, independently: once when the confirmation is shown
//! ([`DeletionService::check_child_deletable`]) and again when the deletion is
//! submitted ([`DeletionService::delete_child`]). Nothing read by the first
//! call is reused by the second.
//!
//! Only symptoms block a deletion. Notes, milestones, appointments and
//! caregiver links are removed together with the child by the storage
//! layer's cascade.
//!
//! The re-check and the delete are separate statements, not one transaction:
//! a symptom logged between them is removed by the cascade.

use tracing::{info, warn};

use crate::domain::errors::ServiceResult;
use crate::domain::models::{Child, DeletedSymptom, Symptom};
use crate::domain::ServiceError;
use crate::storage::{DbConnection, Repository};

/// Shown next to the delete confirmation while symptoms exist
pub const CHILD_HAS_SYMPTOMS_NOTICE: &str =
    "This child has one or more symptoms. Please delete the symptoms first before deleting the child.";

/// Returned when a delete is submitted while symptoms exist
pub const CHILD_DELETE_BLOCKED: &str =
    "Delete blocked: this child has symptoms. Delete those first.";

/// Result of asking whether a child may be deleted
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionCheck {
    pub child: Child,
    pub symptom_count: usize,
    /// Present when the deletion would be refused
    pub block_reason: Option<String>,
}

impl DeletionCheck {
    pub fn can_delete(&self) -> bool {
        self.block_reason.is_none()
    }
}

#[derive(Clone)]
pub struct DeletionService {
    children: Repository<Child>,
    symptoms: Repository<Symptom>,
}

impl DeletionService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            children: Repository::new(db.clone()),
            symptoms: Repository::new(db),
        }
    }

    /// Read-only: load the child with its symptoms and report whether it can go
    pub async fn check_child_deletable(&self, child_id: i64) -> ServiceResult<DeletionCheck> {
        info!("Checking whether child {} can be deleted", child_id);

        let loaded = self.children.get_with_symptoms(child_id).await?;
        let block_reason = loaded
            .has_symptoms()
            .then(|| CHILD_HAS_SYMPTOMS_NOTICE.to_string());

        Ok(DeletionCheck {
            symptom_count: loaded.symptoms.len(),
            child: loaded.child,
            block_reason,
        })
    }

    /// Delete the child unless it still has symptoms. Returns the removed child.
    pub async fn delete_child(&self, child_id: i64) -> ServiceResult<Child> {
        info!("Deleting child: {}", child_id);

        let loaded = self.children.get_with_symptoms(child_id).await?;
        if loaded.has_symptoms() {
            warn!(
                "Delete of child {} blocked: {} symptom(s) remain",
                child_id,
                loaded.symptoms.len()
            );
            return Err(ServiceError::Blocked(CHILD_DELETE_BLOCKED.to_string()));
        }

        self.children.delete(child_id).await?;
        info!("Deleted child: {} with ID: {}", loaded.child.name, loaded.child.id);

        Ok(loaded.child)
    }

    /// Delete a symptom. Always allowed once the symptom exists.
    pub async fn delete_symptom(&self, symptom_id: i64) -> ServiceResult<DeletedSymptom> {
        info!("Deleting symptom: {}", symptom_id);

        let symptom = self.symptoms.get_by_id(symptom_id).await?;
        self.symptoms.delete(symptom_id).await?;
        info!("Deleted symptom {} of child {}", symptom.id, symptom.child_id);

        Ok(DeletedSymptom {
            symptom_id,
            child_id: symptom.child_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Appointment, Milestone, Note};
    use chrono::NaiveDate;

    struct Fixture {
        service: DeletionService,
        children: Repository<Child>,
        symptoms: Repository<Symptom>,
        db: DbConnection,
    }

    async fn setup_test() -> Fixture {
        let db = DbConnection::in_memory()
            .await
            .expect("Failed to create test database");
        Fixture {
            service: DeletionService::new(db.clone()),
            children: Repository::new(db.clone()),
            symptoms: Repository::new(db.clone()),
            db,
        }
    }

    fn july(day: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, day)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    impl Fixture {
        async fn child(&self, name: &str) -> Child {
            self.children
                .create(Child::new(name, None))
                .await
                .expect("Failed to create child")
        }

        async fn symptom(&self, child_id: i64, name: &str) -> Symptom {
            self.symptoms
                .create(Symptom::new(child_id, name, None, july(20)))
                .await
                .expect("Failed to create symptom")
        }
    }

    #[tokio::test]
    async fn test_delete_child_without_symptoms_succeeds() {
        let fx = setup_test().await;
        let amy = fx.child("Amy").await;

        let deleted = fx.service.delete_child(amy.id).await.expect("Delete should succeed");
        assert_eq!(deleted, amy);

        assert!(fx.children.find_by_id(amy.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_child_with_symptoms_is_blocked() {
        let fx = setup_test().await;
        let ben = fx.child("Ben").await;
        fx.symptom(ben.id, "Fever").await;

        match fx.service.delete_child(ben.id).await {
            Err(ServiceError::Blocked(reason)) => assert_eq!(reason, CHILD_DELETE_BLOCKED),
            other => panic!("expected Blocked, got {:?}", other),
        }

        let still_there = fx.children.get_by_id(ben.id).await.expect("Ben should remain");
        assert_eq!(still_there, ben);
        assert_eq!(fx.symptoms.count_for_child(ben.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_symptom_then_child() {
        let fx = setup_test().await;
        let ben = fx.child("Ben").await;
        let fever = fx.symptom(ben.id, "Fever").await;

        let deleted = fx.service.delete_symptom(fever.id).await.expect("Delete should succeed");
        assert_eq!(deleted.child_id, ben.id);
        assert_eq!(deleted.symptom_id, fever.id);
        assert!(fx.symptoms.find_by_id(fever.id).await.unwrap().is_none());

        fx.service
            .delete_child(ben.id)
            .await
            .expect("Ben has no symptoms left");
        assert!(fx.children.find_by_id(ben.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_child_is_not_found() {
        let fx = setup_test().await;

        assert!(matches!(
            fx.service.check_child_deletable(999).await,
            Err(ServiceError::NotFound { entity: "Child", id: 999 })
        ));
        assert!(matches!(
            fx.service.delete_child(999).await,
            Err(ServiceError::NotFound { entity: "Child", id: 999 })
        ));
    }

    #[tokio::test]
    async fn test_missing_symptom_is_not_found() {
        let fx = setup_test().await;

        assert!(matches!(
            fx.service.delete_symptom(999).await,
            Err(ServiceError::NotFound { entity: "Symptom", id: 999 })
        ));
    }

    #[tokio::test]
    async fn test_delete_symptom_twice_reports_not_found() {
        let fx = setup_test().await;
        let ben = fx.child("Ben").await;
        let fever = fx.symptom(ben.id, "Fever").await;

        fx.service.delete_symptom(fever.id).await.unwrap();
        assert!(matches!(
            fx.service.delete_symptom(fever.id).await,
            Err(ServiceError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_check_reports_block_reason_without_mutating() {
        let fx = setup_test().await;
        let ben = fx.child("Ben").await;
        fx.symptom(ben.id, "Fever").await;
        fx.symptom(ben.id, "Cough").await;

        let check = fx.service.check_child_deletable(ben.id).await.unwrap();
        assert!(!check.can_delete());
        assert_eq!(check.symptom_count, 2);
        assert_eq!(check.block_reason.as_deref(), Some(CHILD_HAS_SYMPTOMS_NOTICE));
        assert_eq!(check.child, ben);

        assert!(fx.children.exists(ben.id).await.unwrap());
        assert_eq!(fx.symptoms.count_for_child(ben.id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_check_allows_child_without_symptoms() {
        let fx = setup_test().await;
        let amy = fx.child("Amy").await;

        let check = fx.service.check_child_deletable(amy.id).await.unwrap();
        assert!(check.can_delete());
        assert_eq!(check.symptom_count, 0);
        assert!(check.block_reason.is_none());
    }

    #[tokio::test]
    async fn test_delete_rechecks_after_earlier_check() {
        let fx = setup_test().await;
        let amy = fx.child("Amy").await;

        let check = fx.service.check_child_deletable(amy.id).await.unwrap();
        assert!(check.can_delete());

        // A symptom arrives between the confirmation page and the submit
        fx.symptom(amy.id, "Rash").await;

        assert!(matches!(
            fx.service.delete_child(amy.id).await,
            Err(ServiceError::Blocked(_))
        ));
        assert!(fx.children.exists(amy.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_symptoms_of_other_children_do_not_block() {
        let fx = setup_test().await;
        let amy = fx.child("Amy").await;
        let ben = fx.child("Ben").await;
        fx.symptom(ben.id, "Fever").await;

        fx.service.delete_child(amy.id).await.expect("Amy has no symptoms");
        assert!(fx.children.exists(ben.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_other_records_do_not_block_and_cascade() {
        let fx = setup_test().await;
        let amy = fx.child("Amy").await;

        let notes = Repository::<Note>::new(fx.db.clone());
        let milestones = Repository::<Milestone>::new(fx.db.clone());
        let appointments = Repository::<Appointment>::new(fx.db.clone());
        notes.create(Note::new(amy.id, Some("first steps".into()))).await.unwrap();
        milestones
            .create(Milestone::new(amy.id, Some("Walking".into()), None))
            .await
            .unwrap();
        appointments
            .create(Appointment::new(amy.id, Some("Clinic".into()), None, july(25)))
            .await
            .unwrap();

        fx.service.delete_child(amy.id).await.expect("Only symptoms block");

        assert_eq!(notes.count_for_child(amy.id).await.unwrap(), 0);
        assert_eq!(milestones.count_for_child(amy.id).await.unwrap(), 0);
        assert_eq!(appointments.count_for_child(amy.id).await.unwrap(), 0);
    }
}
