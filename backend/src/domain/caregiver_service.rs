use tracing::{info, warn};

use crate::domain::commands::caregiver::CaregiverCommand;
use crate::domain::commands::Editable;
use crate::domain::errors::ServiceResult;
use crate::domain::models::{Caregiver, CaregiverChild, Child};
use crate::domain::validation::Validate;
use crate::domain::ServiceError;
use crate::storage::{DbConnection, Entity, Repository};

/// Caregivers and their assignment to children
#[derive(Clone)]
pub struct CaregiverService {
    caregivers: Repository<Caregiver>,
    children: Repository<Child>,
    links: Repository<CaregiverChild>,
}

impl CaregiverService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            caregivers: Repository::new(db.clone()),
            children: Repository::new(db.clone()),
            links: Repository::new(db),
        }
    }

    async fn ensure_caregiver(&self, caregiver_id: i64) -> ServiceResult<()> {
        if self.caregivers.exists(caregiver_id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound {
                entity: Caregiver::NAME,
                id: caregiver_id,
            })
        }
    }

    async fn ensure_child(&self, child_id: i64) -> ServiceResult<()> {
        if self.children.exists(child_id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound {
                entity: Child::NAME,
                id: child_id,
            })
        }
    }

    pub async fn create_caregiver(&self, command: CaregiverCommand) -> ServiceResult<Caregiver> {
        command.validate()?;
        let caregiver = self.caregivers.create(Caregiver::new(command.full_name)).await?;
        info!("Created caregiver with ID: {}", caregiver.id);
        Ok(caregiver)
    }

    pub async fn get_caregiver(&self, caregiver_id: i64) -> ServiceResult<Caregiver> {
        Ok(self.caregivers.get_by_id(caregiver_id).await?)
    }

    pub async fn list_caregivers(&self) -> ServiceResult<Vec<Caregiver>> {
        Ok(self.caregivers.list().await?)
    }

    pub async fn update_caregiver(
        &self,
        caregiver_id: i64,
        command: CaregiverCommand,
    ) -> ServiceResult<Caregiver> {
        command.validate()?;

        let mut caregiver = self.caregivers.get_by_id(caregiver_id).await?;
        caregiver.apply_edit(command);
        self.caregivers.update(&caregiver).await?;

        info!("Updated caregiver: {}", caregiver_id);
        Ok(caregiver)
    }

    /// Remove a caregiver. Its assignments go with it; the children stay.
    pub async fn delete_caregiver(&self, caregiver_id: i64) -> ServiceResult<()> {
        self.caregivers.delete(caregiver_id).await?;
        info!("Deleted caregiver: {}", caregiver_id);
        Ok(())
    }

    /// Assign a caregiver to a child. Assigning an existing pair returns the
    /// link already stored.
    pub async fn assign(&self, caregiver_id: i64, child_id: i64) -> ServiceResult<CaregiverChild> {
        self.ensure_caregiver(caregiver_id).await?;
        self.ensure_child(child_id).await?;

        if let Some(existing) = self.links.find_link(caregiver_id, child_id).await? {
            info!(
                "Caregiver {} already assigned to child {}",
                caregiver_id, child_id
            );
            return Ok(existing);
        }

        let link = self
            .links
            .create(CaregiverChild::new(caregiver_id, child_id))
            .await?;
        info!("Assigned caregiver {} to child {}", caregiver_id, child_id);
        Ok(link)
    }

    pub async fn unassign(&self, caregiver_id: i64, child_id: i64) -> ServiceResult<()> {
        match self.links.find_link(caregiver_id, child_id).await? {
            Some(link) => {
                self.links.delete(link.id).await?;
                info!("Unassigned caregiver {} from child {}", caregiver_id, child_id);
                Ok(())
            }
            None => {
                warn!(
                    "Caregiver {} is not assigned to child {}",
                    caregiver_id, child_id
                );
                Err(ServiceError::NotAssigned {
                    caregiver_id,
                    child_id,
                })
            }
        }
    }

    /// Children assigned to the caregiver, ordered by name
    pub async fn children_of(&self, caregiver_id: i64) -> ServiceResult<Vec<Child>> {
        self.ensure_caregiver(caregiver_id).await?;
        Ok(self.links.children_for_caregiver(caregiver_id).await?)
    }

    pub async fn caregivers_of(&self, child_id: i64) -> ServiceResult<Vec<Caregiver>> {
        self.ensure_child(child_id).await?;
        Ok(self.links.caregivers_for_child(child_id).await?)
    }
}
