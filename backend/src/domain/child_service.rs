use tracing::{info, warn};

use crate::domain::commands::child::{CreateChildCommand, UpdateChildCommand};
use crate::domain::commands::Editable;
use crate::domain::errors::ServiceResult;
use crate::domain::models::{
    Appointment, CaregiverChild, Child, ChildProfile, ChildWithSymptoms, Milestone, Note,
};
use crate::domain::validation::Validate;
use crate::storage::{DbConnection, Repository};

/// Service for managing child profiles
#[derive(Clone)]
pub struct ChildService {
    children: Repository<Child>,
}

impl ChildService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            children: Repository::new(db),
        }
    }

    /// Create a new child
    pub async fn create_child(&self, command: CreateChildCommand) -> ServiceResult<Child> {
        info!("Creating child: name={}", command.name);
        command.validate()?;

        let child = self
            .children
            .create(Child::new(command.name.trim(), command.date_of_birth))
            .await?;

        info!("Created child: {} with ID: {}", child.name, child.id);
        Ok(child)
    }

    pub async fn get_child(&self, child_id: i64) -> ServiceResult<Child> {
        info!("Getting child: {}", child_id);

        match self.children.get_by_id(child_id).await {
            Ok(child) => Ok(child),
            Err(e) => {
                warn!("Child lookup failed for {}: {}", child_id, e);
                Err(e.into())
            }
        }
    }

    /// List all children ordered by name
    pub async fn list_children(&self) -> ServiceResult<Vec<Child>> {
        let children = self.children.list().await?;
        info!("Found {} children", children.len());
        Ok(children)
    }

    /// List all children, each with its symptoms
    pub async fn list_children_with_symptoms(&self) -> ServiceResult<Vec<ChildWithSymptoms>> {
        Ok(self.children.list_with_symptoms().await?)
    }

    /// Overwrite the child's name and date of birth
    pub async fn update_child(
        &self,
        child_id: i64,
        command: UpdateChildCommand,
    ) -> ServiceResult<Child> {
        info!("Updating child: {}", child_id);
        command.validate()?;

        let mut child = self.children.get_by_id(child_id).await?;
        child.apply_edit(command);
        self.children.update(&child).await?;

        info!("Updated child: {} with ID: {}", child.name, child.id);
        Ok(child)
    }

    /// The child with every record that hangs off it
    pub async fn get_child_profile(&self, child_id: i64) -> ServiceResult<ChildProfile> {
        info!("Loading profile for child: {}", child_id);

        let loaded = self.children.get_with_symptoms(child_id).await?;
        let notes = self.children.related::<Note>().list_for_child(child_id).await?;
        let milestones = self.children.related::<Milestone>().list_for_child(child_id).await?;
        let appointments = self
            .children
            .related::<Appointment>()
            .list_for_child(child_id)
            .await?;
        let caregivers = self
            .children
            .related::<CaregiverChild>()
            .caregivers_for_child(child_id)
            .await?;

        Ok(ChildProfile {
            child: loaded.child,
            symptoms: loaded.symptoms,
            notes,
            milestones,
            appointments,
            caregivers,
        })
    }
}
