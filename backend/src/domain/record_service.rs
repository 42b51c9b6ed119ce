//! Records that belong to a single child: symptoms, notes, milestones and
//! appointments. One generic service covers all four.

use tracing::{info, warn};

use crate::domain::commands::Editable;
use crate::domain::errors::ServiceResult;
use crate::domain::models::{Child, DeletedRecord};
use crate::domain::validation::Validate;
use crate::domain::ServiceError;
use crate::storage::{ChildOwned, DbConnection, Entity, Repository};

pub struct RecordService<E> {
    records: Repository<E>,
    children: Repository<Child>,
}

impl<E> Clone for RecordService<E> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            children: self.children.clone(),
        }
    }
}

impl<E> RecordService<E>
where
    E: ChildOwned + Validate + Editable,
{
    pub fn new(db: DbConnection) -> Self {
        Self {
            records: Repository::new(db.clone()),
            children: Repository::new(db),
        }
    }

    async fn ensure_child(&self, child_id: i64) -> ServiceResult<()> {
        if self.children.exists(child_id).await? {
            return Ok(());
        }
        warn!("{} refers to missing child {}", E::NAME, child_id);
        Err(ServiceError::NotFound {
            entity: Child::NAME,
            id: child_id,
        })
    }

    /// Store a new record for an existing child
    pub async fn create(&self, record: E) -> ServiceResult<E> {
        info!("Creating {} for child {}", E::NAME, record.child_id());
        record.validate()?;
        self.ensure_child(record.child_id()).await?;

        let created = self.records.create(record).await?;
        info!("Created {} with ID: {}", E::NAME, created.id());
        Ok(created)
    }

    pub async fn get(&self, id: i64) -> ServiceResult<E> {
        Ok(self.records.get_by_id(id).await?)
    }

    pub async fn list_for_child(&self, child_id: i64) -> ServiceResult<Vec<E>> {
        self.ensure_child(child_id).await?;
        Ok(self.records.list_for_child(child_id).await?)
    }

    /// Overwrite the editable fields of a stored record
    pub async fn update(&self, id: i64, edit: E::Edit) -> ServiceResult<E> {
        info!("Updating {}: {}", E::NAME, id);
        edit.validate()?;

        let mut record = self.records.get_by_id(id).await?;
        record.apply_edit(edit);
        self.records.update(&record).await?;

        Ok(record)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<DeletedRecord> {
        info!("Deleting {}: {}", E::NAME, id);

        let record = self.records.get_by_id(id).await?;
        self.records.delete(id).await?;

        Ok(DeletedRecord {
            id,
            child_id: record.child_id(),
        })
    }
}
