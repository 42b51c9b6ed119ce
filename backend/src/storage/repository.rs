use std::collections::HashMap;
use std::marker::PhantomData;

use crate::domain::models::{Caregiver, CaregiverChild, Child, ChildWithSymptoms, Symptom};
use crate::storage::connection::DbConnection;
use crate::storage::entity::{ChildOwned, Entity};

/// Errors raised by the persistence layer
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Fetch / list / insert / update / delete by id for any [`Entity`]
pub struct Repository<E> {
    db: DbConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Repository<E> {
    pub fn new(db: DbConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// A repository for another entity over the same connection
    pub fn related<T: Entity>(&self) -> Repository<T> {
        Repository::new(self.db.clone())
    }

    fn select_sql() -> String {
        format!("SELECT id, {} FROM {}", E::COLUMNS.join(", "), E::TABLE)
    }

    pub async fn find_by_id(&self, id: i64) -> StorageResult<Option<E>> {
        let sql = format!("{} WHERE id = ?", Self::select_sql());
        let entity = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(entity)
    }

    /// Like [`find_by_id`](Self::find_by_id) but a missing row is an error
    pub async fn get_by_id(&self, id: i64) -> StorageResult<E> {
        self.find_by_id(id).await?.ok_or(StorageError::NotFound {
            entity: E::NAME,
            id,
        })
    }

    pub async fn exists(&self, id: i64) -> StorageResult<bool> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE id = ?", E::TABLE);
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(self.db.pool())
            .await?;
        Ok(count > 0)
    }

    pub async fn list(&self) -> StorageResult<Vec<E>> {
        let sql = format!("{} ORDER BY {}", Self::select_sql(), E::ORDER_BY);
        let entities = sqlx::query_as::<_, E>(&sql)
            .fetch_all(self.db.pool())
            .await?;
        Ok(entities)
    }

    /// Insert the entity and return it with the id the database assigned
    pub async fn create(&self, mut entity: E) -> StorageResult<E> {
        let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            E::COLUMNS.join(", "),
            placeholders
        );

        let result = entity
            .bind_columns(sqlx::query(&sql))
            .execute(self.db.pool())
            .await?;

        entity.set_id(result.last_insert_rowid());
        Ok(entity)
    }

    /// Overwrite every editable column of the row with the entity's id
    pub async fn update(&self, entity: &E) -> StorageResult<()> {
        let assignments = E::COLUMNS
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {} WHERE id = ?", E::TABLE, assignments);

        let result = entity
            .bind_columns(sqlx::query(&sql))
            .bind(entity.id())
            .execute(self.db.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                entity: E::NAME,
                id: entity.id(),
            });
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> StorageResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?", E::TABLE);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(self.db.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound { entity: E::NAME, id });
        }
        Ok(())
    }
}

impl<E: ChildOwned> Repository<E> {
    pub async fn list_for_child(&self, child_id: i64) -> StorageResult<Vec<E>> {
        let sql = format!(
            "{} WHERE child_id = ? ORDER BY {}",
            Self::select_sql(),
            E::ORDER_BY
        );
        let entities = sqlx::query_as::<_, E>(&sql)
            .bind(child_id)
            .fetch_all(self.db.pool())
            .await?;
        Ok(entities)
    }

    pub async fn count_for_child(&self, child_id: i64) -> StorageResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE child_id = ?", E::TABLE);
        let count = sqlx::query_scalar(&sql)
            .bind(child_id)
            .fetch_one(self.db.pool())
            .await?;
        Ok(count)
    }
}

impl Repository<Child> {
    /// Load a child and its symptom collection
    pub async fn get_with_symptoms(&self, id: i64) -> StorageResult<ChildWithSymptoms> {
        let child = self.get_by_id(id).await?;
        let symptoms = self.related::<Symptom>().list_for_child(id).await?;
        Ok(ChildWithSymptoms { child, symptoms })
    }

    /// All children, each with its symptoms
    pub async fn list_with_symptoms(&self) -> StorageResult<Vec<ChildWithSymptoms>> {
        let children = self.list().await?;

        let mut by_child: HashMap<i64, Vec<Symptom>> = HashMap::new();
        for symptom in self.related::<Symptom>().list().await? {
            by_child.entry(symptom.child_id).or_default().push(symptom);
        }

        Ok(children
            .into_iter()
            .map(|child| {
                let symptoms = by_child.remove(&child.id).unwrap_or_default();
                ChildWithSymptoms { child, symptoms }
            })
            .collect())
    }
}

impl Repository<CaregiverChild> {
    pub async fn find_link(
        &self,
        caregiver_id: i64,
        child_id: i64,
    ) -> StorageResult<Option<CaregiverChild>> {
        let link = sqlx::query_as::<_, CaregiverChild>(
            r#"
            SELECT id, caregiver_id, child_id
            FROM caregiver_children
            WHERE caregiver_id = ? AND child_id = ?
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(caregiver_id)
        .bind(child_id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(link)
    }

    /// Children assigned to a caregiver, ordered by name
    pub async fn children_for_caregiver(&self, caregiver_id: i64) -> StorageResult<Vec<Child>> {
        let children = sqlx::query_as::<_, Child>(
            r#"
            SELECT DISTINCT c.id, c.name, c.date_of_birth
            FROM children c
            JOIN caregiver_children cc ON cc.child_id = c.id
            WHERE cc.caregiver_id = ?
            ORDER BY c.name ASC, c.id ASC
            "#,
        )
        .bind(caregiver_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(children)
    }

    /// Caregivers assigned to a child
    pub async fn caregivers_for_child(&self, child_id: i64) -> StorageResult<Vec<Caregiver>> {
        let caregivers = sqlx::query_as::<_, Caregiver>(
            r#"
            SELECT DISTINCT g.id, g.full_name
            FROM caregivers g
            JOIN caregiver_children cc ON cc.caregiver_id = g.id
            WHERE cc.child_id = ?
            ORDER BY g.id ASC
            "#,
        )
        .bind(child_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(caregivers)
    }
}
