//! # Storage Entities
//!
//! Describes how each domain model maps onto its table so a single generic
//! [`Repository`](super::Repository) can serve all of them.

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite};

use crate::domain::models::{
    Appointment, Caregiver, CaregiverChild, Child, Milestone, Note, Symptom,
};

pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// A record stored in its own table under an integer `id` primary key
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static {
    /// Table holding the rows
    const TABLE: &'static str;
    /// Human-readable name used in errors and logs
    const NAME: &'static str;
    /// Every column except `id`, in the order `bind_columns` binds them
    const COLUMNS: &'static [&'static str];
    /// ORDER BY clause for listings
    const ORDER_BY: &'static str = "id ASC";

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// Bind the values of `COLUMNS`, in order
    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

/// An entity that belongs to exactly one child through `child_id`
pub trait ChildOwned: Entity {
    fn child_id(&self) -> i64;
}

impl Entity for Child {
    const TABLE: &'static str = "children";
    const NAME: &'static str = "Child";
    const COLUMNS: &'static [&'static str] = &["name", "date_of_birth"];
    const ORDER_BY: &'static str = "name ASC, id ASC";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(&self.name).bind(self.date_of_birth)
    }
}

impl Entity for Symptom {
    const TABLE: &'static str = "symptoms";
    const NAME: &'static str = "Symptom";
    const COLUMNS: &'static [&'static str] = &["name", "description", "date_logged", "child_id"];
    const ORDER_BY: &'static str = "date_logged DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&self.name)
            .bind(&self.description)
            .bind(self.date_logged)
            .bind(self.child_id)
    }
}

impl ChildOwned for Symptom {
    fn child_id(&self) -> i64 {
        self.child_id
    }
}

impl Entity for Note {
    const TABLE: &'static str = "notes";
    const NAME: &'static str = "Note";
    const COLUMNS: &'static [&'static str] = &["content", "child_id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(&self.content).bind(self.child_id)
    }
}

impl ChildOwned for Note {
    fn child_id(&self) -> i64 {
        self.child_id
    }
}

impl Entity for Milestone {
    const TABLE: &'static str = "milestones";
    const NAME: &'static str = "Milestone";
    const COLUMNS: &'static [&'static str] = &["title", "description", "child_id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&self.title)
            .bind(&self.description)
            .bind(self.child_id)
    }
}

impl ChildOwned for Milestone {
    fn child_id(&self) -> i64 {
        self.child_id
    }
}

impl Entity for Appointment {
    const TABLE: &'static str = "appointments";
    const NAME: &'static str = "Appointment";
    const COLUMNS: &'static [&'static str] = &["location", "doctor", "date", "child_id"];
    const ORDER_BY: &'static str = "date ASC, id ASC";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&self.location)
            .bind(&self.doctor)
            .bind(self.date)
            .bind(self.child_id)
    }
}

impl ChildOwned for Appointment {
    fn child_id(&self) -> i64 {
        self.child_id
    }
}

impl Entity for Caregiver {
    const TABLE: &'static str = "caregivers";
    const NAME: &'static str = "Caregiver";
    const COLUMNS: &'static [&'static str] = &["full_name"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(&self.full_name)
    }
}

impl Entity for CaregiverChild {
    const TABLE: &'static str = "caregiver_children";
    const NAME: &'static str = "CaregiverChild";
    const COLUMNS: &'static [&'static str] = &["caregiver_id", "child_id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.caregiver_id).bind(self.child_id)
    }
}
