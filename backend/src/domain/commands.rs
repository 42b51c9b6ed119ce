//! Domain-level command types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the DTOs of the `shared`
//! crate onto them, parsing dates on the way.

use crate::domain::models::{Appointment, Caregiver, Child, Milestone, Note, Symptom};
use crate::domain::validation::{check_child_fields, check_symptom_fields, Validate, ValidationErrors};

/// A stored value whose editable fields are overwritten as a whole
pub trait Editable {
    type Edit: Validate + Send;

    /// Overwrite every editable field. Identity and ownership stay as they are.
    fn apply_edit(&mut self, edit: Self::Edit);
}

pub mod child {
    use chrono::NaiveDate;

    /// Input for creating a new child.
    #[derive(Debug, Clone)]
    pub struct CreateChildCommand {
        pub name: String,
        pub date_of_birth: Option<NaiveDate>,
    }

    /// Full replacement of a child's editable fields.
    #[derive(Debug, Clone)]
    pub struct UpdateChildCommand {
        pub name: String,
        pub date_of_birth: Option<NaiveDate>,
    }
}

pub mod symptom {
    use chrono::NaiveDateTime;

    #[derive(Debug, Clone)]
    pub struct EditSymptomCommand {
        pub name: String,
        pub description: Option<String>,
        pub date_logged: NaiveDateTime,
    }
}

pub mod record {
    use chrono::NaiveDateTime;

    #[derive(Debug, Clone)]
    pub struct EditNoteCommand {
        pub content: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct EditMilestoneCommand {
        pub title: Option<String>,
        pub description: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct EditAppointmentCommand {
        pub location: Option<String>,
        pub doctor: Option<String>,
        pub date: NaiveDateTime,
    }
}

pub mod caregiver {
    /// Input for creating or overwriting a caregiver.
    #[derive(Debug, Clone)]
    pub struct CaregiverCommand {
        pub full_name: Option<String>,
    }
}

use caregiver::CaregiverCommand;
use child::{CreateChildCommand, UpdateChildCommand};
use record::{EditAppointmentCommand, EditMilestoneCommand, EditNoteCommand};
use symptom::EditSymptomCommand;

impl Validate for CreateChildCommand {
    fn validate(&self) -> Result<(), ValidationErrors> {
        check_child_fields(&self.name)
    }
}

impl Validate for UpdateChildCommand {
    fn validate(&self) -> Result<(), ValidationErrors> {
        check_child_fields(&self.name)
    }
}

impl Validate for EditSymptomCommand {
    fn validate(&self) -> Result<(), ValidationErrors> {
        check_symptom_fields(&self.name, self.description.as_deref())
    }
}

impl Validate for EditNoteCommand {}
impl Validate for EditMilestoneCommand {}
impl Validate for EditAppointmentCommand {}
impl Validate for CaregiverCommand {}

impl Editable for Child {
    type Edit = UpdateChildCommand;

    fn apply_edit(&mut self, edit: UpdateChildCommand) {
        self.name = edit.name.trim().to_string();
        self.date_of_birth = edit.date_of_birth;
    }
}

impl Editable for Symptom {
    type Edit = EditSymptomCommand;

    fn apply_edit(&mut self, edit: EditSymptomCommand) {
        self.name = edit.name.trim().to_string();
        self.description = edit.description;
        self.date_logged = edit.date_logged;
    }
}

impl Editable for Note {
    type Edit = EditNoteCommand;

    fn apply_edit(&mut self, edit: EditNoteCommand) {
        self.content = edit.content;
    }
}

impl Editable for Milestone {
    type Edit = EditMilestoneCommand;

    fn apply_edit(&mut self, edit: EditMilestoneCommand) {
        self.title = edit.title;
        self.description = edit.description;
    }
}

impl Editable for Appointment {
    type Edit = EditAppointmentCommand;

    fn apply_edit(&mut self, edit: EditAppointmentCommand) {
        self.location = edit.location;
        self.doctor = edit.doctor;
        self.date = edit.date;
    }
}

impl Editable for Caregiver {
    type Edit = CaregiverCommand;

    fn apply_edit(&mut self, edit: CaregiverCommand) {
        self.full_name = edit.full_name;
    }
}
