pub mod caregiver;
pub mod child;
pub mod record;
pub mod symptom;

pub use caregiver::{Caregiver, CaregiverChild};
pub use child::{Child, ChildProfile, ChildWithSymptoms};
pub use record::{Appointment, DeletedRecord, Milestone, Note};
pub use symptom::{DeletedSymptom, Symptom};
