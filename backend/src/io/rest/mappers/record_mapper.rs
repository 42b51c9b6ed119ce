//! Notes, milestones and appointments share one mapper.

use chrono::NaiveDateTime;

use crate::domain::commands::record::{
    EditAppointmentCommand, EditMilestoneCommand, EditNoteCommand,
};
use crate::domain::models::{
    Appointment as DomainAppointment, DeletedRecord, Milestone as DomainMilestone,
    Note as DomainNote,
};
use crate::domain::validation::ValidationErrors;
use crate::io::rest::mappers::{
    collect_parsed, format_datetime, non_blank, parse_datetime, with_field_rules,
};
use shared::{
    Appointment as SharedAppointment, CreateAppointmentRequest, CreateMilestoneRequest,
    CreateNoteRequest, DeleteRecordResponse, Milestone as SharedMilestone, Note as SharedNote,
    RecordListResponse, RecordResponse, UpdateAppointmentRequest, UpdateMilestoneRequest,
    UpdateNoteRequest,
};

pub struct RecordMapper;

impl RecordMapper {
    pub fn note_to_dto(domain: DomainNote) -> SharedNote {
        SharedNote {
            id: domain.id,
            child_id: domain.child_id,
            content: domain.content,
        }
    }

    pub fn note_to_domain(request: CreateNoteRequest) -> DomainNote {
        DomainNote::new(request.child_id, non_blank(request.content))
    }

    pub fn note_edit(request: UpdateNoteRequest) -> EditNoteCommand {
        EditNoteCommand {
            content: non_blank(request.content),
        }
    }

    pub fn milestone_to_dto(domain: DomainMilestone) -> SharedMilestone {
        SharedMilestone {
            id: domain.id,
            child_id: domain.child_id,
            title: domain.title,
            description: domain.description,
        }
    }

    pub fn milestone_to_domain(request: CreateMilestoneRequest) -> DomainMilestone {
        DomainMilestone::new(
            request.child_id,
            non_blank(request.title),
            non_blank(request.description),
        )
    }

    pub fn milestone_edit(request: UpdateMilestoneRequest) -> EditMilestoneCommand {
        EditMilestoneCommand {
            title: non_blank(request.title),
            description: non_blank(request.description),
        }
    }

    pub fn appointment_to_dto(domain: DomainAppointment) -> SharedAppointment {
        SharedAppointment {
            id: domain.id,
            child_id: domain.child_id,
            location: domain.location,
            doctor: domain.doctor,
            date: format_datetime(domain.date),
        }
    }

    pub fn appointment_to_domain(
        request: CreateAppointmentRequest,
    ) -> Result<DomainAppointment, ValidationErrors> {
        let mut parse_errors = ValidationErrors::new();
        let date = collect_parsed(
            parse_datetime("date", &request.date),
            &mut parse_errors,
            NaiveDateTime::default(),
        );

        with_field_rules(
            DomainAppointment::new(
                request.child_id,
                non_blank(request.location),
                non_blank(request.doctor),
                date,
            ),
            parse_errors,
        )
    }

    pub fn appointment_edit(
        request: UpdateAppointmentRequest,
    ) -> Result<EditAppointmentCommand, ValidationErrors> {
        let mut parse_errors = ValidationErrors::new();
        let date = collect_parsed(
            parse_datetime("date", &request.date),
            &mut parse_errors,
            NaiveDateTime::default(),
        );

        with_field_rules(
            EditAppointmentCommand {
                location: non_blank(request.location),
                doctor: non_blank(request.doctor),
                date,
            },
            parse_errors,
        )
    }

    /// Wrap a converted record with a confirmation message
    pub fn to_record_response<T>(record: T, success_message: &str) -> RecordResponse<T> {
        RecordResponse {
            record,
            success_message: success_message.to_string(),
        }
    }

    pub fn to_record_list<D, T>(records: Vec<D>, to_dto: fn(D) -> T) -> RecordListResponse<T> {
        RecordListResponse {
            records: records.into_iter().map(to_dto).collect(),
        }
    }

    pub fn to_delete_response(deleted: DeletedRecord, success_message: &str) -> DeleteRecordResponse {
        DeleteRecordResponse {
            id: deleted.id,
            child_id: deleted.child_id,
            success_message: success_message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optional_fields_become_none() {
        let milestone = RecordMapper::milestone_to_domain(CreateMilestoneRequest {
            child_id: 1,
            title: Some("Walking".to_string()),
            description: Some("   ".to_string()),
        });

        assert_eq!(milestone.title.as_deref(), Some("Walking"));
        assert!(milestone.description.is_none());
    }

    #[test]
    fn test_appointment_date_is_required_and_parsed() {
        let appointment = RecordMapper::appointment_to_domain(CreateAppointmentRequest {
            child_id: 1,
            location: Some("Clinic".to_string()),
            doctor: None,
            date: "2025-08-01 09:45".to_string(),
        })
        .unwrap();
        assert_eq!(
            RecordMapper::appointment_to_dto(appointment).date,
            "2025-08-01T09:45:00"
        );

        let result = RecordMapper::appointment_to_domain(CreateAppointmentRequest {
            child_id: 1,
            location: None,
            doctor: None,
            date: String::new(),
        });
        assert_eq!(result.unwrap_err().messages_for("date").len(), 1);
    }
}
