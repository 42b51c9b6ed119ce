use crate::domain::commands::child::{CreateChildCommand, UpdateChildCommand};
use crate::domain::models::{Child as DomainChild, ChildProfile, ChildWithSymptoms};
use crate::domain::validation::ValidationErrors;
use crate::domain::DeletionCheck;
use crate::io::rest::mappers::caregiver_mapper::CaregiverMapper;
use crate::io::rest::mappers::record_mapper::RecordMapper;
use crate::io::rest::mappers::symptom_mapper::SymptomMapper;
use crate::io::rest::mappers::{
    collect_parsed, format_date, parse_optional_date, with_field_rules,
};
use shared::{
    Child as SharedChild, ChildDetailsResponse, ChildListResponse, ChildOverview,
    ChildOverviewResponse, ChildResponse, CreateChildRequest, DeleteChildResponse,
    DeletionCheckResponse, UpdateChildRequest,
};

/// Mapper to convert between shared Child DTOs and domain Child models.
pub struct ChildMapper;

impl ChildMapper {
    pub fn to_dto(domain: DomainChild) -> SharedChild {
        SharedChild {
            id: domain.id,
            name: domain.name,
            date_of_birth: domain.date_of_birth.map(format_date),
        }
    }

    pub fn to_create_command(
        request: CreateChildRequest,
    ) -> Result<CreateChildCommand, ValidationErrors> {
        let mut parse_errors = ValidationErrors::new();
        let date_of_birth = collect_parsed(
            parse_optional_date("date_of_birth", request.date_of_birth.as_deref()),
            &mut parse_errors,
            None,
        );
        with_field_rules(
            CreateChildCommand {
                name: request.name,
                date_of_birth,
            },
            parse_errors,
        )
    }

    pub fn to_update_command(
        request: UpdateChildRequest,
    ) -> Result<UpdateChildCommand, ValidationErrors> {
        let mut parse_errors = ValidationErrors::new();
        let date_of_birth = collect_parsed(
            parse_optional_date("date_of_birth", request.date_of_birth.as_deref()),
            &mut parse_errors,
            None,
        );
        with_field_rules(
            UpdateChildCommand {
                name: request.name,
                date_of_birth,
            },
            parse_errors,
        )
    }

    pub fn to_child_response(domain: DomainChild, success_message: &str) -> ChildResponse {
        ChildResponse {
            child: Self::to_dto(domain),
            success_message: success_message.to_string(),
        }
    }

    pub fn to_child_list_dto(domain_children: Vec<DomainChild>) -> ChildListResponse {
        ChildListResponse {
            children: domain_children.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_overview_dto(loaded: Vec<ChildWithSymptoms>) -> ChildOverviewResponse {
        ChildOverviewResponse {
            children: loaded
                .into_iter()
                .map(|entry| ChildOverview {
                    child: Self::to_dto(entry.child),
                    symptoms: entry.symptoms.into_iter().map(SymptomMapper::to_dto).collect(),
                })
                .collect(),
        }
    }

    pub fn to_details_dto(profile: ChildProfile) -> ChildDetailsResponse {
        ChildDetailsResponse {
            child: Self::to_dto(profile.child),
            symptoms: profile.symptoms.into_iter().map(SymptomMapper::to_dto).collect(),
            notes: profile.notes.into_iter().map(RecordMapper::note_to_dto).collect(),
            milestones: profile
                .milestones
                .into_iter()
                .map(RecordMapper::milestone_to_dto)
                .collect(),
            appointments: profile
                .appointments
                .into_iter()
                .map(RecordMapper::appointment_to_dto)
                .collect(),
            caregivers: profile
                .caregivers
                .into_iter()
                .map(CaregiverMapper::to_dto)
                .collect(),
        }
    }

    pub fn to_deletion_check_dto(check: DeletionCheck) -> DeletionCheckResponse {
        DeletionCheckResponse {
            can_delete: check.can_delete(),
            symptom_count: check.symptom_count,
            child: Self::to_dto(check.child),
            block_reason: check.block_reason,
        }
    }

    pub fn to_delete_response(deleted: DomainChild, success_message: &str) -> DeleteChildResponse {
        DeleteChildResponse {
            child_id: deleted.id,
            success_message: success_message.to_string(),
        }
    }
}
