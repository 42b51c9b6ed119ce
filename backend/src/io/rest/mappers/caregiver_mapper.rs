use crate::domain::commands::caregiver::CaregiverCommand;
use crate::domain::models::{Caregiver as DomainCaregiver, CaregiverChild as DomainLink};
use crate::io::rest::mappers::non_blank;
use shared::{
    Caregiver as SharedCaregiver, CaregiverChild as SharedLink, CaregiverListResponse,
    CaregiverRequest,
};

pub struct CaregiverMapper;

impl CaregiverMapper {
    pub fn to_dto(domain: DomainCaregiver) -> SharedCaregiver {
        SharedCaregiver {
            id: domain.id,
            full_name: domain.full_name,
        }
    }

    pub fn to_command(request: CaregiverRequest) -> CaregiverCommand {
        CaregiverCommand {
            full_name: non_blank(request.full_name.map(|name| name.trim().to_string())),
        }
    }

    pub fn to_list_dto(caregivers: Vec<DomainCaregiver>) -> CaregiverListResponse {
        CaregiverListResponse {
            caregivers: caregivers.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn link_to_dto(domain: DomainLink) -> SharedLink {
        SharedLink {
            id: domain.id,
            caregiver_id: domain.caregiver_id,
            child_id: domain.child_id,
        }
    }
}
