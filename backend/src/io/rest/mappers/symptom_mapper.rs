use chrono::NaiveDateTime;

use crate::domain::commands::symptom::EditSymptomCommand;
use crate::domain::models::Symptom as DomainSymptom;
use crate::domain::validation::ValidationErrors;
use crate::io::rest::mappers::{
    collect_parsed, format_datetime, non_blank, parse_datetime, with_field_rules,
};
use shared::{LogSymptomRequest, Symptom as SharedSymptom, UpdateSymptomRequest};

pub struct SymptomMapper;

impl SymptomMapper {
    pub fn to_dto(domain: DomainSymptom) -> SharedSymptom {
        SharedSymptom {
            id: domain.id,
            child_id: domain.child_id,
            name: domain.name,
            description: domain.description,
            date_logged: format_datetime(domain.date_logged),
        }
    }

    /// Build a new symptom; `now` is used when no log time was submitted
    pub fn to_domain(
        request: LogSymptomRequest,
        now: NaiveDateTime,
    ) -> Result<DomainSymptom, ValidationErrors> {
        let mut parse_errors = ValidationErrors::new();
        let date_logged = match request.date_logged.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => {
                collect_parsed(parse_datetime("date_logged", value), &mut parse_errors, now)
            }
            _ => now,
        };

        with_field_rules(
            DomainSymptom::new(
                request.child_id,
                request.name.trim(),
                non_blank(request.description),
                date_logged,
            ),
            parse_errors,
        )
    }

    pub fn to_edit_command(
        request: UpdateSymptomRequest,
    ) -> Result<EditSymptomCommand, ValidationErrors> {
        let mut parse_errors = ValidationErrors::new();
        let date_logged = collect_parsed(
            parse_datetime("date_logged", &request.date_logged),
            &mut parse_errors,
            NaiveDateTime::default(),
        );

        with_field_rules(
            EditSymptomCommand {
                name: request.name,
                description: non_blank(request.description),
                date_logged,
            },
            parse_errors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_missing_date_logged_defaults_to_now() {
        let symptom = SymptomMapper::to_domain(
            LogSymptomRequest {
                child_id: 2,
                name: " Fever ".to_string(),
                description: Some(String::new()),
                date_logged: None,
            },
            noon(),
        )
        .unwrap();

        assert_eq!(symptom.child_id, 2);
        assert_eq!(symptom.name, "Fever");
        assert!(symptom.description.is_none());
        assert_eq!(symptom.date_logged, noon());
    }

    #[test]
    fn test_submitted_date_logged_is_used() {
        let symptom = SymptomMapper::to_domain(
            LogSymptomRequest {
                child_id: 2,
                name: "Cough".to_string(),
                description: None,
                date_logged: Some("2025-07-18T08:15".to_string()),
            },
            noon(),
        )
        .unwrap();

        assert_eq!(SymptomMapper::to_dto(symptom).date_logged, "2025-07-18T08:15:00");
    }

    #[test]
    fn test_edit_requires_valid_date() {
        let result = SymptomMapper::to_edit_command(UpdateSymptomRequest {
            name: "Cough".to_string(),
            description: None,
            date_logged: "not a date".to_string(),
        });

        assert_eq!(result.unwrap_err().messages_for("date_logged").len(), 1);
    }

    #[test]
    fn test_log_reports_every_failing_field() {
        let errors = SymptomMapper::to_domain(
            LogSymptomRequest {
                child_id: 2,
                name: String::new(),
                description: Some("x".repeat(501)),
                date_logged: Some("tuesday".to_string()),
            },
            noon(),
        )
        .unwrap_err();

        assert_eq!(errors.messages_for("name"), vec!["Symptom name is required."]);
        assert_eq!(errors.messages_for("description").len(), 1);
        assert_eq!(errors.messages_for("date_logged").len(), 1);
    }
}
