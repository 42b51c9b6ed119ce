//! Conversions between the wire DTOs of the `shared` crate and domain types.
//! Dates are parsed here; a malformed date is reported as a field error
//! alongside any field rule the rest of the submission breaks.

pub mod caregiver_mapper;
pub mod child_mapper;
pub mod record_mapper;
pub mod symptom_mapper;

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::validation::{Validate, ValidationErrors};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const ACCEPTED_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationErrors> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        ValidationErrors::single(field, format!("'{}' is not a valid date (YYYY-MM-DD).", value))
    })
}

/// Parse an optional date; a blank value counts as absent
pub fn parse_optional_date(
    field: &str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, ValidationErrors> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => parse_date(field, v).map(Some),
        None => Ok(None),
    }
}

pub fn parse_datetime(field: &str, value: &str) -> Result<NaiveDateTime, ValidationErrors> {
    let trimmed = value.trim();
    ACCEPTED_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            ValidationErrors::single(
                field,
                format!("'{}' is not a valid date and time (YYYY-MM-DDTHH:MM).", value),
            )
        })
}

/// Keep a parsed value, or record its errors and use `fallback` in its place
pub fn collect_parsed<T>(
    parsed: Result<T, ValidationErrors>,
    errors: &mut ValidationErrors,
    fallback: T,
) -> T {
    parsed.unwrap_or_else(|e| {
        errors.merge(e);
        fallback
    })
}

/// Apply the field rules to a value built from parsed input and report
/// them together with the parse errors
pub fn with_field_rules<V: Validate>(
    value: V,
    parse_errors: ValidationErrors,
) -> Result<V, ValidationErrors> {
    let mut errors = value.validate().err().unwrap_or_default();
    errors.merge(parse_errors);
    errors.into_result().map(|()| value)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}

/// Blank optional text is stored as absent
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime_accepts_minutes_and_space_separator() {
        let expected = NaiveDate::from_ymd_opt(2025, 7, 20)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();

        assert_eq!(parse_datetime("date", "2025-07-20T14:30").unwrap(), expected);
        assert_eq!(parse_datetime("date", "2025-07-20T14:30:00").unwrap(), expected);
        assert_eq!(parse_datetime("date", "2025-07-20 14:30").unwrap(), expected);
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        let errors = parse_datetime("date_logged", "yesterday").unwrap_err();
        assert_eq!(errors.errors()[0].field, "date_logged");
    }

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(parse_optional_date("date_of_birth", None).unwrap(), None);
        assert_eq!(parse_optional_date("date_of_birth", Some("  ")).unwrap(), None);
        assert_eq!(
            parse_optional_date("date_of_birth", Some("2019-03-04")).unwrap(),
            NaiveDate::from_ymd_opt(2019, 3, 4)
        );
        assert!(parse_optional_date("date_of_birth", Some("04/03/2019")).is_err());
    }

    #[test]
    fn test_parse_errors_are_kept_with_rule_errors() {
        use crate::domain::commands::child::CreateChildCommand;

        let mut parse_errors = ValidationErrors::new();
        let date_of_birth = collect_parsed(
            parse_optional_date("date_of_birth", Some("soon")),
            &mut parse_errors,
            None,
        );
        assert_eq!(date_of_birth, None);

        let errors = with_field_rules(
            CreateChildCommand {
                name: String::new(),
                date_of_birth,
            },
            parse_errors,
        )
        .unwrap_err();

        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "date_of_birth"]);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some("Clinic".into())), Some("Clinic".to_string()));
        assert_eq!(non_blank(None), None);
    }
}
