//! Review API payload validation
//!
//! The review API is an external service, so every response is treated as
//! untrusted JSON and checked before any field is read.

use serde_json::Value;

use crate::domain::{Homework, HomeworkStatus};
use crate::error::{Result, SchemaError};

/// Keys every status response must carry, checked in this order
const REQUIRED_KEYS: [&str; 2] = ["homeworks", "current_date"];

/// Fields every homework record must carry, checked in this order
const REQUIRED_FIELDS: [&str; 2] = ["homework_name", "status"];

/// Validates a status response and returns its raw homework list
///
/// The records themselves are not inspected; see [`parse_homework`].
pub fn check_response(response: &Value) -> Result<&[Value]> {
    let object = response.as_object().ok_or(SchemaError::ResponseNotObject)?;

    for key in REQUIRED_KEYS {
        if !object.contains_key(key) {
            return Err(SchemaError::MissingKey(key));
        }
    }

    object["homeworks"]
        .as_array()
        .map(Vec::as_slice)
        .ok_or(SchemaError::HomeworksNotList)
}

/// Whether a record still carries the tracked status
///
/// Compared on the raw value before the record is parsed. Only an absent
/// `status` key matches an unset tracked status; a record that is not an
/// object, or whose status has any other value, counts as changed so that
/// [`parse_homework`] gets to reject it.
pub fn status_unchanged(homework: &Value, tracked: Option<HomeworkStatus>) -> bool {
    let Some(object) = homework.as_object() else {
        return false;
    };

    match (object.get("status"), tracked) {
        (None, None) => true,
        (Some(Value::String(status)), Some(tracked)) => status == tracked.as_str(),
        _ => false,
    }
}

/// Parses a single homework record into its typed form
pub fn parse_homework(homework: &Value) -> Result<Homework> {
    let object = homework.as_object().ok_or(SchemaError::HomeworkNotObject)?;

    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            return Err(SchemaError::MissingField(field));
        }
    }

    let status = &object["status"];
    let status = status
        .as_str()
        .and_then(|s| s.parse::<HomeworkStatus>().ok())
        .ok_or_else(|| SchemaError::UnknownStatus(display_value(status)))?;

    Ok(Homework {
        name: display_value(&object["homework_name"]),
        status,
    })
}

/// Builds the status-change notification text for a homework record
pub fn parse_status(homework: &Value) -> Result<String> {
    parse_homework(homework).map(|homework| homework.message())
}

/// Strings render bare, anything else as its JSON text
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_response_returns_homeworks() {
        let response = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1000
        });
        let homeworks = check_response(&response).unwrap();
        assert_eq!(homeworks.len(), 1);
        assert_eq!(homeworks[0]["homework_name"], "hw1");
    }

    #[test]
    fn test_check_response_accepts_empty_list() {
        let response = json!({"homeworks": [], "current_date": 1000});
        assert!(check_response(&response).unwrap().is_empty());
    }

    #[test]
    fn test_check_response_rejects_non_object() {
        for response in [json!([]), json!("homeworks"), json!(null), json!(42)] {
            assert_eq!(
                check_response(&response),
                Err(SchemaError::ResponseNotObject)
            );
        }
    }

    #[test]
    fn test_check_response_requires_keys() {
        let response = json!({"current_date": 1000});
        assert_eq!(
            check_response(&response),
            Err(SchemaError::MissingKey("homeworks"))
        );

        let response = json!({"homeworks": []});
        assert_eq!(
            check_response(&response),
            Err(SchemaError::MissingKey("current_date"))
        );
    }

    #[test]
    fn test_check_response_rejects_non_list_homeworks() {
        let response = json!({"homeworks": {"homework_name": "hw1"}, "current_date": 1000});
        assert_eq!(
            check_response(&response),
            Err(SchemaError::HomeworksNotList)
        );
    }

    #[test]
    fn test_missing_key_message_names_key() {
        assert_eq!(
            SchemaError::MissingKey("current_date").to_string(),
            "В ответе API отсутствует ключ: 'current_date'"
        );
    }

    #[test]
    fn test_parse_status_formats_each_verdict() {
        let cases = [
            (
                "approved",
                "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!",
            ),
            (
                "reviewing",
                "Изменился статус проверки работы \"hw1\". Работа взята на проверку ревьюером.",
            ),
            (
                "rejected",
                "Изменился статус проверки работы \"hw1\". Работа проверена: у ревьюера есть замечания.",
            ),
        ];

        for (status, expected) in cases {
            let homework = json!({"homework_name": "hw1", "status": status});
            assert_eq!(parse_status(&homework).unwrap(), expected);
        }
    }

    #[test]
    fn test_parse_status_rejects_non_object() {
        assert_eq!(
            parse_status(&json!(["hw1", "approved"])),
            Err(SchemaError::HomeworkNotObject)
        );
    }

    #[test]
    fn test_parse_status_requires_fields() {
        assert_eq!(
            parse_status(&json!({"status": "approved"})),
            Err(SchemaError::MissingField("homework_name"))
        );
        assert_eq!(
            parse_status(&json!({"homework_name": "hw1"})),
            Err(SchemaError::MissingField("status"))
        );
    }

    #[test]
    fn test_parse_status_rejects_unknown_status() {
        let err = parse_status(&json!({"homework_name": "hw1", "status": "graded"})).unwrap_err();
        assert_eq!(err, SchemaError::UnknownStatus("graded".to_string()));
        assert_eq!(
            err.to_string(),
            "Неожиданный статус домашней работы: graded"
        );

        let err = parse_status(&json!({"homework_name": "hw1", "status": null})).unwrap_err();
        assert_eq!(err, SchemaError::UnknownStatus("null".to_string()));
    }

    #[test]
    fn test_parse_homework_renders_non_string_name() {
        let homework = parse_homework(&json!({"homework_name": 42, "status": "reviewing"})).unwrap();
        assert_eq!(homework.name, "42");
        assert_eq!(homework.status, HomeworkStatus::Reviewing);
    }

    #[test]
    fn test_status_unchanged_matches_tracked_status() {
        let homework = json!({"homework_name": "hw1", "status": "approved"});
        assert!(status_unchanged(&homework, Some(HomeworkStatus::Approved)));
        assert!(!status_unchanged(&homework, Some(HomeworkStatus::Reviewing)));
        assert!(!status_unchanged(&homework, None));
    }

    #[test]
    fn test_status_unchanged_only_missing_key_matches_unset() {
        assert!(status_unchanged(&json!({"homework_name": "hw1"}), None));

        for homework in [
            json!({"homework_name": "hw1", "status": 5}),
            json!({"homework_name": "hw1", "status": null}),
            json!({"homework_name": "hw1", "status": "graded"}),
        ] {
            assert!(!status_unchanged(&homework, None), "{homework}");
        }
    }

    #[test]
    fn test_status_unchanged_rejects_non_object_records() {
        for homework in [json!("garbage"), json!(42), json!(null), json!(["approved"])] {
            assert!(!status_unchanged(&homework, None), "{homework}");
            assert!(
                !status_unchanged(&homework, Some(HomeworkStatus::Approved)),
                "{homework}"
            );
        }
    }
}
