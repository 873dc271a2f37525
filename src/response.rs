use serde_json::Value;

use crate::error::BotError;

/// Validate the top-level shape of an API response and return the homework
/// list. An empty list is valid and means "no new submissions".
pub fn check_response(response: &Value) -> Result<&Vec<Value>, BotError> {
    let map = response.as_object().ok_or(BotError::NotAnObject)?;
    let homeworks = map.get("homeworks").ok_or(BotError::MissingKey("homeworks"))?;
    homeworks.as_array().ok_or(BotError::HomeworksNotAList)
}

/// Optional server-side cutoff for the next poll window.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_response_returns_homework_list() {
        let resp = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 100,
        });
        let homeworks = check_response(&resp).unwrap();
        assert_eq!(homeworks.len(), 1);
    }

    #[test]
    fn empty_homework_list_is_not_an_error() {
        let resp = json!({"homeworks": [], "current_date": 100});
        let homeworks = check_response(&resp).unwrap();
        assert!(homeworks.is_empty());
    }

    #[test]
    fn non_object_response_is_a_type_error() {
        let resp = json!([{"homeworks": []}]);
        assert!(matches!(check_response(&resp), Err(BotError::NotAnObject)));
    }

    #[test]
    fn missing_homeworks_key_is_detected() {
        let resp = json!({"current_date": 100});
        assert!(matches!(
            check_response(&resp),
            Err(BotError::MissingKey("homeworks"))
        ));
    }

    #[test]
    fn homeworks_not_a_list_is_a_type_error() {
        let resp = json!({"homeworks": {"homework_name": "hw1"}});
        assert!(matches!(
            check_response(&resp),
            Err(BotError::HomeworksNotAList)
        ));
    }

    #[test]
    fn current_date_is_optional() {
        assert_eq!(current_date(&json!({"homeworks": []})), None);
        assert_eq!(
            current_date(&json!({"homeworks": [], "current_date": 100})),
            Some(100)
        );
    }
}
