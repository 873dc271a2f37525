use serde_json::Value;

use crate::error::BotError;

/// The verdict table is closed: the review service only ever reports these
/// three statuses.
fn verdict_for(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
        "reviewing" => Some("Работа взята на проверку ревьюером."),
        "rejected" => Some("Работа проверена: у ревьюера есть замечания."),
        _ => None,
    }
}

/// Turn one homework record into the notification text. Pure.
pub fn parse_status(homework: &Value) -> Result<String, BotError> {
    let name = match homework.get("homework_name") {
        None => return Err(BotError::MissingKey("homework_name")),
        Some(v) => v.as_str().ok_or(BotError::NotAString("homework_name"))?,
    };
    let status = match homework.get("status") {
        None => return Err(BotError::MissingKey("status")),
        Some(v) => v.as_str().ok_or(BotError::NotAString("status"))?,
    };

    let verdict = verdict_for(status)
        .ok_or_else(|| BotError::UnknownStatus(status.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn approved_status_maps_to_exact_verdict_text() {
        let hw = json!({"homework_name": "hw1", "status": "approved"});
        assert_eq!(
            parse_status(&hw).unwrap(),
            "Изменился статус проверки работы \"hw1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn reviewing_and_rejected_are_known_statuses() {
        let reviewing = json!({"homework_name": "hw2", "status": "reviewing"});
        let msg = parse_status(&reviewing).unwrap();
        assert!(msg.contains("hw2"));
        assert!(msg.ends_with("Работа взята на проверку ревьюером."));

        let rejected = json!({"homework_name": "hw3", "status": "rejected"});
        let msg = parse_status(&rejected).unwrap();
        assert!(msg.contains("hw3"));
        assert!(msg.ends_with("Работа проверена: у ревьюера есть замечания."));
    }

    #[test]
    fn missing_homework_name_is_detected() {
        let hw = json!({"status": "approved"});
        assert!(matches!(
            parse_status(&hw),
            Err(BotError::MissingKey("homework_name"))
        ));
    }

    #[test]
    fn missing_status_is_detected() {
        let hw = json!({"homework_name": "hw1"});
        assert!(matches!(
            parse_status(&hw),
            Err(BotError::MissingKey("status"))
        ));
    }

    #[test]
    fn unknown_status_is_a_lookup_error() {
        let hw = json!({"homework_name": "hw1", "status": "pending"});
        match parse_status(&hw) {
            Err(BotError::UnknownStatus(s)) => assert_eq!(s, "pending"),
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }

    #[test]
    fn non_string_status_is_a_type_error() {
        let hw = json!({"homework_name": "hw1", "status": 3});
        assert!(matches!(
            parse_status(&hw),
            Err(BotError::NotAString("status"))
        ));
    }
}
