use validator::ValidationErrors;

/// Flatten `validator` errors into "field: message" strings for the response
/// envelope. Field order is stable (sorted) so clients and tests can rely on
/// it.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut messages = Vec::new();
    for (field, errs) in fields {
        for err in errs {
            let msg = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("invalid value for constraint '{}'", err.code));
            messages.push(format!("{}: {}", field, msg));
        }
    }
    messages
}

/// Parse a comma-separated id list query parameter ("1,2,3") into ids.
/// Blank segments are skipped; any non-numeric segment rejects the whole
/// input.
pub fn parse_id_list(raw: &str) -> Result<Vec<i64>, String> {
    let mut ids = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let id: i64 = part
            .parse()
            .map_err(|_| format!("'{}' is not a valid id", part))?;
        ids.push(id);
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
        name: String,
        #[validate(range(min = 1, message = "City is required"))]
        city_id: i64,
    }

    #[test]
    fn test_validation_messages_per_field() {
        let sample = Sample {
            name: "x".to_string(),
            city_id: 0,
        };
        let errors = sample.validate().unwrap_err();
        let messages = validation_messages(&errors);
        assert_eq!(
            messages,
            vec![
                "city_id: City is required".to_string(),
                "name: Name must be at least 2 characters".to_string(),
            ]
        );
    }

    #[test]
    fn test_validation_messages_empty_on_valid() {
        let sample = Sample {
            name: "Playa Blanca".to_string(),
            city_id: 5,
        };
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn test_parse_id_list() {
        assert_eq!(parse_id_list("1,2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_id_list(" 4 , 5 ").unwrap(), vec![4, 5]);
        assert_eq!(parse_id_list("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_id_list("7,,8").unwrap(), vec![7, 8]);
    }

    #[test]
    fn test_parse_id_list_rejects_garbage() {
        assert!(parse_id_list("1,two,3").is_err());
    }
}
