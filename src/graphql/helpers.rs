use async_graphql::ID;

use crate::{errors::AppResult, models::dto::request::validate_identifier};

/// Helper to turn a GraphQL ID into a validated upstream identifier
pub fn parse_id(label: &str, id: &ID) -> AppResult<String> {
    validate_identifier(label, id.as_str())?;
    Ok(id.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("quiz id", &ID::from("Q1")).unwrap(), "Q1");
        assert!(matches!(
            parse_id("quiz id", &ID::from("Q 1")),
            Err(AppError::ValidationError(_))
        ));
    }
}
