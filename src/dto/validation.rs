//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates that a team code has at least one non-whitespace character.
pub fn validate_team_code(code: &str) -> Result<(), ValidationError> {
    if code.trim().is_empty() {
        let mut err = ValidationError::new("team_code_empty");
        err.message = Some("Team code must not be empty".into());
        return Err(err);
    }

    Ok(())
}

/// Parses a submitted score as a signed integer.
///
/// # Examples
///
/// ```ignore
/// parse_score("42")   // Ok(42)
/// parse_score(" -7 ") // Ok(-7)
/// parse_score("4.5")  // Err - not an integer
/// parse_score("")     // Err - missing
/// ```
pub fn parse_score(raw: &str) -> Result<i64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        let mut err = ValidationError::new("score_missing");
        err.message = Some("Score is required".into());
        return Err(err);
    }

    raw.parse::<i64>().map_err(|_| {
        let mut err = ValidationError::new("score_not_integer");
        err.message = Some(format!("Score must be an integer (got `{raw}`)").into());
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_team_code() {
        assert!(validate_team_code("Team A").is_ok());
        assert!(validate_team_code(" x ").is_ok());
        assert!(validate_team_code("").is_err());
        assert!(validate_team_code(" \t ").is_err());
    }

    #[test]
    fn test_parse_score_valid() {
        assert_eq!(parse_score("42").unwrap(), 42);
        assert_eq!(parse_score(" -7 ").unwrap(), -7);
        assert_eq!(parse_score("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_score_invalid() {
        assert_eq!(parse_score("").unwrap_err().code, "score_missing");
        assert_eq!(parse_score("4.5").unwrap_err().code, "score_not_integer");
        assert_eq!(parse_score("ten").unwrap_err().code, "score_not_integer");
        assert!(parse_score("99999999999999999999").is_err()); // overflow
    }
}
