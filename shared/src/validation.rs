//! Validation utilities for the Hazard Risk Monitor Platform

// ============================================================================
// Risk Data Validations
// ============================================================================

/// Validate a confidence value expressed as an integer percent
pub fn validate_confidence(confidence: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&confidence) {
        return Err("Confidence must be between 0 and 100");
    }
    Ok(())
}

/// Validate a 0-100 risk index as produced by the aggregation pipeline
pub fn validate_risk_index(index: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&index) {
        return Err("Risk index must be between 0 and 100");
    }
    Ok(())
}

/// Validate latitude is within the WGS84 range
pub fn validate_latitude(latitude: f64) -> Result<(), &'static str> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    Ok(())
}

/// Validate longitude is within the WGS84 range
pub fn validate_longitude(longitude: f64) -> Result<(), &'static str> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate a zone display name (non-empty, bounded length)
pub fn validate_zone_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Zone name cannot be empty");
    }
    if trimmed.len() > 100 {
        return Err("Zone name must be at most 100 characters");
    }
    Ok(())
}

/// Validate a zone identifier (non-empty, alphanumeric with dashes)
pub fn validate_zone_id(id: &str) -> Result<(), &'static str> {
    if id.is_empty() {
        return Err("Zone id cannot be empty");
    }
    if id.len() > 36 {
        return Err("Zone id must be at most 36 characters");
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err("Zone id must be alphanumeric");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

/// Validate a username (3-32 chars, lowercase alphanumeric plus separators)
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > 32 {
        return Err("Username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.')
    {
        return Err("Username must be lowercase alphanumeric");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Risk Data Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_confidence_valid() {
        assert!(validate_confidence(0).is_ok());
        assert!(validate_confidence(50).is_ok());
        assert!(validate_confidence(100).is_ok());
    }

    #[test]
    fn test_validate_confidence_invalid() {
        assert!(validate_confidence(-1).is_err());
        assert!(validate_confidence(101).is_err());
    }

    #[test]
    fn test_validate_risk_index() {
        assert!(validate_risk_index(0).is_ok());
        assert!(validate_risk_index(99).is_ok());
        assert!(validate_risk_index(-5).is_err());
        assert!(validate_risk_index(150).is_err());
    }

    #[test]
    fn test_validate_latitude() {
        assert!(validate_latitude(47.6062).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(90.1).is_err());
        assert!(validate_latitude(-91.0).is_err());
    }

    #[test]
    fn test_validate_longitude() {
        assert!(validate_longitude(-122.3321).is_ok());
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.5).is_err());
    }

    #[test]
    fn test_validate_zone_name() {
        assert!(validate_zone_name("Pacific Northwest").is_ok());
        assert!(validate_zone_name("").is_err());
        assert!(validate_zone_name("   ").is_err());
        assert!(validate_zone_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_zone_id() {
        assert!(validate_zone_id("1").is_ok());
        assert!(validate_zone_id("zone-42").is_ok());
        assert!(validate_zone_id("").is_err());
        assert!(validate_zone_id("bad id").is_err());
        assert!(validate_zone_id(&"9".repeat(37)).is_err());
    }

    // ========================================================================
    // General Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("admin@hazardmonitor.io").is_ok());
        assert!(validate_email("user.name@domain.co").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@domain").is_err());
        assert!(validate_email("@.").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("analyst_2").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("UPPER").is_err());
        assert!(validate_username("has space").is_err());
    }
}
