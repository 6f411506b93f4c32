/// Pure functions for formatting replies and error messages (Discord-agnostic)

/// Format a failure message with emoji
pub fn format_error(message: &str) -> String {
    format!("❌ {}", message)
}

/// Format a success message with emoji
pub fn format_success(message: &str) -> String {
    format!("✅ {}", message)
}

/// Usage help for the set command
pub fn build_set_usage() -> String {
    "Please provide a key and a value. Usage: `!set mykey myvalue`".to_string()
}

/// Usage help for the get command
pub fn build_get_usage() -> String {
    "Please provide a key. Usage: `!get mykey`".to_string()
}

/// Error message for a missing category
pub fn build_missing_category_error(category_name: &str) -> String {
    format!("Could not find the \"{}\" category", category_name)
}

/// Render a stored value for display: strings verbatim, anything else as
/// compact JSON
pub fn format_value_display(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error() {
        assert_eq!(format_error("Something failed"), "❌ Something failed");
    }

    #[test]
    fn test_format_success() {
        assert_eq!(format_success("It worked"), "✅ It worked");
    }

    #[test]
    fn test_build_set_usage() {
        let usage = build_set_usage();
        assert!(usage.contains("key"));
        assert!(usage.contains("!set mykey myvalue"));
    }

    #[test]
    fn test_build_get_usage() {
        let usage = build_get_usage();
        assert!(usage.contains("key"));
        assert!(usage.contains("!get mykey"));
    }

    #[test]
    fn test_build_missing_category_error() {
        let message = build_missing_category_error("════════ VOICE ════════");
        assert!(message.contains("════════ VOICE ════════"));
        assert!(message.contains("Could not find"));
    }

    #[test]
    fn test_format_value_display_string() {
        let value = serde_json::json!("plain text");
        assert_eq!(format_value_display(&value), "plain text");
    }

    #[test]
    fn test_format_value_display_object() {
        let value = serde_json::json!({"n": 1});
        assert_eq!(format_value_display(&value), r#"{"n":1}"#);
    }

    #[test]
    fn test_format_value_display_number() {
        let value = serde_json::json!(42);
        assert_eq!(format_value_display(&value), "42");
    }

    #[test]
    fn test_format_value_display_array() {
        let value = serde_json::json!([1, "two"]);
        assert_eq!(format_value_display(&value), r#"[1,"two"]"#);
    }

    #[test]
    fn test_format_value_display_null() {
        assert_eq!(format_value_display(&serde_json::Value::Null), "null");
    }
}
