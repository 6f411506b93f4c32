/// Pure functions for generated room names (Discord-agnostic)

/// Suffix identifying rooms created by the bot
const ROOM_SUFFIX: &str = "'s Room";

/// Format a room name for a user
pub fn format_room_name(user_name: &str) -> String {
    format!("{}{}", user_name, ROOM_SUFFIX)
}

/// Check if a channel name looks like a generated room
pub fn is_generated_room_name(channel_name: &str) -> bool {
    channel_name.ends_with(ROOM_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_room_name() {
        assert_eq!(format_room_name("Alice"), "Alice's Room");
        assert_eq!(format_room_name("Bob123"), "Bob123's Room");
        assert_eq!(format_room_name("User Name"), "User Name's Room");
    }

    #[test]
    fn test_is_generated_room_name() {
        assert!(is_generated_room_name("Alice's Room"));
        assert!(is_generated_room_name("Bob123's Room"));

        assert!(!is_generated_room_name("General"));
        assert!(!is_generated_room_name("Alice Room"));
        assert!(!is_generated_room_name("Alice's"));
        assert!(!is_generated_room_name("➕ Create Channel"));
    }

    #[test]
    fn test_format_and_match_round_trip() {
        assert!(is_generated_room_name(&format_room_name("Alice")));
    }
}
