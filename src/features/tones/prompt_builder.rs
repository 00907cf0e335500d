//! Tone-aware prompt construction
//!
//! Builds the LLM prompt for one reminder from the user's chosen tone and
//! display name.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial release with 5 tones and a friendly default

/// Builder for constructing reminder generation prompts
///
/// # Example
///
/// ```ignore
/// let prompt = ReminderPrompt::new("funny")
///     .with_display_name(Some("Sam"))
///     .build();
/// ```
pub struct ReminderPrompt {
    tone: String,
    display_name: Option<String>,
}

impl ReminderPrompt {
    /// Create a new prompt builder for a given tone
    pub fn new(tone: &str) -> Self {
        Self {
            tone: tone.to_string(),
            display_name: None,
        }
    }

    /// Set the display name the reminder should address, if the account
    /// has one
    pub fn with_display_name(mut self, display_name: Option<&str>) -> Self {
        self.display_name = display_name.map(String::from);
        self
    }

    /// Build the final generation prompt
    pub fn build(self) -> String {
        let name = self.display_name.as_deref().unwrap_or("User");

        let mut prompt = format!(
            "You are a hydration reminder assistant. A user, whose display name is \
             \"{name}\", needs a concise and engaging SMS reminder to drink water."
        );

        prompt.push_str(&format!(
            "\n\nThe desired tone for the reminder is: \"{}\".\n\n\
             Please craft a reminder message with the following characteristics:\n\
             - Directly encourage drinking water.\n\
             - Be very short and suitable for an SMS message (ideally 1-2 short sentences, max 160 characters).\n\
             - Be creative and try to vary your responses if called multiple times for the same user/tone.\n\
             - Address the user by their display name if it makes sense for the tone and context.",
            self.tone
        ));

        let tone_directive = match self.tone.to_lowercase().as_str() {
            "kind" => {
                "For \"Kind\" tone: Be gentle, supportive, positive, and caring. Focus on well-being."
            }
            "funny" => {
                "For \"Funny\" tone: Use light-hearted humor, a witty observation, or a playful joke. \
                 Avoid complex puns. Keep it universally understandable."
            }
            "sarcastic" => "For \"Sarcastic\" tone: Be dryly witty or use playful irony.",
            "rude" => {
                "For \"Rude\" tone: Be playfully abrasive or mock-insulting to grab attention."
            }
            "crude" => "For \"Crude\" tone: Use direct, blunt, or slightly off-color humor.",
            _ => "For an unrecognized tone, default to a friendly and encouraging message.",
        };
        prompt.push_str("\n- ");
        prompt.push_str(tone_directive);

        prompt.push_str(
            "\n\nGenerate ONLY the reminder message text itself. \
             Do not add any preambles like \"Here's your message:\".",
        );
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_display_name() {
        let prompt = ReminderPrompt::new("kind")
            .with_display_name(Some("Sam"))
            .build();
        assert!(prompt.contains("\"Sam\""));
    }

    #[test]
    fn test_prompt_degrades_without_display_name() {
        let prompt = ReminderPrompt::new("kind").build();
        assert!(prompt.contains("\"User\""));
    }

    #[test]
    fn test_known_tone_directive() {
        let prompt = ReminderPrompt::new("Sarcastic").build();
        assert!(prompt.contains("playful irony"));
        assert!(prompt.contains("\"Sarcastic\""));
    }

    #[test]
    fn test_unknown_tone_gets_friendly_default() {
        let prompt = ReminderPrompt::new("operatic").build();
        assert!(prompt.contains("friendly and encouraging"));
    }

    #[test]
    fn test_prompt_requests_bare_message() {
        let prompt = ReminderPrompt::new("funny").build();
        assert!(prompt.contains("ONLY the reminder message text"));
    }
}
