const MAX_VISIBLE_LENGTH: usize = 100;

/// Sanitizes prompt text for safe logging. Uploaded contracts and user
/// questions flow through prompts, so only a bounded prefix is ever logged.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    if trimmed.chars().count() > MAX_VISIBLE_LENGTH {
        let prefix: String = trimmed.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{}... ({} chars total)", prefix, trimmed.chars().count())
    } else {
        trimmed.to_string()
    }
}
