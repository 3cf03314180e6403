use crate::llm::prompts;

pub fn documentation_prompt(code: &str) -> String {
    format!("{}{}", prompts::DOCUMENTATION, code)
}

pub fn release_notes_prompt(code: &str) -> String {
    format!("{}{}", prompts::RELEASE_NOTES, code)
}

/// Canned request; deliberately independent of any input.
pub fn write_a_function_prompt() -> String {
    prompts::WRITE_A_FUNCTION.to_owned()
}

pub fn optimize_prompt(code: &str) -> String {
    format!("{}{}", prompts::OPTIMIZE, code)
}

pub fn optimize_security_prompt(code: &str) -> String {
    format!("{}{}", prompts::OPTIMIZE_SECURITY, code)
}
