//! Prompt construction for content generation

/// Builds the fixed-template instruction for a post about `topic` written
/// in `tone`. The tone is expected to be normalized by the caller.
#[must_use]
pub fn build_prompt(topic: &str, tone: &str) -> String {
    format!(
        "Write a complete blog post about \"{topic}\" in a {tone} tone. \
         Make it natural, well-structured, and easy to follow. \
         Include a brief introduction, clear sections, and a short conclusion."
    )
}
