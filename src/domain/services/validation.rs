#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;

/// Characters that disqualify an answer outright, alongside decimal digits.
/// The scoring model works on prose; short or symbol-laden input produces
/// garbage scores, so it never leaves the client.
const FORBIDDEN_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};:\"\\|<>?/~`";

const MIN_WORD_COUNT: usize = 5;

pub struct AnswerValidator {}

impl AnswerValidator {
    /// Pure predicate gating both submission and the input widget's enabled
    /// state, so the two can never disagree.
    pub fn is_valid(text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        if text
            .chars()
            .any(|c| return c.is_ascii_digit() || FORBIDDEN_SYMBOLS.contains(c))
        {
            return false;
        }

        if text.split_whitespace().count() < MIN_WORD_COUNT {
            return false;
        }

        return true;
    }
}
