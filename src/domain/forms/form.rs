//! Field validation over submitted form values.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{FormErrors, FormValues};

/// HTML5-style email address grammar.
pub static EMAIL_RX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Text free of NUL characters, which PostgreSQL text columns reject.
pub static NO_NUL_RX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\x00]*$").expect("NUL pattern is valid"));

pub const MSG_BLANK: &str = "This field cannot be blank";
pub const MSG_INVALID: &str = "This field is invalid";

/// Submitted values plus the errors found while checking them.
///
/// Every check runs independently and appends to the error mapping; nothing
/// short-circuits. Values that are blank after trimming are only ever
/// reported by [`Form::required`].
#[derive(Debug, Clone, Default)]
pub struct Form {
    values: FormValues,
    errors: FormErrors,
}

impl Form {
    /// Wraps submitted values with an empty error mapping.
    pub fn new(values: FormValues) -> Self {
        Self {
            values,
            errors: FormErrors::default(),
        }
    }

    /// A form with no values, for a fresh page.
    pub fn empty() -> Self {
        Self::default()
    }

    /// First submitted value of a field, or "".
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Records a message that no check produces, e.g. a storage-level rejection.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    /// Flags every field whose trimmed value is empty.
    pub fn required(&mut self, fields: &[&str]) {
        for field in fields {
            if is_blank(self.values.get(field)) {
                self.errors.add(*field, MSG_BLANK);
            }
        }
    }

    /// Flags a value longer than `max` characters.
    pub fn max_length(&mut self, field: &str, max: usize) {
        let value = self.values.get(field);
        if is_blank(value) {
            return;
        }
        if value.chars().count() > max {
            self.errors.add(
                field,
                format!("This field is too long (maximum is {} characters)", max),
            );
        }
    }

    /// Flags a value shorter than `min` characters.
    pub fn min_length(&mut self, field: &str, min: usize) {
        let value = self.values.get(field);
        if is_blank(value) {
            return;
        }
        if value.chars().count() < min {
            self.errors.add(
                field,
                format!("This field is too short (minimum is {} characters)", min),
            );
        }
    }

    /// Flags a value that equals none of `permitted`.
    pub fn permitted_values(&mut self, field: &str, permitted: &[&str]) {
        let value = self.values.get(field);
        if is_blank(value) {
            return;
        }
        if !permitted.iter().any(|option| *option == value) {
            self.errors.add(field, MSG_INVALID);
        }
    }

    /// Flags a value the pattern does not match.
    pub fn matches_pattern(&mut self, field: &str, pattern: &Regex) {
        let value = self.values.get(field);
        if is_blank(value) {
            return;
        }
        if !pattern.is_match(value) {
            self.errors.add(field, MSG_INVALID);
        }
    }

    /// True iff no check recorded an error.
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn form(pairs: &[(&str, &str)]) -> Form {
        Form::new(pairs.iter().copied().collect())
    }

    #[test]
    fn fresh_form_is_valid() {
        assert!(Form::empty().valid());
    }

    #[test]
    fn required_flags_missing_and_whitespace_fields() {
        let mut f = form(&[("title", "  \t\n"), ("content", "hello")]);
        f.required(&["title", "content", "expires"]);

        assert!(!f.valid());
        assert_eq!(f.errors().get("title"), MSG_BLANK);
        assert_eq!(f.errors().get("content"), "");
        assert_eq!(f.errors().get("expires"), MSG_BLANK);
    }

    #[test]
    fn max_length_counts_characters_not_bytes() {
        let mut f = form(&[("title", "ééééé")]);
        f.max_length("title", 5);
        assert!(f.valid());

        f.max_length("title", 4);
        assert_eq!(
            f.errors().get("title"),
            "This field is too long (maximum is 4 characters)"
        );
    }

    #[test]
    fn min_length_flags_short_password() {
        let mut f = form(&[("password", "pa$$word")]);
        f.min_length("password", 10);
        assert_eq!(
            f.errors().get("password"),
            "This field is too short (minimum is 10 characters)"
        );
    }

    #[test]
    fn permitted_values_rejects_unknown_option() {
        let mut f = form(&[("expires", "400")]);
        f.permitted_values("expires", &["365", "7", "1"]);
        assert_eq!(f.errors().get("expires"), MSG_INVALID);

        let mut f = form(&[("expires", "7")]);
        f.permitted_values("expires", &["365", "7", "1"]);
        assert!(f.valid());
    }

    #[test]
    fn email_pattern_accepts_and_rejects() {
        for ok in ["alice@example.com", "bob.smith+tag@mail.example.co.uk", "x@y"] {
            let mut f = form(&[("email", ok)]);
            f.matches_pattern("email", &EMAIL_RX);
            assert!(f.valid(), "{} should be accepted", ok);
        }
        for bad in ["alice", "alice@", "@example.com", "alice@-example.com", "a b@example.com"] {
            let mut f = form(&[("email", bad)]);
            f.matches_pattern("email", &EMAIL_RX);
            assert_eq!(f.errors().get("email"), MSG_INVALID, "{} should be rejected", bad);
        }
    }

    #[test]
    fn nul_pattern_rejects_embedded_nul_only() {
        let mut f = form(&[("title", "O snail"), ("content", "Climb\nMount Fuji\t!")]);
        f.matches_pattern("title", &NO_NUL_RX);
        f.matches_pattern("content", &NO_NUL_RX);
        assert!(f.valid());

        let mut f = form(&[("title", "O\0snail")]);
        f.matches_pattern("title", &NO_NUL_RX);
        assert_eq!(f.errors().get("title"), MSG_INVALID);
    }

    #[test]
    fn checks_do_not_short_circuit() {
        let mut f = form(&[("email", "not-an-email"), ("password", "short")]);
        f.required(&["name", "email", "password"]);
        f.matches_pattern("email", &EMAIL_RX);
        f.min_length("password", 10);

        assert_eq!(f.errors().len(), 3);
        assert_eq!(f.errors().get("name"), MSG_BLANK);
        assert_eq!(f.errors().get("email"), MSG_INVALID);
        assert!(!f.errors().get("password").is_empty());
    }

    #[test]
    fn add_error_marks_form_invalid() {
        let mut f = form(&[("email", "bob@example.com")]);
        f.add_error("email", "Address is already in use");
        assert!(!f.valid());
        assert_eq!(f.get("email"), "bob@example.com");
    }

    fn blank() -> impl Strategy<Value = String> {
        "[ \t\r\n]{0,8}"
    }

    proptest! {
        #[test]
        fn blank_values_only_fail_required(value in blank(), n in 1usize..200) {
            let mut f = form(&[("field", value.as_str())]);
            f.required(&["field"]);
            f.max_length("field", n);
            f.min_length("field", n);
            f.permitted_values("field", &["a", "b"]);
            f.matches_pattern("field", &EMAIL_RX);
            f.matches_pattern("field", &NO_NUL_RX);

            prop_assert_eq!(f.errors().get_all("field"), [MSG_BLANK.to_string()]);
        }

        #[test]
        fn max_length_flags_exactly_longer_values(value in "[a-zé]{1,40}", n in 0usize..40) {
            let mut f = form(&[("field", value.as_str())]);
            f.max_length("field", n);
            prop_assert_eq!(f.valid(), value.chars().count() <= n);
        }

        #[test]
        fn min_length_flags_exactly_shorter_values(value in "[a-zé]{1,40}", n in 0usize..40) {
            let mut f = form(&[("field", value.as_str())]);
            f.min_length("field", n);
            prop_assert_eq!(f.valid(), value.chars().count() >= n);
        }

        #[test]
        fn valid_iff_no_errors(value in ".{0,20}", n in 0usize..20) {
            let mut f = form(&[("field", value.as_str())]);
            f.required(&["field"]);
            f.max_length("field", n);
            prop_assert_eq!(f.valid(), f.errors().is_empty());
        }

        #[test]
        fn get_is_idempotent(value in ".{0,20}") {
            let f = form(&[("field", value.as_str())]);
            let first = f.get("field").to_string();
            prop_assert_eq!(f.get("field"), first.as_str());
            prop_assert_eq!(first, value);
        }
    }
}
