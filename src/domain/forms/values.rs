//! Submitted form values.

use std::collections::HashMap;

/// Submitted field values, each field holding one or more strings in
/// submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(HashMap<String, Vec<String>>);

impl FormValues {
    /// Creates an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut values = Self::new();
        for (key, value) in url::form_urlencoded::parse(body) {
            values.add(key.into_owned(), value.into_owned());
        }
        values
    }

    /// Appends a value for a field.
    pub fn add(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(value.into());
    }

    /// Replaces all values of a field with a single value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), vec![value.into()]);
    }

    /// First submitted value of a field, or "" if absent.
    pub fn get(&self, field: &str) -> &str {
        self.0
            .get(field)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All submitted values of a field.
    pub fn get_all(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (key, value) in iter {
            values.add(key, value);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_urlencoded_body() {
        let values = FormValues::from_urlencoded(b"title=O+snail&content=Climb%0AMount+Fuji&expires=7");
        assert_eq!(values.get("title"), "O snail");
        assert_eq!(values.get("content"), "Climb\nMount Fuji");
        assert_eq!(values.get("expires"), "7");
    }

    #[test]
    fn keeps_repeated_fields_in_order() {
        let values = FormValues::from_urlencoded(b"tag=a&tag=b&tag=c");
        assert_eq!(values.get("tag"), "a");
        assert_eq!(values.get_all("tag"), ["a", "b", "c"]);
    }

    #[test]
    fn missing_field_reads_as_empty() {
        let values = FormValues::new();
        assert_eq!(values.get("name"), "");
        assert!(values.get_all("name").is_empty());
    }

    #[test]
    fn set_replaces_previous_values() {
        let mut values: FormValues = [("expires", "1"), ("expires", "7")].into_iter().collect();
        values.set("expires", "365");
        assert_eq!(values.get_all("expires"), ["365"]);
    }
}
