//! Field extraction and validation for untyped JSON payloads
//!
//! Request bodies arrive as bare JSON objects; the wire contract reports
//! validation failures as a field → message map covering *all* bad fields,
//! not just the first. [`Fields`] walks an object collecting values and
//! errors together; [`Fields::finish`] yields the error map if anything
//! failed.
//!
//! Required extractors return a placeholder value when the field is bad so
//! extraction can continue; the placeholder is never observable because
//! `finish` errors out before a record is built from it.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Field name → error message, ordered for stable serialization
pub type ValidationErrors = BTreeMap<String, String>;

/// Error message for an unresolvable foreign key
pub fn unresolved_fk(id: i64) -> String {
    format!("Invalid pk \"{id}\" - object does not exist.")
}

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const BAD_STRING: &str = "A valid string is required.";
const BAD_NUMBER: &str = "A valid number is required.";
const BAD_INTEGER: &str = "A valid integer is required.";
const BAD_BOOL: &str = "Must be a valid boolean.";

/// Cursor over a JSON object that accumulates field errors
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> Fields<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self {
            map,
            errors: ValidationErrors::new(),
        }
    }

    /// Record an error for a field; the first error per field wins
    pub fn error(&mut self, name: &str, message: impl Into<String>) {
        self.errors.entry(name.to_string()).or_insert_with(|| message.into());
    }

    /// Whether a field already has an error recorded
    pub fn has_error(&self, name: &str) -> bool {
        self.errors.contains_key(name)
    }

    /// Required string field
    pub fn string(&mut self, name: &str) -> String {
        match self.map.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) => {
                self.error(name, NOT_NULL);
                String::new()
            }
            Some(_) => {
                self.error(name, BAD_STRING);
                String::new()
            }
            None => {
                self.error(name, REQUIRED);
                String::new()
            }
        }
    }

    /// Required numeric field; accepts any JSON number
    pub fn f64(&mut self, name: &str) -> f64 {
        match self.map.get(name) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
            Some(Value::Null) => {
                self.error(name, NOT_NULL);
                0.0
            }
            Some(_) => {
                self.error(name, BAD_NUMBER);
                0.0
            }
            None => {
                self.error(name, REQUIRED);
                0.0
            }
        }
    }

    /// Required integer field; a fractional number is an error
    pub fn i64(&mut self, name: &str) -> i64 {
        match self.map.get(name) {
            Some(Value::Number(n)) => match n.as_i64() {
                Some(v) => v,
                None => {
                    self.error(name, BAD_INTEGER);
                    0
                }
            },
            Some(Value::Null) => {
                self.error(name, NOT_NULL);
                0
            }
            Some(_) => {
                self.error(name, BAD_INTEGER);
                0
            }
            None => {
                self.error(name, REQUIRED);
                0
            }
        }
    }

    /// Required boolean field
    pub fn bool(&mut self, name: &str) -> bool {
        match self.map.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Null) => {
                self.error(name, NOT_NULL);
                false
            }
            Some(_) => {
                self.error(name, BAD_BOOL);
                false
            }
            None => {
                self.error(name, REQUIRED);
                false
            }
        }
    }

    /// String field that may be absent (for merge updates)
    pub fn opt_string(&mut self, name: &str) -> Option<String> {
        if !self.map.contains_key(name) {
            return None;
        }
        Some(self.string(name))
    }

    /// Numeric field that may be absent
    pub fn opt_f64(&mut self, name: &str) -> Option<f64> {
        if !self.map.contains_key(name) {
            return None;
        }
        Some(self.f64(name))
    }

    /// Integer field that may be absent
    pub fn opt_i64(&mut self, name: &str) -> Option<i64> {
        if !self.map.contains_key(name) {
            return None;
        }
        Some(self.i64(name))
    }

    /// Boolean field that may be absent
    pub fn opt_bool(&mut self, name: &str) -> Option<bool> {
        if !self.map.contains_key(name) {
            return None;
        }
        Some(self.bool(name))
    }

    /// Nullable string: absent → `None`, null → `Some(None)`
    pub fn nullable_string(&mut self, name: &str) -> Option<Option<String>> {
        match self.map.get(name) {
            None => None,
            Some(Value::Null) => Some(None),
            Some(Value::String(s)) => Some(Some(s.clone())),
            Some(_) => {
                self.error(name, BAD_STRING);
                None
            }
        }
    }

    /// Nullable integer: absent → `None`, null → `Some(None)`
    pub fn nullable_i64(&mut self, name: &str) -> Option<Option<i64>> {
        match self.map.get(name) {
            None => None,
            Some(Value::Null) => Some(None),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(v) => Some(Some(v)),
                None => {
                    self.error(name, BAD_INTEGER);
                    None
                }
            },
            Some(_) => {
                self.error(name, BAD_INTEGER);
                None
            }
        }
    }

    /// Succeeds only if no field recorded an error
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_required_fields_extract() {
        let payload = object(json!({
            "name": "Drinks",
            "price": 4.5,
            "amount": 12,
            "is_public": true
        }));
        let mut fields = Fields::new(&payload);

        assert_eq!(fields.string("name"), "Drinks");
        assert_eq!(fields.f64("price"), 4.5);
        assert_eq!(fields.i64("amount"), 12);
        assert!(fields.bool("is_public"));
        assert!(fields.finish().is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        let payload = object(json!({}));
        let mut fields = Fields::new(&payload);
        fields.string("name");

        let errors = fields.finish().unwrap_err();
        assert_eq!(errors["name"], "This field is required.");
    }

    #[test]
    fn test_wrong_type_collects_all_errors() {
        let payload = object(json!({"name": 5, "price": "cheap"}));
        let mut fields = Fields::new(&payload);
        fields.string("name");
        fields.f64("price");

        let errors = fields.finish().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["name"], "A valid string is required.");
        assert_eq!(errors["price"], "A valid number is required.");
    }

    #[test]
    fn test_null_is_rejected_for_required() {
        let payload = object(json!({"name": null}));
        let mut fields = Fields::new(&payload);
        fields.string("name");

        let errors = fields.finish().unwrap_err();
        assert_eq!(errors["name"], "This field may not be null.");
    }

    #[test]
    fn test_integer_rejects_fraction() {
        let payload = object(json!({"amount": 2.5}));
        let mut fields = Fields::new(&payload);
        fields.i64("amount");

        let errors = fields.finish().unwrap_err();
        assert_eq!(errors["amount"], "A valid integer is required.");
    }

    #[test]
    fn test_opt_distinguishes_absent_from_invalid() {
        let payload = object(json!({"unit": 9}));
        let mut fields = Fields::new(&payload);

        assert_eq!(fields.opt_string("name"), None);
        assert!(!fields.has_error("name"));

        fields.opt_string("unit");
        assert!(fields.has_error("unit"));
    }

    #[test]
    fn test_nullable_tristate() {
        let payload = object(json!({"parent_id": null, "other": 3}));
        let mut fields = Fields::new(&payload);

        assert_eq!(fields.nullable_i64("parent_id"), Some(None));
        assert_eq!(fields.nullable_i64("missing"), None);
        assert_eq!(fields.nullable_i64("other"), Some(Some(3)));
        assert!(fields.finish().is_ok());
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let payload = object(json!({}));
        let mut fields = Fields::new(&payload);
        fields.error("category_id", "This field is required.");
        fields.error("category_id", unresolved_fk(9));

        let errors = fields.finish().unwrap_err();
        assert_eq!(errors["category_id"], "This field is required.");
    }

    #[test]
    fn test_unresolved_fk_message() {
        assert_eq!(unresolved_fk(42), "Invalid pk \"42\" - object does not exist.");
    }
}
