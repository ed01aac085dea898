//! Birth input record and its validator.
//!
//! [`BirthInput::from_json`] checks presence and coarse type of the five
//! fields and nothing else: date/time syntax and coordinate bounds are left
//! to the chart provider.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const FIELD_REQUIRED: &str = "field required";
const NOT_A_STRING: &str = "input should be a valid string";
const NOT_A_NUMBER: &str = "input should be a valid number";
const EMPTY_STRING: &str = "string should have at least 1 character";
const NOT_AN_OBJECT: &str = "input should be a JSON object";

/// Birth data for one chart request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub name: String,
    /// Expected `YYYY-MM-DD`.
    pub date: String,
    /// Expected `HH:MM`.
    pub time: String,
    pub lat: f64,
    pub lng: f64,
}

/// Per-field validation failures, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    /// Failure that applies to the body as a whole rather than one field.
    pub fn body(reason: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::default();
        errors.add("body", reason);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.0.insert(field.into(), reason.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, reason)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl BirthInput {
    /// Validates an arbitrary JSON value into a `BirthInput`.
    ///
    /// Unknown fields are ignored. Every failing field is reported, not
    /// just the first one.
    pub fn from_json(value: &Value) -> Result<Self, ValidationErrors> {
        let Some(obj) = value.as_object() else {
            return Err(ValidationErrors::body(NOT_AN_OBJECT));
        };

        let mut errors = ValidationErrors::default();
        let name = required_str(obj, "name", &mut errors);
        let date = required_str(obj, "date", &mut errors);
        let time = required_str(obj, "time", &mut errors);
        let lat = required_f64(obj, "lat", &mut errors);
        let lng = required_f64(obj, "lng", &mut errors);

        if let Some(name) = &name {
            if name.is_empty() {
                errors.add("name", EMPTY_STRING);
            }
        }

        match (name, date, time, lat, lng) {
            (Some(name), Some(date), Some(time), Some(lat), Some(lng)) if errors.is_empty() => {
                Ok(BirthInput {
                    name,
                    date,
                    time,
                    lat,
                    lng,
                })
            }
            _ => Err(errors),
        }
    }
}

fn required_str(
    obj: &Map<String, Value>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match obj.get(field) {
        None => {
            errors.add(field, FIELD_REQUIRED);
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.add(field, NOT_A_STRING);
            None
        }
    }
}

fn required_f64(
    obj: &Map<String, Value>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<f64> {
    match obj.get(field) {
        None => {
            errors.add(field, FIELD_REQUIRED);
            None
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) => Some(v),
            None => {
                errors.add(field, NOT_A_NUMBER);
                None
            }
        },
        Some(_) => {
            errors.add(field, NOT_A_NUMBER);
            None
        }
    }
}
