use anyhow::{anyhow, bail, Context};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Body of every failed request. The message is fixed per endpoint and never
/// carries the underlying cause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new<S: ToString>(error: S) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertResponse {
    pub message: String,
    #[serde(rename = "insertId")]
    pub insert_id: u64,
}

impl InsertResponse {
    pub fn new<S: ToString>(message: S, insert_id: u64) -> Self {
        Self {
            message: message.to_string(),
            insert_id,
        }
    }
}

/// A posted form field. Any JSON scalar is taken as-is and only interpreted
/// when the row is built, so a value of the wrong type fails like any other
/// insert error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Other(serde_json::Value),
}

impl FieldValue {
    /// Text form of the value, the way MySQL stores a scalar in a text column.
    pub fn to_text(&self) -> anyhow::Result<String> {
        match self {
            FieldValue::Text(s) => Ok(s.clone()),
            FieldValue::Number(n) => Ok(n.to_string()),
            FieldValue::Bool(b) => Ok(if *b { "1" } else { "0" }.to_string()),
            FieldValue::Other(v) => bail!("not a scalar: {}", v),
        }
    }

    /// Integer identity. Numeric strings are accepted since `<select>` values
    /// arrive as text; fractional numbers round like MySQL's integer cast.
    pub fn to_id(&self) -> anyhow::Result<i32> {
        let id = match self {
            FieldValue::Text(s) => s
                .trim()
                .parse::<i64>()
                .with_context(|| format!("bad id '{}'", s))?,
            FieldValue::Number(n) => match n.as_i64() {
                Some(id) => id,
                None => n
                    .as_f64()
                    .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                    .map(|f| f.round() as i64)
                    .ok_or_else(|| anyhow!("bad id {}", n))?,
            },
            FieldValue::Bool(b) => i64::from(*b),
            FieldValue::Other(v) => bail!("not a scalar: {}", v),
        };
        i32::try_from(id).map_err(|_| anyhow!("id {} out of range", id))
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n.into())
    }
}

/// Required field of a posted form, as text.
pub fn required_text(field: Option<FieldValue>, name: &str) -> anyhow::Result<String> {
    field
        .with_context(|| format!("missing field '{}'", name))?
        .to_text()
        .with_context(|| format!("Wrong format on '{}'", name))
}

/// Required field of a posted form, as an integer identity.
pub fn required_id(field: Option<FieldValue>, name: &str) -> anyhow::Result<i32> {
    field
        .with_context(|| format!("missing field '{}'", name))?
        .to_id()
        .with_context(|| format!("Wrong format on '{}'", name))
}
