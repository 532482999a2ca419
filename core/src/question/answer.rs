//! Submitted answers.
//!
//! Players post either a list of selected option ids or a single number.
//! The JSON payload is sorted into [`VisualAnswer`] once, at the boundary,
//! so evaluation never inspects raw JSON.

use serde_json::Value;
use std::collections::BTreeSet;

use super::AnswerError;

#[derive(Debug, Clone, PartialEq)]
pub enum VisualAnswer {
    /// Selected option ids (segments, cells, shapes, pairs, angle options).
    Selection(BTreeSet<String>),
    /// A numeric estimate, e.g. an angle in degrees.
    Numeric(f64),
    /// Anything else. Counts as an empty selection and is never a valid
    /// number.
    Empty,
}

impl VisualAnswer {
    pub fn selection_of<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Selection(ids.into_iter().map(Into::into).collect())
    }

    /// The selected ids; non-selection answers select nothing.
    pub fn selection(&self) -> BTreeSet<String> {
        match self {
            Self::Selection(ids) => ids.clone(),
            Self::Numeric(_) | Self::Empty => BTreeSet::new(),
        }
    }

    /// The numeric value, if this is a usable number.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Self::Numeric(n) if !n.is_nan() => Some(*n),
            _ => None,
        }
    }
}

/// A selection array with any non-string entry is rejected rather than
/// coerced, so it never grades as correct.
impl TryFrom<&Value> for VisualAnswer {
    type Error = AnswerError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => {
                let mut ids = BTreeSet::new();
                for (index, item) in items.iter().enumerate() {
                    match item {
                        Value::String(id) => {
                            ids.insert(id.clone());
                        }
                        other => {
                            return Err(AnswerError::NonStringEntry {
                                index,
                                found: json_kind(other),
                            })
                        }
                    }
                }
                Ok(Self::Selection(ids))
            }
            Value::Number(n) => Ok(n.as_f64().map(Self::Numeric).unwrap_or(Self::Empty)),
            _ => Ok(Self::Empty),
        }
    }
}

impl From<f64> for VisualAnswer {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<Vec<String>> for VisualAnswer {
    fn from(ids: Vec<String>) -> Self {
        Self::Selection(ids.into_iter().collect())
    }
}

impl From<&[&str]> for VisualAnswer {
    fn from(ids: &[&str]) -> Self {
        Self::selection_of(ids.iter().copied())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
