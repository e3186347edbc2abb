//! Student Records
//!
//! The single domain entity exchanged with the backend, plus the draft
//! that create and edit forms hold before submission.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend-assigned record identifier
///
/// The backend owns the identifier space. Numeric ids are kept as numbers so
/// they serialize back exactly as they arrived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Only the canonical spelling of an integer parses as a number, so text
/// ids such as `"007"` or `"+5"` keep their exact form.
impl FromStr for RecordId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => RecordId::Number(n),
            _ => RecordId::Text(s.to_string()),
        })
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

/// A student record as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub branch: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mail: String,
}

impl StudentRecord {
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        branch: impl Into<String>,
        mail: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            branch: branch.into(),
            mail: mail.into(),
        }
    }
}

// The backend stores nullable columns; a null renders as a blank cell.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One of the three editable fields of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Branch,
    Mail,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Branch, Field::Mail];

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Branch => "Branch",
            Field::Mail => "Mail",
        }
    }
}

/// Locally held copy of a record being edited
///
/// Serializes to the request body of both `POST /student` and
/// `PUT /student/:id`. Never carries an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub branch: String,
    pub mail: String,
}

impl Draft {
    pub fn new(
        name: impl Into<String>,
        branch: impl Into<String>,
        mail: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            branch: branch.into(),
            mail: mail.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Branch => &self.branch,
            Field::Mail => &self.mail,
        }
    }

    /// Replace one field, leaving the other two untouched
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Branch => self.branch = value,
            Field::Mail => self.mail = value,
        }
    }
}

impl From<&StudentRecord> for Draft {
    fn from(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
            branch: record.branch.clone(),
            mail: record.mail.clone(),
        }
    }
}
