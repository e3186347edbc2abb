//! Student Record Types
//!
//! Records as the API sends them, and the draft held by the form pages.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Backend-assigned identifier; numeric or text
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

/// Student record from the API
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
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

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Editable input of the add/edit forms
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Branch,
    Mail,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Branch, Field::Mail];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Branch => "Branch",
            Field::Mail => "Mail",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Enter student name",
            Field::Branch => "Enter student branch",
            Field::Mail => "Enter student mail",
        }
    }

    /// Form control name, matching the JSON key
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Branch => "branch",
            Field::Mail => "mail",
        }
    }
}

/// Request body for create and update
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub branch: String,
    pub mail: String,
}

impl Draft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Branch => &self.branch,
            Field::Mail => &self.mail,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_api() {
        let record: StudentRecord =
            serde_json::from_str(r#"{"id":1,"name":"Ana","branch":"CS","mail":null}"#).unwrap();
        assert_eq!(record.id, Some(RecordId::Number(1)));
        assert_eq!(record.name, "Ana");
        assert_eq!(record.mail, "");
    }

    #[test]
    fn test_draft_from_record_drops_id() {
        let record = StudentRecord {
            id: Some(RecordId::Text("s-1".to_string())),
            name: "Ben".to_string(),
            branch: "EE".to_string(),
            mail: "ben@x.com".to_string(),
        };
        let body = serde_json::to_value(Draft::from(&record)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Ben", "branch": "EE", "mail": "ben@x.com"})
        );
    }

    #[test]
    fn test_draft_set() {
        let mut draft = Draft::default();
        for field in Field::ALL {
            draft.set(field, field.key().to_uppercase());
        }
        assert_eq!(draft.get(Field::Branch), "BRANCH");
        assert_eq!(draft.mail, "MAIL");
    }
}
