//! Student roster models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub school_name: String,
    #[serde(default)]
    pub parent_name: String,
    #[serde(default)]
    pub parent_phone: String,
    #[serde(default)]
    pub notes: String,
}

/// Body of the add/update student requests; unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StudentForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl StudentForm {
    pub fn is_empty(&self) -> bool {
        *self == StudentForm::default()
    }
}
