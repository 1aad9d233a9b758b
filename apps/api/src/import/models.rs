use serde::{Deserialize, Serialize};

/// Fields derived by a single parser, before merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialFields {
    pub company: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub job_url: Option<String>,
}

/// Merged import result returned to callers.
/// Undetected fields are `None`, never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportFields {
    pub company: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub job_url: Option<String>,
    pub warnings: Vec<String>,
}

impl ImportFields {
    /// True when neither company nor role could be detected.
    pub fn is_unusable(&self) -> bool {
        self.company.is_none() && self.role.is_none()
    }
}
