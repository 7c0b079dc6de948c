//! Shared vocabulary types for the campaign war-room workspace.
//!
//! These types are small, validated identifiers that cross crate boundaries:
//! team member identifiers, export formats, external service names and the
//! category/priority tags attached to extracted tasks. Keeping them here lets
//! the core and API crates agree on wire spellings without depending on each
//! other's internals.

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing vocabulary types from strings.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// The person identifier was not one of `person1`, `person2`, `person3`
    #[error("unknown person: {0}")]
    UnknownPerson(String),
    /// The export format was not one of `json`, `csv`, `markdown`/`md`
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),
    /// The external service was not one of the known stubs
    #[error("unsupported external service: {0}")]
    UnsupportedService(String),
}

/// Identifier for one of the three fixed team members.
///
/// The wire spelling is the lowercase form used throughout the JSON API
/// (`person1`, `person2`, `person3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum PersonId {
    #[serde(rename = "person1")]
    Person1,
    #[serde(rename = "person2")]
    Person2,
    #[serde(rename = "person3")]
    Person3,
}

impl PersonId {
    /// All team members, in document order.
    pub const ALL: [PersonId; 3] = [PersonId::Person1, PersonId::Person2, PersonId::Person3];

    /// Returns the wire spelling of this identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonId::Person1 => "person1",
            PersonId::Person2 => "person2",
            PersonId::Person3 => "person3",
        }
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "person1" => Ok(PersonId::Person1),
            "person2" => Ok(PersonId::Person2),
            "person3" => Ok(PersonId::Person3),
            other => Err(TypeError::UnknownPerson(other.to_string())),
        }
    }
}

/// Supported download formats for the export endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
}

impl ExportFormat {
    /// File extension used in the `Content-Disposition` filename.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Markdown => "md",
        }
    }

    /// MIME type for the `Content-Type` header.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Markdown => "text/markdown",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            other => Err(TypeError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// External productivity tools the export API can hand off to.
///
/// Integrations are stubs: the server returns preparation instructions and
/// never contacts the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExternalService {
    GoogleWorkspace,
    Asana,
    Slack,
}

impl FromStr for ExternalService {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google-workspace" => Ok(ExternalService::GoogleWorkspace),
            "asana" => Ok(ExternalService::Asana),
            "slack" => Ok(ExternalService::Slack),
            other => Err(TypeError::UnsupportedService(other.to_string())),
        }
    }
}

/// Keyword-derived category attached to an extracted task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Analytics,
    Social,
    Email,
    Content,
    Coordination,
    Advertising,
    General,
}

/// Priority derived from task text keywords and long time estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Normal,
    High,
}
