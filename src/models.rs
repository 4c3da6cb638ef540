//! Wire models for the portfolio backend.
//!
//! Field names and casing follow the backend's JSON exactly; a few fields
//! arrive camelCased (`resumeUrl`, `currentLearning`, `dataTools`) and are
//! renamed rather than bending the Rust names to match.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload for submitting the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Server acknowledgement for a submitted contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactReceipt {
    pub success: bool,
    pub message: String,
    pub contact_id: String,
}

/// Triage state of a stored contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
    Read,
    Replied,
}

/// A stored contact submission.
#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub status: ContactStatus,
}

/// A portfolio project entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub challenges: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A certification entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub year: String,
    pub category: String,
    pub verified: bool,
    pub status: Option<String>,
    pub certificate_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A single technology with a proficiency level.
#[derive(Debug, Clone, Deserialize)]
pub struct TechItem {
    pub name: String,
    pub level: String,
    pub icon: Option<String>,
}

/// The tech stack, grouped the way the backend groups it.
#[derive(Debug, Clone, Deserialize)]
pub struct TechStack {
    pub backend: Vec<TechItem>,
    pub frontend: Vec<TechItem>,
    #[serde(rename = "dataTools")]
    pub data_tools: Vec<TechItem>,
    pub cloud: Vec<TechItem>,
    pub ai: Vec<TechItem>,
}

/// The "about" section content.
#[derive(Debug, Clone, Deserialize)]
pub struct AboutInfo {
    pub introduction: String,
    pub experience: String,
    #[serde(rename = "currentLearning")]
    pub current_learning: String,
    pub interests: Vec<String>,
}

/// Hero/header identity block.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub location: String,
    pub experience: String,
    #[serde(rename = "resumeUrl")]
    pub resume_url: String,
}

/// Social profile links.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

/// A gallery image.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    pub caption: String,
    pub category: String,
}

/// Payload for the chat endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<String>,
}

/// Reply from the chat endpoint; echoes the session the exchange belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub session_id: String,
}

/// A stored chat exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub session_id: String,
    pub user_message: String,
    pub ai_response: String,
    pub created_at: DateTime<Utc>,
}

/// Generic `{success, message}` acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

/// Service health report.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}
