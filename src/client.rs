//! Typed REST client for the portfolio backend.
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] configured with a base URL and a
//! request timeout, and exposes one method per backend endpoint: contact
//! submission, the read-only portfolio content, chat with session semantics,
//! binary file downloads and the health check.
//!
//! Every method returns `Result<_, ApiError>`. A non-success status has its
//! body probed for the backend's `{"detail": "..."}` error shape, which is
//! what the message derivation in [`ApiError::display_message`] prefers.
//!
//! # Example
//!
//! ```rust,no_run
//! use folio::client::ApiClient;
//!
//! # async fn demo() -> Result<(), folio::error::ApiError> {
//! let client = ApiClient::new("http://localhost:8000/api")?;
//! let projects = client.projects().await?;
//! println!("{} projects", projects.len());
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ApiError, ErrorBody};
use crate::models::{
    AboutInfo, Acknowledgement, Certification, ChatReply, ChatRequest, ChatSession, Contact,
    ContactReceipt, ContactRequest, GalleryImage, Health, PersonalInfo, Project, SocialLinks,
    TechStack,
};

/// Configuration for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL up to and including the API prefix, e.g.
    /// `http://localhost:8000/api`. A trailing slash is tolerated.
    pub base_url: String,

    /// Per-request timeout applied by the underlying HTTP client.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration with the default 10 second timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// A downloaded file with its passthrough metadata.
#[derive(Debug, Clone)]
pub struct Download {
    pub bytes: Vec<u8>,
    /// `Content-Type` as sent by the server.
    pub content_type: Option<String>,
    /// Filename recovered from `Content-Disposition`, when present.
    pub filename: Option<String>,
}

/// Client for the portfolio backend's REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Creates a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submits the contact form.
    pub async fn submit_contact(
        &self,
        contact: &ContactRequest,
    ) -> Result<ContactReceipt, ApiError> {
        self.post_json("/contact/", contact).await
    }

    /// Lists stored contact submissions, newest first.
    pub async fn contacts(&self) -> Result<Vec<Contact>, ApiError> {
        self.get_json("/contact/").await
    }

    /// Fetches all projects.
    pub async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/portfolio/projects").await
    }

    /// Fetches all certifications.
    pub async fn certifications(&self) -> Result<Vec<Certification>, ApiError> {
        self.get_json("/portfolio/certifications").await
    }

    /// Fetches the grouped tech stack.
    pub async fn tech_stack(&self) -> Result<TechStack, ApiError> {
        self.get_json("/portfolio/tech-stack").await
    }

    /// Fetches the "about" section content.
    pub async fn about(&self) -> Result<AboutInfo, ApiError> {
        self.get_json("/portfolio/about").await
    }

    /// Fetches the hero/header identity block.
    pub async fn personal_info(&self) -> Result<PersonalInfo, ApiError> {
        self.get_json("/portfolio/personal-info").await
    }

    /// Fetches the social profile links.
    pub async fn social_links(&self) -> Result<SocialLinks, ApiError> {
        self.get_json("/portfolio/social-links").await
    }

    /// Fetches the gallery images.
    pub async fn gallery(&self) -> Result<Vec<GalleryImage>, ApiError> {
        self.get_json("/portfolio/gallery").await
    }

    /// Sends a chat message.
    ///
    /// With `session_id = None` the server opens a new session and echoes
    /// its id in the reply; pass that id back to continue the conversation.
    pub async fn send_chat(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<ChatReply, ApiError> {
        let request = ChatRequest {
            message: message.to_string(),
            session_id: session_id.map(str::to_string),
        };
        self.post_json("/chat/", &request).await
    }

    /// Fetches the stored exchanges for a chat session.
    pub async fn chat_history(&self, session_id: &str) -> Result<Vec<ChatSession>, ApiError> {
        self.get_json(&format!("/chat/sessions/{session_id}")).await
    }

    /// Deletes a chat session and its history.
    pub async fn clear_chat_session(&self, session_id: &str) -> Result<Acknowledgement, ApiError> {
        let path = format!("/chat/sessions/{session_id}");
        let response = self.send(self.http.delete(self.endpoint(&path)), &path).await?;
        Self::decode(response).await
    }

    /// Downloads the resume.
    pub async fn download_resume(&self) -> Result<Download, ApiError> {
        self.download("/files/resume/download").await
    }

    /// Downloads a named static asset.
    pub async fn asset(&self, filename: &str) -> Result<Download, ApiError> {
        self.download(&format!("/files/assets/{filename}")).await
    }

    /// Checks service health.
    pub async fn health(&self) -> Result<Health, ApiError> {
        self.get_json("/health").await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.endpoint(path)), path).await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.http.post(self.endpoint(path)).json(body);
        let response = self.send(request, path).await?;
        Self::decode(response).await
    }

    async fn download(&self, path: &str) -> Result<Download, ApiError> {
        let response = self.send(self.http.get(self.endpoint(path)), path).await?;

        let header = |name| {
            response
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };
        let content_type = header(CONTENT_TYPE);
        let filename = header(CONTENT_DISPOSITION)
            .as_deref()
            .and_then(attachment_filename);

        let bytes = response
            .bytes()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?
            .to_vec();

        Ok(Download {
            bytes,
            content_type,
            filename,
        })
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<reqwest::Response, ApiError> {
        debug!(path, "sending request");
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Probe the body for the backend's structured error shape; anything
        // else (HTML error pages, empty bodies) leaves `detail` unset.
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        warn!(path, status = status.as_u16(), "request failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

/// Pulls the filename out of a `Content-Disposition` header value such as
/// `attachment; filename="resume-mourya-varma.pdf"`.
fn attachment_filename(header: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|part| {
        let value = part.strip_prefix("filename=")?;
        let value = value.trim_matches('"');
        (!value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_endpoint_joins_and_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/api/").expect("client");
        assert_eq!(
            client.endpoint("/portfolio/projects"),
            "http://localhost:8000/api/portfolio/projects"
        );
    }

    #[test]
    fn test_attachment_filename_quoted() {
        assert_eq!(
            attachment_filename(r#"attachment; filename="resume-mourya-varma.pdf""#),
            Some("resume-mourya-varma.pdf".to_string())
        );
    }

    #[test]
    fn test_attachment_filename_unquoted() {
        assert_eq!(
            attachment_filename("attachment; filename=resume.pdf"),
            Some("resume.pdf".to_string())
        );
    }

    #[test]
    fn test_attachment_filename_absent() {
        assert_eq!(attachment_filename("inline"), None);
        assert_eq!(attachment_filename(r#"attachment; filename="""#), None);
    }
}
