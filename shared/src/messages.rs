//! API message types for communication between the UI and the backend
//!
//! The backend is an external deployment (a JSON REST API); every type here
//! mirrors its camelCase wire format. Unknown fields in responses are
//! ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate counts shown in the admin summary panel.
///
/// Counts the backend omits deserialize to 0, so a bare `{}` payload renders
/// as three zeros rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryStats {
    pub projects_count: u64,
    pub messages_count: u64,
    pub certificates_count: u64,
}

/// A showcased project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Backend record id (opaque string)
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Cover image: an absolute URL, a data URI, or a site-relative path
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub repo_url: Option<String>,

    #[serde(default)]
    pub live_url: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A certificate entry shown under the project showcase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub issuer: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub issued_on: Option<DateTime<Utc>>,
}

/// Contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Backend acknowledgement for a stored contact message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageReceipt {
    pub success: bool,
    pub id: Option<String>,
}

/// Credentials for the admin login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Bearer token issued by `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Authenticated admin identity from `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,

    pub email: String,

    #[serde(default)]
    pub name: Option<String>,
}

/// Result of seeding demo projects into a deployment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedReport {
    pub created: u64,
    pub skipped: u64,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_full_payload() {
        let stats: SummaryStats = serde_json::from_str(
            r#"{"projectsCount": 5, "messagesCount": 0, "certificatesCount": 12}"#,
        )
        .unwrap();
        assert_eq!(stats.projects_count, 5);
        assert_eq!(stats.messages_count, 0);
        assert_eq!(stats.certificates_count, 12);
    }

    #[test]
    fn summary_missing_fields_default_to_zero() {
        let stats: SummaryStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, SummaryStats::default());

        let stats: SummaryStats =
            serde_json::from_str(r#"{"messagesCount": 3}"#).unwrap();
        assert_eq!(stats.projects_count, 0);
        assert_eq!(stats.messages_count, 3);
        assert_eq!(stats.certificates_count, 0);
    }

    #[test]
    fn summary_ignores_unknown_fields() {
        let stats: SummaryStats = serde_json::from_str(
            r#"{"projectsCount": 2, "viewsCount": 900, "updatedAt": "2026-01-01"}"#,
        )
        .unwrap();
        assert_eq!(stats.projects_count, 2);
    }

    #[test]
    fn summary_round_trips_camel_case() {
        let json = serde_json::to_value(SummaryStats {
            projects_count: 1,
            messages_count: 2,
            certificates_count: 3,
        })
        .unwrap();
        assert_eq!(json["projectsCount"], 1);
        assert_eq!(json["messagesCount"], 2);
        assert_eq!(json["certificatesCount"], 3);
    }

    #[test]
    fn project_tolerates_sparse_records() {
        let project: Project =
            serde_json::from_str(r#"{"id": "p1", "title": "Folio"}"#).unwrap();
        assert_eq!(project.id, "p1");
        assert!(project.image.is_empty());
        assert!(project.tags.is_empty());
        assert!(project.repo_url.is_none());
    }

    #[test]
    fn project_reads_camel_case_links() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": "p2",
                "title": "Tracker",
                "image": "https://cdn.example.com/tracker.png",
                "repoUrl": "https://github.com/example/tracker",
                "liveUrl": "https://tracker.example.com"
            }"#,
        )
        .unwrap();
        assert_eq!(
            project.repo_url.as_deref(),
            Some("https://github.com/example/tracker")
        );
        assert_eq!(project.live_url.as_deref(), Some("https://tracker.example.com"));
    }

    #[test]
    fn seed_report_defaults() {
        let report: SeedReport = serde_json::from_str(r#"{"created": 4}"#).unwrap();
        assert_eq!(report.created, 4);
        assert_eq!(report.skipped, 0);
        assert!(report.message.is_none());
    }
}
