//! One-Shot Probes Against the Deployed Backend
//!
//! Rebuilt from the manual check scripts that used to live next to the site:
//! each command issues a single round of requests, prints what it saw, and
//! exits. No retries, no polling.

use std::time::Duration;

use anyhow::{bail, Context};
use clap::Subcommand;
use folio_shared::{AuthUser, LoginRequest, LoginResponse, Project, SeedReport, SummaryStats};
use reqwest::Client;
use serde::Serialize;

/// HTTP client for probe commands
pub struct ProbeClient {
    client: Client,
    base_url: String,
}

impl ProbeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// =============================================================================
// Seed
// =============================================================================

/// `POST /api/seed-projects` - fill a fresh deployment with demo projects
pub async fn seed(client: &ProbeClient) -> anyhow::Result<()> {
    let resp = client
        .client
        .post(client.url("/api/seed-projects"))
        .send()
        .await
        .context("seed request failed")?;

    if !resp.status().is_success() {
        bail!("seeding failed: HTTP {}", resp.status());
    }

    let report: SeedReport = resp
        .json()
        .await
        .context("seed response was not valid JSON")?;

    println!(
        "Seeded {} project(s), {} already present.",
        report.created, report.skipped
    );
    if let Some(message) = report.message {
        println!("{}", message);
    }
    Ok(())
}

// =============================================================================
// Auth
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Log in and read the authenticated profile back
    Check {
        /// Admin email
        #[arg(short, long, env = "FOLIO_ADMIN_EMAIL")]
        email: String,
        /// Admin password
        #[arg(short, long, env = "FOLIO_ADMIN_PASSWORD")]
        password: String,
    },
}

impl AuthCommands {
    pub async fn execute(&self, client: &ProbeClient) -> anyhow::Result<()> {
        match self {
            AuthCommands::Check { email, password } => {
                let resp = client
                    .client
                    .post(client.url("/api/auth/login"))
                    .json(&LoginRequest {
                        email: email.clone(),
                        password: password.clone(),
                    })
                    .send()
                    .await
                    .context("login request failed")?;

                if !resp.status().is_success() {
                    bail!("login rejected: HTTP {}", resp.status());
                }
                let LoginResponse { token } = resp
                    .json()
                    .await
                    .context("login response was not valid JSON")?;
                println!("Login OK, token is {} chars.", token.len());

                let resp = client
                    .client
                    .get(client.url("/api/auth/me"))
                    .bearer_auth(&token)
                    .send()
                    .await
                    .context("profile request failed")?;

                if !resp.status().is_success() {
                    bail!("token rejected: HTTP {}", resp.status());
                }
                let user: AuthUser = resp
                    .json()
                    .await
                    .context("profile response was not valid JSON")?;
                println!("Authenticated as {} ({})", user.email, user.id);
                Ok(())
            }
        }
    }
}

// =============================================================================
// Image audit
// =============================================================================

/// One project's image-field verdict
#[derive(Debug, Clone, Serialize)]
pub struct ImageAudit {
    pub id: String,
    pub title: String,
    pub image: String,
    pub valid: bool,
    pub reason: Option<String>,
}

/// Classify a project's image field.
///
/// Accepts absolute http(s) URLs, data URIs, and site-relative paths. One
/// binding holds the verdict.
pub fn audit_project(project: &Project) -> ImageAudit {
    let image = project.image.trim();

    let (valid, reason) = if image.is_empty() {
        (false, Some("image field is empty"))
    } else if image.starts_with("http://")
        || image.starts_with("https://")
        || image.starts_with("data:image/")
        || image.starts_with('/')
    {
        (true, None)
    } else {
        (false, Some("not a URL, data URI, or site-relative path"))
    };

    ImageAudit {
        id: project.id.clone(),
        title: project.title.clone(),
        image: image.to_string(),
        valid,
        reason: reason.map(str::to_string),
    }
}

/// `GET /api/projects`, auditing each record's image field
pub async fn verify_images(client: &ProbeClient, format: &str) -> anyhow::Result<()> {
    let resp = client
        .client
        .get(client.url("/api/projects"))
        .send()
        .await
        .context("projects request failed")?;

    if !resp.status().is_success() {
        bail!("projects fetch failed: HTTP {}", resp.status());
    }
    let projects: Vec<Project> = resp
        .json()
        .await
        .context("projects response was not valid JSON")?;

    let audits: Vec<ImageAudit> = projects.iter().map(audit_project).collect();
    let failed = audits.iter().filter(|audit| !audit.valid).count();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&audits)?);
    } else {
        println!("{:<28} {:<6} {}", "TITLE", "IMAGE", "DETAIL");
        println!("{}", "-".repeat(72));
        for audit in &audits {
            println!(
                "{:<28} {:<6} {}",
                truncate(&audit.title, 26),
                if audit.valid { "ok" } else { "BAD" },
                audit.reason.as_deref().unwrap_or(&audit.image),
            );
        }
        println!("{} project(s), {} with unusable images.", audits.len(), failed);
    }

    if failed > 0 {
        bail!("{} project(s) have unusable image fields", failed);
    }
    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

// =============================================================================
// Summary & health
// =============================================================================

/// `GET /api/admin/summary` - print the three aggregate counts
pub async fn summary(client: &ProbeClient, format: &str) -> anyhow::Result<()> {
    let resp = client
        .client
        .get(client.url("/api/admin/summary"))
        .send()
        .await
        .context("summary request failed")?;

    if !resp.status().is_success() {
        bail!("summary fetch failed: HTTP {}", resp.status());
    }
    let stats: SummaryStats = resp
        .json()
        .await
        .context("summary response was not valid JSON")?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{:<14} {}", "Projects", stats.projects_count);
        println!("{:<14} {}", "Messages", stats.messages_count);
        println!("{:<14} {}", "Certificates", stats.certificates_count);
        println!("As of {}", chrono::Utc::now().format("%Y-%m-%d %H:%M UTC"));
    }
    Ok(())
}

/// `GET /health` on the backend
pub async fn health(client: &ProbeClient) -> anyhow::Result<()> {
    let started = std::time::Instant::now();
    let resp = client
        .client
        .get(client.url("/health"))
        .send()
        .await
        .context("health request failed")?;
    let elapsed = started.elapsed();

    if resp.status().is_success() {
        println!("Backend healthy ({} ms).", elapsed.as_millis());
        Ok(())
    } else {
        bail!("health check failed: HTTP {}", resp.status());
    }
}
