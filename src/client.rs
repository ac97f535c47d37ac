use crate::api::{ApiError, OverrideSpec, ScheduleApi};
use crate::model::{ScheduleId, ShiftEntry, User, UserId};
use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

const DEFAULT_BASE_URL: &str = "https://api.pagerduty.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const ACCEPT_HEADER: &str = "application/vnd.pagerduty+json;version=2";

/// Configuration immuable du client, construite une fois puis passée
/// explicitement (pas d'état global).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Lit le jeton depuis la variable d'environnement `API_TOKEN`.
    pub fn from_env() -> anyhow::Result<Self> {
        let token = std::env::var("API_TOKEN").context("API_TOKEN is not set")?;
        Ok(Self::new(token))
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client PagerDuty bloquant : une exécution = un seul thread logique,
/// chaque appel bloque jusqu'à réponse ou timeout.
pub struct PagerDutyClient {
    http: Client,
    config: ApiConfig,
}

impl PagerDutyClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        let resp = self
            .http
            .get(url)
            .header("Accept", ACCEPT_HEADER)
            .header("Authorization", format!("Token token={}", self.config.token))
            .query(query)
            .send()?;
        check_read_status(resp)
    }
}

/// 401/403 → Auth ; tout autre échec HTTP de lecture → Transport.
fn check_read_status(resp: Response) -> Result<Response, ApiError> {
    match resp.status() {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Auth),
        _ => Ok(resp.error_for_status()?),
    }
}

// Enveloppes de désérialisation (format PagerDuty v2).

#[derive(Debug, Deserialize)]
struct WireUser {
    id: String,
    summary: String,
}

impl From<WireUser> for User {
    fn from(w: WireUser) -> Self {
        User::new(w.id, w.summary)
    }
}

#[derive(Debug, Deserialize)]
struct CurrentUserEnvelope {
    user: WireUser,
}

#[derive(Debug, Deserialize)]
struct UsersEnvelope {
    users: Vec<WireUser>,
}

#[derive(Debug, Deserialize)]
struct WireSchedule {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SchedulesEnvelope {
    schedules: Vec<WireSchedule>,
}

#[derive(Debug, Deserialize)]
struct WireEntry {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    user: WireUser,
}

#[derive(Debug, Deserialize)]
struct FinalSchedule {
    rendered_schedule_entries: Vec<WireEntry>,
}

#[derive(Debug, Deserialize)]
struct ScheduleDetail {
    final_schedule: FinalSchedule,
}

#[derive(Debug, Deserialize)]
struct ScheduleEnvelope {
    schedule: ScheduleDetail,
}

impl ScheduleApi for PagerDutyClient {
    fn current_user(&self) -> Result<User, ApiError> {
        let envelope: CurrentUserEnvelope = self.get("/users/me", &[])?.json()?;
        debug!(user = %envelope.user.id, "current user fetched");
        Ok(envelope.user.into())
    }

    fn search_users(&self, query: &str) -> Result<Vec<User>, ApiError> {
        info!(%query, "searching for user");
        let envelope: UsersEnvelope = self.get("/users", &[("query", query)])?.json()?;
        Ok(envelope.users.into_iter().map(User::from).collect())
    }

    fn search_schedules(&self, query: &str) -> Result<Vec<ScheduleId>, ApiError> {
        info!(%query, "searching for schedule");
        let envelope: SchedulesEnvelope = self.get("/schedules", &[("query", query)])?.json()?;
        Ok(envelope
            .schedules
            .into_iter()
            .map(|s| ScheduleId::new(s.id))
            .collect())
    }

    fn rendered_entries(
        &self,
        schedule: &ScheduleId,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<ShiftEntry>, ApiError> {
        info!(schedule = %schedule.as_str(), %since, %until, "fetching rendered schedule");
        let since = since.to_string();
        let until = until.to_string();
        let envelope: ScheduleEnvelope = self
            .get(
                &format!("/schedules/{}", schedule.as_str()),
                &[
                    ("since", since.as_str()),
                    ("until", until.as_str()),
                    ("time_zone", "UTC"),
                ],
            )?
            .json()?;
        let entries = envelope
            .schedule
            .final_schedule
            .rendered_schedule_entries
            .into_iter()
            .map(|e| ShiftEntry {
                user_id: UserId::new(e.user.id),
                start: e.start,
                end: e.end,
            })
            .collect();
        Ok(entries)
    }

    fn create_override(
        &self,
        schedule: &ScheduleId,
        spec: &OverrideSpec,
    ) -> Result<(), ApiError> {
        let body = json!({
            "override": {
                "user": { "id": spec.user.id.as_str(), "type": "user_reference" },
                "start": spec.start.to_rfc3339(),
                "end": spec.end.to_rfc3339(),
                "type": "schedule_override",
            }
        });
        let url = format!(
            "{}/schedules/{}/overrides",
            self.config.base_url,
            schedule.as_str()
        );
        let resp = self
            .http
            .post(url)
            .header("Accept", ACCEPT_HEADER)
            .header("Authorization", format!("Token token={}", self.config.token))
            .json(&body)
            .send()?;

        let status = resp.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Auth),
            s if s.is_client_error() => {
                // 4xx = refus du service (intervalle invalide, override en conflit...)
                let body = resp.text().unwrap_or_default();
                Err(ApiError::Validation {
                    status: status.as_u16(),
                    body,
                })
            }
            _ => {
                resp.error_for_status()?;
                debug!(schedule = %schedule.as_str(), "override created");
                Ok(())
            }
        }
    }
}
