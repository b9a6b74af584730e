//! reqwest client for the TLD CRM egress API.
//!
//! Authentication is two static headers (`tld-api-id` / `tld-api-key`)
//! supplied through [`CrmConfig`]; credentials are never baked in here.
//! The policies endpoint paginates through a `navigate.next` URL which
//! embeds the original query, so follow-up requests carry no parameters.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::CrmError;
use crate::models::{AgentRecord, DealListItem};
use crate::traits::{AgentDirectory, DealProvider};

const DEFAULT_POLICIES_URL: &str = "https://hcs.tldcrm.com/api/egress/policies";
const DEFAULT_USERS_URL: &str = "https://hcs.tldcrm.com/api/egress/users";

/// Per-request timeout. Egress queries are small; anything slower than
/// this is treated as an upstream failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Page size for the all-deals sweep.
const DEALS_PAGE_LIMIT: u32 = 5000;

/// Page size for single-agent range queries; one agent never has more
/// rows than this in a cycle.
const AGENT_DEALS_LIMIT: u32 = 1000;

/// Columns requested for the all-deals sweep.
const DEAL_COLUMNS: &str = "policy_id,date_created,date_converted,date_sold,date_posted,\
carrier,product,duration,premium,policy_number,\
lead_first_name,lead_last_name,lead_state,lead_vendor_name,\
agent_id,agent_name";

/// Columns requested for single-agent range queries.
const AGENT_DEAL_COLUMNS: &str = "policy_id,date_sold,carrier,product,premium,\
lead_first_name,lead_last_name,lead_state,lead_vendor_name,agent_id,agent_name";

// ============================================================================
// API Response Structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    response: Option<Payload<T>>,
}

#[derive(Debug, Deserialize)]
struct Payload<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
    navigate: Option<Navigate>,
}

#[derive(Debug, Deserialize)]
struct Navigate {
    next: Option<String>,
}

// ============================================================================
// TldCrmClient
// ============================================================================

/// Connection settings for the CRM egress API.
#[derive(Debug, Clone)]
pub struct CrmConfig {
    pub policies_url: String,
    pub users_url: String,
    pub api_id: String,
    pub api_key: String,
}

impl CrmConfig {
    pub fn new(api_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        CrmConfig {
            policies_url: DEFAULT_POLICIES_URL.to_string(),
            users_url: DEFAULT_USERS_URL.to_string(),
            api_id: api_id.into(),
            api_key: api_key.into(),
        }
    }
}

/// CRM egress API client.
pub struct TldCrmClient {
    client: Client,
    config: CrmConfig,
}

impl TldCrmClient {
    pub fn new(config: CrmConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Makes one authenticated GET request and decodes the envelope.
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<Envelope<T>, CrmError> {
        let mut request = self
            .client
            .get(url)
            .header("tld-api-id", &self.config.api_id)
            .header("tld-api-key", &self.config.api_key);

        for (key, value) in params {
            request = request.query(&[(key, value)]);
        }

        debug!("CRM request: {} with {} params", url, params.len());

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                CrmError::Timeout
            } else {
                CrmError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CrmError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CrmError::Status {
                code: status.as_u16(),
                message,
            });
        }

        response
            .json::<Envelope<T>>()
            .await
            .map_err(|e| CrmError::Decode(e.to_string()))
    }
}

#[async_trait]
impl DealProvider for TldCrmClient {
    async fn fetch_agent_deals(
        &self,
        agent_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<DealListItem>, CrmError> {
        let params = [
            ("agent_id", agent_id.to_string()),
            ("date_sold_greater_equal", date_from.to_string()),
            ("date_sold_less_equal", date_to.to_string()),
            ("limit", AGENT_DEALS_LIMIT.to_string()),
            ("columns", AGENT_DEAL_COLUMNS.to_string()),
        ];

        let envelope: Envelope<DealListItem> =
            self.get_envelope(&self.config.policies_url, &params).await?;

        Ok(envelope.response.map(|p| p.results).unwrap_or_default())
    }

    async fn fetch_deals_since(&self, date_from: NaiveDate) -> Result<Vec<DealListItem>, CrmError> {
        let params = [
            ("date_from", date_from.to_string()),
            ("limit", DEALS_PAGE_LIMIT.to_string()),
            ("columns", DEAL_COLUMNS.to_string()),
        ];

        let mut results = Vec::new();
        let mut url = self.config.policies_url.clone();
        let mut seen: HashSet<String> = HashSet::new();
        let mut first_page = true;

        // The next-page URL repeats the full query, so only the first
        // request sends parameters. The seen-set guards against a cursor
        // that points back at an already-fetched page.
        while seen.insert(url.clone()) {
            let page_params: &[(&str, String)] = if first_page { &params } else { &[] };
            first_page = false;

            let envelope: Envelope<DealListItem> = self.get_envelope(&url, page_params).await?;
            let Some(payload) = envelope.response else {
                break;
            };
            if payload.results.is_empty() {
                break;
            }

            results.extend(payload.results);

            match payload.navigate.and_then(|n| n.next) {
                Some(next) if !seen.contains(&next) => url = next,
                Some(_) => {
                    warn!("CRM pagination cursor looped; stopping sweep");
                    break;
                }
                None => break,
            }
        }

        debug!("CRM sweep since {}: {} deals", date_from, results.len());
        Ok(results)
    }
}

#[async_trait]
impl AgentDirectory for TldCrmClient {
    async fn fetch_agents(&self) -> Result<Vec<AgentRecord>, CrmError> {
        let params = [("limit", AGENT_DEALS_LIMIT.to_string())];

        let envelope: Envelope<AgentRecord> =
            self.get_envelope(&self.config.users_url, &params).await?;

        Ok(envelope.response.map(|p| p.results).unwrap_or_default())
    }
}
