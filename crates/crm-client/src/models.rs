//! Wire models for the CRM egress API.
//!
//! The egress endpoints are loosely typed: numeric ids arrive as numbers
//! or strings depending on the column selection, and most fields may be
//! absent. Everything optional is modeled as `Option<String>` with a
//! tolerant id deserializer.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One policy row from the egress `policies` endpoint.
///
/// The dashboards only compute with `date_sold` and `agent_id`; the rest
/// is carried for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DealListItem {
    #[serde(deserialize_with = "id_string")]
    pub policy_id: Option<String>,
    pub date_created: Option<String>,
    pub date_sold: Option<String>,
    pub carrier: Option<String>,
    pub product: Option<String>,
    pub premium: Option<String>,
    pub policy_number: Option<String>,
    pub lead_first_name: Option<String>,
    pub lead_last_name: Option<String>,
    pub lead_state: Option<String>,
    pub lead_vendor_name: Option<String>,
    #[serde(deserialize_with = "id_string")]
    pub agent_id: Option<String>,
    pub agent_name: Option<String>,
}

impl DealListItem {
    /// The calendar day the deal was sold, if the CRM sent one.
    ///
    /// `date_sold` arrives as `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`;
    /// only the date part matters for bucketing.
    pub fn date_sold_day(&self) -> Option<NaiveDate> {
        let raw = self.date_sold.as_deref()?.trim();
        let day = raw.get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

/// One user row from the egress `users` endpoint, the agent directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentRecord {
    #[serde(deserialize_with = "id_string")]
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role_descriptions: Option<String>,
}

/// Accepts a JSON string or number and yields it as a string.
fn id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_accept_numbers_and_strings() {
        let numeric: DealListItem =
            serde_json::from_str(r#"{"policy_id": 42, "agent_id": 310}"#).unwrap();
        assert_eq!(numeric.policy_id.as_deref(), Some("42"));
        assert_eq!(numeric.agent_id.as_deref(), Some("310"));

        let stringly: DealListItem =
            serde_json::from_str(r#"{"policy_id": "42", "agent_id": "310"}"#).unwrap();
        assert_eq!(stringly.policy_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_date_sold_day_strips_time() {
        let deal: DealListItem =
            serde_json::from_str(r#"{"date_sold": "2025-06-18 14:22:01"}"#).unwrap();
        assert_eq!(
            deal.date_sold_day(),
            NaiveDate::from_ymd_opt(2025, 6, 18)
        );

        let date_only: DealListItem =
            serde_json::from_str(r#"{"date_sold": "2025-06-18"}"#).unwrap();
        assert_eq!(
            date_only.date_sold_day(),
            NaiveDate::from_ymd_opt(2025, 6, 18)
        );
    }

    #[test]
    fn test_date_sold_day_tolerates_garbage() {
        let deal: DealListItem = serde_json::from_str(r#"{"date_sold": "soon"}"#).unwrap();
        assert!(deal.date_sold_day().is_none());

        let missing: DealListItem = serde_json::from_str("{}").unwrap();
        assert!(missing.date_sold_day().is_none());
    }
}
