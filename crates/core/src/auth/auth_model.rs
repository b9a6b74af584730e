use serde::{Deserialize, Serialize};

/// The two dashboard roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
}

/// An authenticated dashboard session.
///
/// The core only needs to know which dashboard to show and, for agents,
/// which CRM user id to query deals for. Where the credentials came from
/// is the provider's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub username: String,
    pub display_name: String,
    pub role: Role,
    /// CRM user id for deal queries; admins have none.
    pub agent_user_id: Option<String>,
}

/// One row of the static admin credential table.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}
