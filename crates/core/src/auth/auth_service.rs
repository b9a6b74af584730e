use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::Result;
use paycycle_crm_client::AgentDirectory;

use super::auth_model::{AdminAccount, Role, Session};
use super::auth_traits::CredentialProviderTrait;

/// Credential provider over a fixed in-memory admin table.
pub struct StaticAdminProvider {
    accounts: HashMap<String, AdminAccount>,
}

impl StaticAdminProvider {
    pub fn new(accounts: Vec<AdminAccount>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.username.clone(), account))
            .collect();
        Self { accounts }
    }
}

#[async_trait]
impl CredentialProviderTrait for StaticAdminProvider {
    async fn authenticate(&self, username: &str, password: &str) -> Result<Option<Session>> {
        let Some(account) = self.accounts.get(username) else {
            return Ok(None);
        };
        if account.password != password {
            return Ok(None);
        }

        Ok(Some(Session {
            username: account.username.clone(),
            display_name: format!("{} {}", account.first_name, account.last_name),
            role: Role::Admin,
            agent_user_id: None,
        }))
    }
}

/// Credential provider backed by the CRM agent directory.
///
/// The directory carries no passwords, so agents share one floor
/// password supplied at construction. Usernames are matched against the
/// directory on every attempt; a directory fetch failure is a lookup
/// error, not a rejection.
pub struct DirectoryAgentProvider {
    directory: Arc<dyn AgentDirectory>,
    shared_password: String,
}

impl DirectoryAgentProvider {
    pub fn new(directory: Arc<dyn AgentDirectory>, shared_password: impl Into<String>) -> Self {
        Self {
            directory,
            shared_password: shared_password.into(),
        }
    }
}

#[async_trait]
impl CredentialProviderTrait for DirectoryAgentProvider {
    async fn authenticate(&self, username: &str, password: &str) -> Result<Option<Session>> {
        if password != self.shared_password {
            return Ok(None);
        }

        let agents = self.directory.fetch_agents().await?;
        let Some(agent) = agents
            .iter()
            .find(|a| a.username.as_deref() == Some(username))
        else {
            return Ok(None);
        };

        let display_name = match (&agent.first_name, &agent.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            _ => username.to_string(),
        };

        Ok(Some(Session {
            username: username.to_string(),
            display_name,
            role: Role::Agent,
            agent_user_id: agent.user_id.clone(),
        }))
    }
}

/// Chains credential providers; the first one that recognizes the pair
/// wins.
pub struct AuthService {
    providers: Vec<Arc<dyn CredentialProviderTrait>>,
}

impl AuthService {
    pub fn new(providers: Vec<Arc<dyn CredentialProviderTrait>>) -> Self {
        Self { providers }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Option<Session>> {
        for provider in &self.providers {
            if let Some(session) = provider.authenticate(username, password).await? {
                debug!("Authenticated {} as {:?}", session.username, session.role);
                return Ok(Some(session));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paycycle_crm_client::{AgentRecord, CrmError};

    struct MockDirectory {
        agents: Vec<AgentRecord>,
    }

    #[async_trait]
    impl AgentDirectory for MockDirectory {
        async fn fetch_agents(&self) -> std::result::Result<Vec<AgentRecord>, CrmError> {
            Ok(self.agents.clone())
        }
    }

    fn admin_table() -> Vec<AdminAccount> {
        vec![AdminAccount {
            username: "admin@example.com".to_string(),
            password: "hunter2".to_string(),
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
        }]
    }

    fn agent_directory() -> Arc<MockDirectory> {
        Arc::new(MockDirectory {
            agents: vec![AgentRecord {
                user_id: Some("310".to_string()),
                username: Some("jdoe".to_string()),
                first_name: Some("Jane".to_string()),
                last_name: Some("Doe".to_string()),
                role_descriptions: Some("agent".to_string()),
            }],
        })
    }

    fn make_service() -> AuthService {
        AuthService::new(vec![
            Arc::new(StaticAdminProvider::new(admin_table())),
            Arc::new(DirectoryAgentProvider::new(agent_directory(), "floor-pass")),
        ])
    }

    #[tokio::test]
    async fn test_admin_login() {
        let service = make_service();

        let session = service
            .login("admin@example.com", "hunter2")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.display_name, "Admin User");
        assert!(session.agent_user_id.is_none());
    }

    #[tokio::test]
    async fn test_admin_wrong_password_rejected() {
        let service = make_service();
        // Wrong admin password must not fall through to the agent chain
        assert!(service
            .login("admin@example.com", "wrong")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_agent_login_resolves_user_id() {
        let service = make_service();

        let session = service.login("jdoe", "floor-pass").await.unwrap().unwrap();

        assert_eq!(session.role, Role::Agent);
        assert_eq!(session.display_name, "Jane Doe");
        assert_eq!(session.agent_user_id.as_deref(), Some("310"));
    }

    #[tokio::test]
    async fn test_unknown_username_rejected() {
        let service = make_service();
        assert!(service
            .login("nobody", "floor-pass")
            .await
            .unwrap()
            .is_none());
    }
}
