use async_trait::async_trait;

use crate::Result;

use super::auth_model::Session;

/// Trait defining the contract for credential lookup.
///
/// A provider either recognizes the pair and yields a session, or yields
/// `None` so the next provider in the chain can try. Errors are reserved
/// for lookup infrastructure failing, not for wrong passwords.
#[async_trait]
pub trait CredentialProviderTrait: Send + Sync {
    async fn authenticate(&self, username: &str, password: &str) -> Result<Option<Session>>;
}
