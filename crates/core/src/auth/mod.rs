//! Auth module - injected credential lookup for the two dashboard roles.

mod auth_model;
mod auth_service;
mod auth_traits;

pub use auth_model::{AdminAccount, Role, Session};
pub use auth_service::{AuthService, DirectoryAgentProvider, StaticAdminProvider};
pub use auth_traits::CredentialProviderTrait;
