//! Dependency wiring
//!
//! One [`HttpClient`] is built per run and shared by every repository.

use std::sync::Arc;

use secrecy::SecretString;
use tracing::{debug, info};

use crate::app::options::AppOptions;
use crate::authn::bearer::is_blank;
use crate::errors::ClientError;
use crate::filesys::file::File;
use crate::http::client::HttpClient;
use crate::http::service::ApiService;
use crate::repository::{AiRepository, SmartHomeRepository, UserRepository};
use crate::storage::session::{load_session, Session};

pub struct AppContext {
    pub options: AppOptions,

    /// Session file (token and logged-in user)
    pub session_file: File,

    pub users: UserRepository,
    pub smart_home: SmartHomeRepository,
    pub ai: AiRepository,

    /// Token given on the command line, taking precedence over the session
    token_override: Option<SecretString>,
}

impl AppContext {
    /// Build the context against the real backend
    pub fn init(
        options: AppOptions,
        token_override: Option<SecretString>,
    ) -> Result<Self, ClientError> {
        let client = HttpClient::new(&options.backend_base_url, options.timeout)?;
        info!("API client initialized with base URL: {}", client.base_url());
        Ok(Self::with_api(options, Arc::new(client), token_override))
    }

    /// Build the context around any API implementation
    pub fn with_api(
        options: AppOptions,
        api: Arc<dyn ApiService>,
        token_override: Option<SecretString>,
    ) -> Self {
        let session_file = options.layout.session_file();
        debug!("Session file: {}", session_file.path().display());

        Self {
            users: UserRepository::new(api.clone()),
            smart_home: SmartHomeRepository::new(api.clone()),
            ai: AiRepository::new(api),
            session_file,
            options,
            token_override: token_override.filter(|t| !is_blank(t)),
        }
    }

    pub async fn session(&self) -> Result<Session, ClientError> {
        load_session(&self.session_file).await
    }

    /// Bearer token for authenticated calls
    pub async fn token(&self) -> Result<SecretString, ClientError> {
        if let Some(token) = &self.token_override {
            return Ok(token.clone());
        }

        self.session().await?.auth_token().ok_or_else(|| {
            ClientError::NotLoggedIn(
                "no auth token stored; run `riversong set-token <TOKEN>` or pass --token"
                    .to_string(),
            )
        })
    }
}
