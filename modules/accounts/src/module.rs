use std::sync::Arc;

use runtime::AppConfig;
use tracing::{debug, info, warn};

use crate::config::AccountsConfig;
use crate::contract::client::AccountsApi;
use crate::domain::repo::AccountsRepository;
use crate::domain::service::Service;
use crate::gateways::local::AccountsLocalClient;

/// Name of this module's section in the configuration bag.
pub const MODULE_NAME: &str = "accounts";

/// Wires configuration and a storage adapter into the domain service and
/// exposes it through the public client trait.
#[derive(Clone)]
pub struct AccountsModule {
    service: Arc<Service>,
    client: Arc<dyn AccountsApi>,
}

impl AccountsModule {
    /// Build the module from the application configuration bag.
    pub fn init(app: &AppConfig, repo: Arc<dyn AccountsRepository>) -> anyhow::Result<Self> {
        let cfg: AccountsConfig = app.module_config(MODULE_NAME)?;
        Self::with_config(cfg, repo)
    }

    pub fn with_config(
        cfg: AccountsConfig,
        repo: Arc<dyn AccountsRepository>,
    ) -> anyhow::Result<Self> {
        info!("Initializing accounts module");
        debug!("Loaded accounts config: bcrypt_cost={}", cfg.bcrypt_cost);

        if cfg.token_secret.trim().is_empty() {
            anyhow::bail!("accounts.token_secret must not be empty");
        }
        if cfg.uses_dev_secret() {
            warn!("accounts.token_secret not configured, using the development secret");
        }

        let service = Arc::new(Service::new(repo, cfg.into())?);
        let client: Arc<dyn AccountsApi> = Arc::new(AccountsLocalClient::new(service.clone()));

        info!("Accounts API ready");
        Ok(Self { service, client })
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    pub fn client(&self) -> Arc<dyn AccountsApi> {
        self.client.clone()
    }
}
