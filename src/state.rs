use crate::config::AppConfig;
use crate::recipes::catalog::{LocalCatalog, RecipeCatalog};
use crate::users::repo::{InMemoryUserStore, UserStore};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
    pub catalog: Arc<dyn RecipeCatalog>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let catalog = match &config.catalog.path {
            Some(path) => {
                let local = LocalCatalog::load(path).await?;
                info!(recipes = local.len(), path = %path.display(), "recipe catalog loaded");
                local
            }
            None => {
                info!("CATALOG_PATH not set; recipe catalog is empty");
                LocalCatalog::default()
            }
        };

        Ok(Self::from_parts(
            config,
            Arc::new(InMemoryUserStore::new()),
            Arc::new(catalog),
        ))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        users: Arc<dyn UserStore>,
        catalog: Arc<dyn RecipeCatalog>,
    ) -> Self {
        Self {
            config,
            users,
            catalog,
        }
    }

    #[cfg(test)]
    pub fn fake(catalog: LocalCatalog) -> Self {
        use crate::config::{CatalogConfig, DEFAULT_EXPIRY_WINDOW_DAYS};
        use crate::recipes::query::DEFAULT_PAGE_SIZE;

        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            expiry_window_days: DEFAULT_EXPIRY_WINDOW_DAYS,
            catalog: CatalogConfig {
                path: None,
                page_size: DEFAULT_PAGE_SIZE,
            },
        });
        Self::from_parts(
            config,
            Arc::new(InMemoryUserStore::new()),
            Arc::new(catalog),
        )
    }
}
