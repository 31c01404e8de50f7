use super::{auth_config::AuthConfig, cors_config, database_config, server_config::ServerConfig};
use persistence::store::StoreConfig;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: StoreConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: database_config::from_env(),
            auth: AuthConfig::from_env()?,
        })
    }
}
