//! Configuration for the Storefront API

use core_config::{app_info, env_or_default, env_parse_or, server::ServerConfig, AppInfo, FromEnv};
use database::mongodb::MongoConfig;
use domain_products::mongodb::DEFAULT_COLLECTION;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    /// Collection holding catalog documents (`MONGODB_COLLECTION`)
    pub collection: String,
    /// Create the catalog index at startup (`MONGODB_CREATE_INDEXES`, off by default)
    pub create_indexes: bool,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let environment = Environment::from_env();
        let mut mongodb = MongoConfig::from_env()?;
        if mongodb.app_name.is_none() {
            mongodb = mongodb.with_app_name(app.name);
        }
        let server = ServerConfig::from_env()?;
        let collection = env_or_default("MONGODB_COLLECTION", DEFAULT_COLLECTION);
        let create_indexes = env_parse_or("MONGODB_CREATE_INDEXES", false)?;

        Ok(Self {
            app,
            mongodb,
            collection,
            create_indexes,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults_collection() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://db:27017")),
                ("MONGODB_DATABASE", Some("sartrends")),
                ("MONGODB_APP_NAME", None),
                ("MONGODB_COLLECTION", None),
                ("MONGODB_CREATE_INDEXES", None),
                ("APP_ENV", Some("development")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.collection, "products");
                assert!(!config.create_indexes);
                assert_eq!(config.mongodb.url(), "mongodb://db:27017");
                assert_eq!(config.mongodb.app_name.as_deref(), Some("storefront_api"));
            },
        );
    }

    #[test]
    fn test_from_env_custom_collection() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://db:27017")),
                ("MONGODB_DATABASE", Some("sartrends")),
                ("MONGODB_COLLECTION", Some("catalog")),
            ],
            || {
                assert_eq!(Config::from_env().unwrap().collection, "catalog");
            },
        );
    }

    #[test]
    fn test_from_env_index_creation_is_opt_in() {
        let base = [
            ("MONGODB_URL", Some("mongodb://db:27017")),
            ("MONGODB_DATABASE", Some("sartrends")),
        ];

        temp_env::with_vars(
            [base[0], base[1], ("MONGODB_CREATE_INDEXES", Some("true"))],
            || assert!(Config::from_env().unwrap().create_indexes),
        );
        temp_env::with_vars(
            [base[0], base[1], ("MONGODB_CREATE_INDEXES", Some("yes"))],
            || assert!(Config::from_env().is_err()),
        );
    }

    #[test]
    fn test_from_env_requires_mongodb_url() {
        temp_env::with_vars_unset(["MONGODB_URL", "MONGO_URL"], || {
            assert!(Config::from_env().is_err());
        });
    }
}
