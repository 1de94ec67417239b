use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub run_migrations: bool,
    pub db_max_connections: u32,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let run_migrations = std::env::var("RUN_MIGRATIONS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);

        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid u32 integer")?;

        Ok(Self {
            database_url,
            port,
            run_migrations,
            db_max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_settings_fall_back_to_defaults() {
        unsafe {
            std::env::set_var("DATABASE_URL", "postgres://localhost/demo");
            std::env::remove_var("PORT");
            std::env::remove_var("RUN_MIGRATIONS");
            std::env::remove_var("DB_MAX_CONNECTIONS");
        }

        let config = Config::init().unwrap();

        assert_eq!(config.port, 3000);
        assert!(config.run_migrations);
        assert_eq!(config.db_max_connections, 10);
    }
}
