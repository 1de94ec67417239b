use anyhow::{Context, Result};

/// Connection settings for the relational source database. Only this
/// batch job reads them; the main service never touches the source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
}

impl SourceConfig {
    pub fn init() -> Result<Self> {
        let host = std::env::var("MYSQL_HOST").unwrap_or_else(|_| "localhost".to_string());
        let user = std::env::var("MYSQL_USER").unwrap_or_else(|_| "root".to_string());
        let password = std::env::var("MYSQL_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
        let database =
            std::env::var("MYSQL_DATABASE").unwrap_or_else(|_| "flash_tans_db".to_string());
        let port = std::env::var("MYSQL_PORT")
            .unwrap_or_else(|_| "3306".to_string())
            .parse::<u16>()
            .context("MYSQL_PORT must be a valid u16 integer")?;

        Ok(Self {
            host,
            user,
            password,
            database,
            port,
        })
    }

    pub fn connection_string(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}
