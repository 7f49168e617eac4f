use chrono::{DateTime, Utc};
use rand::{Rng, distributions::Alphanumeric};

pub mod entities;
pub mod services;

/// Length of the public identifier handed out to clients.
pub const UID_LENGTH: usize = 21;

#[derive(Clone, Debug)]
pub struct SkiFieldTrackerConfig {
    pub database: DatabaseConfig,
    pub storage: StorageBackend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

pub fn generate_timestamp() -> DateTime<Utc> {
    Utc::now()
}

pub fn generate_uid() -> String {
    generate_random_string(UID_LENGTH)
}

pub fn generate_random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_is_alphanumeric_with_fixed_length() {
        let uid = generate_uid();
        assert_eq!(uid.len(), UID_LENGTH);
        assert!(uid.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn database_url_is_assembled_from_parts() {
        let config = DatabaseConfig {
            host: "db".to_string(),
            port: 5433,
            username: "ski".to_string(),
            password: "secret".to_string(),
            name: "skifields".to_string(),
            run_migrations: false,
        };
        assert_eq!(config.url(), "postgres://ski:secret@db:5433/skifields");
    }
}
