//! Tests for configuration parsing and loading.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use crate::config::{ConfigError, DbProvider, NotificationsConfig};

    #[test]
    fn test_config_default() {
        let config = NotificationsConfig::default();
        assert_eq!(config.provider, DbProvider::Sqlite);
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.max_connections, None);
        assert_eq!(config.search.default_page_size, 20);
        assert_eq!(config.search.max_page_size, 1000);
        assert_eq!(config.search.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.search.cache_max_entries, 1000);
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r#"
provider: postgres
url: "postgres://notify@localhost/notifications"
max_connections: 8
search:
  default_page_size: 50
  max_page_size: 200
  cache_ttl: "5m"
  cache_max_entries: 64
"#;
        let config: NotificationsConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.provider, DbProvider::Postgres);
        assert_eq!(config.max_connections, Some(8));
        assert_eq!(config.search.default_page_size, 50);
        assert_eq!(config.search.max_page_size, 200);
        assert_eq!(config.search.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.search.cache_max_entries, 64);
        config.validate().unwrap();
    }

    #[test]
    fn test_config_provider_aliases() {
        let config: NotificationsConfig = serde_saphyr::from_str("provider: MariaDB\n").unwrap();
        assert_eq!(config.provider, DbProvider::MySql);
    }

    #[test]
    fn test_config_rejects_unknown_provider() {
        let result: Result<NotificationsConfig, _> = serde_saphyr::from_str("provider: oracle\n");
        assert!(result.is_err(), "unknown providers must not silently fall back");
    }

    #[test]
    fn test_config_reject_unknown_fields() {
        let yaml = r#"
url: "sqlite::memory:"
pool: 4
"#;
        let result: Result<NotificationsConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_applies_nested_defaults() {
        let yaml = r#"
search:
  cache_ttl: "15s"
"#;
        let config: NotificationsConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.search.cache_ttl, Duration::from_secs(15));
        assert_eq!(config.search.default_page_size, 20);
        assert_eq!(config.provider, DbProvider::Sqlite);
    }

    #[test]
    fn test_config_parses_compound_and_rejects_bad_durations() {
        let yaml = r#"
search:
  cache_ttl: "1h 30m"
"#;
        let config: NotificationsConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.search.cache_ttl, Duration::from_secs(5400));

        let yaml = r#"
search:
  cache_ttl: "soon"
"#;
        assert!(serde_saphyr::from_str::<NotificationsConfig>(yaml).is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_page_sizes() {
        let mut config = NotificationsConfig::default();
        config.search.default_page_size = 500;
        config.search.max_page_size = 100;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.search.max_page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "provider: sqlite\nurl: \"sqlite://notifications.db?mode=rwc\"\nsearch:\n  max_page_size: 10\n  default_page_size: 5\n"
        )
        .unwrap();

        let config = NotificationsConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.url, "sqlite://notifications.db?mode=rwc");
        assert_eq!(config.search.max_page_size, 10);
        assert_eq!(config.search.default_page_size, 5);
        assert_eq!(config.search.cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_load_reports_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "search:\n  max_page_size: 0\n").unwrap();
        assert!(matches!(
            NotificationsConfig::load(Some(file.path())),
            Err(ConfigError::Invalid(_))
        ));
    }
}
