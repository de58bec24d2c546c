//! Tests for validated configuration.

use std::io::Write;
use std::time::Duration;

use tempfile::{NamedTempFile, tempdir};

use super::ConfigError;
use super::cli::Cli;
use super::defaults;
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, redact_token, write_default_config};

/// Helper to create CLI args from a slice; appends the `info` subcommand.
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["discord-webhooks"];
    full_args.extend(args);
    full_args.push("info");
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod required_fields {
    use super::*;

    #[test]
    fn missing_url_returns_error() {
        let result = ValidatedConfig::from_raw(&cli(&[]), None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired { field: "url", .. })
        ));
    }

    #[test]
    fn invalid_url_returns_error() {
        let result = ValidatedConfig::from_raw(&cli(&["--url", "not a url"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--url", "ftp://example.com/hook"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }
}

mod precedence {
    use super::*;

    #[test]
    fn defaults_apply_without_overrides() {
        let config =
            ValidatedConfig::from_raw(&cli(&["--url", "https://example.com/hook"]), None).unwrap();

        assert_eq!(config.timeout, defaults::timeout());
        assert_eq!(config.user_agent, defaults::USER_AGENT);
        assert!(!config.verbose);
    }

    #[test]
    fn toml_supplies_url_timeout_and_user_agent() {
        let toml = toml(
            r#"
            [webhook]
            url = "https://example.com/from-toml"
            timeout = 7
            user_agent = "toml-agent"
            "#,
        );

        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert_eq!(config.url.as_str(), "https://example.com/from-toml");
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert_eq!(config.user_agent, "toml-agent");
    }

    #[test]
    fn cli_overrides_toml() {
        let toml = toml(
            r#"
            [webhook]
            url = "https://example.com/from-toml"
            timeout = 7
            "#,
        );
        let cli = cli(&["--url", "https://example.com/from-cli", "--timeout", "3", "-v"]);

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.url.as_str(), "https://example.com/from-cli");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(config.verbose);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = ValidatedConfig::from_raw(
            &cli(&["--url", "https://example.com/hook", "--timeout", "0"]),
            None,
        );

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDuration {
                field: "timeout",
                ..
            })
        ));
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_reads_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[webhook]\nurl = \"https://example.com/hook\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ValidatedConfig::load(&cli(&["--config", &path])).unwrap();

        assert_eq!(config.url.as_str(), "https://example.com/hook");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = ValidatedConfig::load(&cli(&["--config", path.to_str().unwrap()]));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn load_reports_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[webhook\nurl = ").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let result = ValidatedConfig::load(&cli(&["--config", &path]));

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn write_default_config_creates_parseable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("discord-webhooks.toml");

        write_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(TomlConfig::parse(&content).is_ok());
    }

    #[test]
    fn write_default_config_reports_bad_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("config.toml");

        let result = write_default_config(&path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}

mod redaction {
    use super::*;

    #[test]
    fn token_is_masked() {
        let url = url::Url::parse("https://discord.com/api/webhooks/123/secret-token").unwrap();

        assert_eq!(
            redact_token(&url),
            "https://discord.com/api/webhooks/123/***"
        );
    }

    #[test]
    fn trailing_slash_and_query_do_not_leak_token() {
        let url =
            url::Url::parse("https://discord.com/api/webhooks/123/secret-token/?thread_id=1")
                .unwrap();

        let redacted = redact_token(&url);

        assert!(!redacted.contains("secret-token"));
        assert!(!redacted.contains("thread_id"));
    }

    #[test]
    fn display_does_not_leak_token() {
        let config = ValidatedConfig::from_raw(
            &cli(&["--url", "https://discord.com/api/webhooks/123/secret-token"]),
            None,
        )
        .unwrap();

        let shown = config.to_string();

        assert!(!shown.contains("secret-token"));
        assert!(shown.contains("timeout: 30s"));
    }
}
