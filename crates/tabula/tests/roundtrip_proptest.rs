//! Property-based tests for parsing and writing.
//!
//! These tests check that:
//! - Any record written with `to_string` parses back to an equal record
//! - Comments, blank lines, indentation and key case never change the result
//! - A body whose line count differs from the field count is always rejected
//! - Fewer headers than declared sections is always `MissingSection`

use proptest::prelude::*;
use tabula::{IniConfig, IniError, IniSection};

#[derive(Debug, Clone, PartialEq, IniSection)]
struct Server {
    address: String,
    port: u16,
    workers: usize,
}

#[derive(Debug, Clone, PartialEq, IniSection)]
struct Limits {
    offset: i64,
    ratio: f64,
    enabled: bool,
    big: u128,
}

#[derive(Debug, Clone, PartialEq, IniConfig)]
struct AppConfig {
    server: Server,
    limits: Limits,
}

/// Strings the dialect can carry: non-empty, trimmed, no `=` or line breaks.
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9./:_-]{1,20}",
        "[a-zA-Z0-9][a-zA-Z0-9 ;\\[\\]#\"]{0,18}[a-zA-Z0-9]",
    ]
}

fn server_strategy() -> impl Strategy<Value = Server> {
    (text_strategy(), any::<u16>(), any::<usize>()).prop_map(|(address, port, workers)| Server {
        address,
        port,
        workers,
    })
}

fn limits_strategy() -> impl Strategy<Value = Limits> {
    (
        any::<i64>(),
        any::<f64>().prop_filter("NaN never compares equal", |r| !r.is_nan()),
        any::<bool>(),
        any::<u128>(),
    )
        .prop_map(|(offset, ratio, enabled, big)| Limits {
            offset,
            ratio,
            enabled,
            big,
        })
}

fn config_strategy() -> impl Strategy<Value = AppConfig> {
    (server_strategy(), limits_strategy()).prop_map(|(server, limits)| AppConfig { server, limits })
}

/// Rewrite a document the way a person might: indentation, comments, blank
/// lines, and random key/header casing.
fn decorate(text: &str, indent: &str, upper: bool) -> String {
    let mut out = String::from("; generated\n\n");
    for line in text.lines() {
        let line = if upper && !line.is_empty() {
            match line.split_once(" = ") {
                Some((key, value)) => format!("{} = {value}", key.to_uppercase()),
                None => line.to_uppercase(),
            }
        } else {
            line.to_string()
        };
        out.push_str(indent);
        out.push_str(&line);
        out.push_str("  \n");
        out.push_str(indent);
        out.push_str("; noise\n");
    }
    out
}

proptest! {
    #[test]
    fn test_write_then_parse_roundtrip(config in config_strategy()) {
        let text = tabula::to_string(&config).unwrap();
        let parsed: AppConfig = tabula::from_str(&text).unwrap();
        prop_assert_eq!(parsed, config);
    }

    #[test]
    fn test_parse_is_idempotent(config in config_strategy()) {
        let text = tabula::to_string(&config).unwrap();
        let first: AppConfig = tabula::from_str(&text).unwrap();
        let second: AppConfig = tabula::from_str(&text).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_formatting_noise_is_ignored(
        config in config_strategy(),
        indent in "[ \t]{0,4}",
        upper in any::<bool>(),
    ) {
        let text = decorate(&tabula::to_string(&config).unwrap(), &indent, upper);
        let parsed: AppConfig = tabula::from_str(&text).unwrap();
        prop_assert_eq!(parsed, config);
    }

    #[test]
    fn test_line_count_mismatch_rejected(
        config in config_strategy(),
        extra in 1usize..4,
        drop_line in any::<bool>(),
    ) {
        let text = tabula::to_string(&(config.server,)).unwrap();
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        if drop_line {
            lines.truncate(lines.len() - extra.min(Server::FIELDS.len() - 1));
        } else {
            for i in 0..extra {
                lines.push(format!("unknown_{i} = 1"));
            }
        }

        let err = tabula::from_str::<(Server,)>(&lines.join("\n")).unwrap_err();
        let is_count_mismatch = matches!(err, IniError::FieldCountMismatch { .. });
        prop_assert!(is_count_mismatch, "unexpected error: {:?}", err);
    }

    #[test]
    fn test_missing_trailing_section(config in config_strategy()) {
        let text = tabula::to_string(&(config.server,)).unwrap();
        let err = tabula::from_str::<AppConfig>(&text).unwrap_err();
        let is_missing = matches!(err, IniError::MissingSection { ref section } if section == "Limits");
        prop_assert!(is_missing, "unexpected error: {:?}", err);
    }

    #[test]
    fn test_extra_trailing_sections_ignored(config in config_strategy(), tail in "[a-z= \n\\[\\]]{0,40}") {
        let text = format!("{}\n[Trailing]\n{tail}", tabula::to_string(&config).unwrap());
        let parsed: AppConfig = tabula::from_str(&text).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
