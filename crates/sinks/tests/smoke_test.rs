//! Smoke tests for the sink stack
//!
//! Load a TOML config from disk, build the context and fanout from it, and
//! check what lands in the files.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chronicle_config::Config;
use chronicle_core::{Level, LogEntry, LogFormatter, PropertySerializer};
use chronicle_sinks::{FanoutSink, Sink, SinkExt, context_from_config};
use tempfile::TempDir;

/// Write a config file whose sink paths live under `dir`
fn write_config(dir: &Path, body: &str) -> std::path::PathBuf {
    let root = dir.display().to_string();
    let path = dir.join("chronicle.toml");
    fs::write(&path, body.replace("{dir}", &root)).unwrap();
    path
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

struct Bare;

impl LogFormatter for Bare {
    fn format(&self, entry: &LogEntry<'_>, serializer: &dyn PropertySerializer) -> String {
        format!("{} {} {}", entry.level, entry.message, serializer.serialize(entry.properties))
    }
}

#[test]
fn test_game_session_end_to_end() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(
        dir.path(),
        r#"
[log]
minimum_level = "info"

[sinks.game]
path = "{dir}/logs/game.log"

[sinks.errors]
path = "{dir}/logs/errors.log"
"#,
    );

    let config = Config::from_file(&config_path).unwrap();
    let context = context_from_config(&config.log);
    let fanout = FanoutSink::from_config(&config, context.clone()).unwrap();

    fanout
        .info()
        .message("Game initialization started")
        .property("levelId", "level_001")
        .commit();
    fanout.debug().message("Loading assets").commit();

    context.set_minimum_level(Level::Debug);
    fanout.debug().message("Loading assets").property("count", 42).commit();

    fanout.close();

    let game = read_lines(&dir.path().join("logs/game.log"));
    assert_eq!(game.len(), 2);
    assert!(game[0].ends_with(r#"|Info|Game initialization started| | {"levelId":"level_001"}"#));
    assert!(game[1].ends_with(r#"|Debug|Loading assets| | {"count":42}"#));

    let errors = read_lines(&dir.path().join("logs/errors.log"));
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_context_swap_applies_to_every_sink() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(
        dir.path(),
        r#"
[sinks.a]
path = "{dir}/a.log"

[sinks.b]
path = "{dir}/b.log"
"#,
    );

    let config = Config::from_file(&config_path).unwrap();
    let context = context_from_config(&config.log);
    let fanout = FanoutSink::from_config(&config, context.clone()).unwrap();

    context.set_formatter(Arc::new(Bare));
    fanout.warn().message("swapped").property("k", "v").commit();
    fanout.close();

    for name in ["a.log", "b.log"] {
        assert_eq!(
            read_lines(&dir.path().join(name)),
            vec![r#"Warn swapped {"k":"v"}"#]
        );
    }
}

#[test]
fn test_rotation_from_config() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(
        dir.path(),
        r#"
[sinks.small]
path = "{dir}/small.log"
max_file_size = 100
max_rolling_files = 2
"#,
    );

    let config = Config::from_file(&config_path).unwrap();
    let fanout = FanoutSink::from_config(&config, context_from_config(&config.log)).unwrap();

    // Every line is 42 bytes, so each file rolls after its third line
    for i in 0..30 {
        fanout.error().message(format!("failure {i:02}")).commit();
    }
    fanout.close();

    let messages = |name: &str| -> Vec<String> {
        read_lines(&dir.path().join(name))
            .iter()
            .map(|line| line.split('|').nth(2).unwrap().to_string())
            .collect()
    };

    assert_eq!(fs::read_to_string(dir.path().join("small.log")).unwrap(), "");
    assert_eq!(messages("small.log.1"), vec!["failure 27", "failure 28", "failure 29"]);
    assert_eq!(messages("small.log.2"), vec!["failure 24", "failure 25", "failure 26"]);
    assert!(!dir.path().join("small.log.3").exists());
}

#[test]
fn test_off_config_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(
        dir.path(),
        r#"
[log]
minimum_level = "Off"

[sinks.quiet]
path = "{dir}/quiet.log"
"#,
    );

    let config = Config::from_file(&config_path).unwrap();
    let fanout = FanoutSink::from_config(&config, context_from_config(&config.log)).unwrap();

    fanout.fatal().message("suppressed").commit();
    fanout.log(Level::Fatal, "suppressed", &Default::default());
    fanout.close();

    assert_eq!(fs::read_to_string(dir.path().join("quiet.log")).unwrap(), "");
}
