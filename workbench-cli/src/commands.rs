//! CLI command implementations

use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use serde_json::Value;
use workbench_core::{DirectoryFixtures, FixtureSet, FixtureSource, WorkbenchConfig};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory holding *.json fixtures
        #[arg(short, long)]
        fixtures: Option<PathBuf>,
        /// Directory served under /static
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
    /// List the fixtures a directory provides
    Fixtures {
        /// Directory holding *.json fixtures
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// - Configuration overrides from the environment are malformed
/// - The server cannot bind or fails while running
/// - The fixture directory cannot be read
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = WorkbenchConfig::from_env().context("reading WORKBENCH_* environment")?;

    match command {
        Commands::Serve {
            host,
            port,
            fixtures,
            static_dir,
        } => {
            let config = apply_serve_overrides(config, host, port, fixtures, static_dir);
            workbench_web::run_server(config)
                .await
                .context("running web server")
        }
        Commands::Fixtures { dir } => {
            let dir = dir.unwrap_or(config.fixtures.fixtures_dir);
            list_fixtures(DirectoryFixtures::new(dir)).await
        }
    }
}

/// Command-line flags win over environment and defaults.
fn apply_serve_overrides(
    mut config: WorkbenchConfig,
    host: Option<String>,
    port: Option<u16>,
    fixtures: Option<PathBuf>,
    static_dir: Option<PathBuf>,
) -> WorkbenchConfig {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(dir) = fixtures {
        config.fixtures.fixtures_dir = dir;
    }
    if let Some(dir) = static_dir {
        config.fixtures.static_dir = dir;
    }
    config
}

async fn list_fixtures(source: DirectoryFixtures) -> anyhow::Result<()> {
    let set = source
        .load()
        .await
        .with_context(|| format!("loading fixtures from {}", source.dir().display()))?;

    println!("Fixtures in {}", source.dir().display());
    println!("{:-<60}", "");
    if set.is_empty() {
        println!("No fixtures found.");
    }
    for line in summarize(&set) {
        println!("{line}");
    }

    Ok(())
}

/// One line per fixture: key and shape.
fn summarize(set: &FixtureSet) -> Vec<String> {
    set.keys()
        .filter_map(|key| set.get(key).map(|value| (key, value)))
        .map(|(key, value)| {
            let shape = match value {
                Value::Array(records) => format!("{} records", records.len()),
                Value::Object(fields) if fields.is_empty() => {
                    "empty object (invalid JSON?)".to_string()
                }
                Value::Object(fields) => {
                    let names: Vec<&str> = fields.keys().map(String::as_str).collect();
                    format!("object with {}", names.join(", "))
                }
                _ => "scalar".to_string(),
            };
            format!("{key:<20} {shape}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_flags_override_config() {
        let config = apply_serve_overrides(
            WorkbenchConfig::default(),
            Some("0.0.0.0".to_string()),
            Some(8080),
            None,
            Some(PathBuf::from("assets")),
        );

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.fixtures.fixtures_dir, PathBuf::from("mock_data"));
        assert_eq!(config.fixtures.static_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_summarize_shapes() {
        let set = FixtureSet::new()
            .with("users", json!([{"id": 1}, {"id": 2}]))
            .with("broken", json!({}))
            .with("forms", json!({"request_form": {}}));

        let lines = summarize(&set);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("broken") && lines[0].ends_with("empty object (invalid JSON?)"));
        assert!(lines[1].ends_with("object with request_form"));
        assert!(lines[2].ends_with("2 records"));
    }
}
