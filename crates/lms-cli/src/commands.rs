use anyhow::Context;
use colored::Colorize;
use lms_server::{LmsServer, ServerConfig};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Config(args) => cmd_config(args, &cli.format),
    }
}

/// Resolve the configuration: file (or defaults), then command-line overrides.
pub fn resolve_config(source: &ConfigSource) -> anyhow::Result<ServerConfig> {
    let mut config = match &source.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = source.bind {
        config.bind_addr = bind;
    }
    if !source.allow_origins.is_empty() {
        config.allowed_origins = source.allow_origins.clone();
    }
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args.source)?;
    println!(
        "{} LMS server on {}",
        "✓".green().bold(),
        format!("http://{}", config.bind_addr).bold()
    );
    for origin in &config.allowed_origins {
        println!("  CORS origin: {}", origin.cyan());
    }
    if !config.seed_books.is_empty() {
        println!("  Seed books: {}", config.seed_books.len().to_string().yellow());
    }
    LmsServer::new(config).serve().await?;
    Ok(())
}

fn cmd_config(args: ConfigArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let config = resolve_config(&args.source)?;
    match format {
        OutputFormat::Text => print!("{}", config.to_toml_string()?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_without_sources() {
        let config = resolve_config(&ConfigSource::default()).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let source = ConfigSource {
            config: None,
            bind: Some("0.0.0.0:9000".parse().unwrap()),
            allow_origins: vec!["http://only.test".into()],
        };
        let config = resolve_config(&source).unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.allowed_origins, vec!["http://only.test".to_string()]);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let source = ConfigSource {
            config: Some(PathBuf::from("/definitely/not/here/lms.toml")),
            ..ConfigSource::default()
        };
        let err = resolve_config(&source).unwrap_err();
        assert!(err.to_string().contains("loading config"));
    }
}
