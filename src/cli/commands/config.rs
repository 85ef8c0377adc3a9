//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the effective configuration as a TOML file
    #[arg(long)]
    pub toml: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub config_file: String,
    pub data_dir: String,
    pub state_dir: String,
    #[serde(flatten)]
    pub config: &'a Config,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref();

    if args.toml {
        print!("{}", toml::to_string_pretty(config)?);
        return Ok(());
    }

    let xdg = XdgDirs::new();
    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        data_dir: xdg.data_dir.to_string_lossy().into_owned(),
        state_dir: xdg.state_dir.to_string_lossy().into_owned(),
        config,
    };

    match format {
        OutputFormat::Human | OutputFormat::Chat => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  data_dir: {}", response.data_dir);
            println!("  state_dir: {}", response.state_dir);
            println!("  content:");
            println!("    path: {}", config.content.path.display());
            println!("    default_language: {}", config.content.default_language);
            println!("    languages: {:?}", config.content.languages);
            println!("  search:");
            println!("    max_query_length: {}", config.search.max_query_length);
            println!("    snippet_length: {}", config.search.snippet_length);
            println!("  media:");
            println!("    root: {}", config.media.root.display());
            println!("    image_dir: {}", config.media.image_dir);
            println!("    document_dir: {}", config.media.document_dir);
            println!("    image_extensions: {:?}", config.media.image_extensions);
            println!(
                "    document_extensions: {:?}",
                config.media.document_extensions
            );
            println!("  session:");
            println!("    backend: {:?}", config.session.backend);
            println!("    ttl_sec: {}", config.session.ttl_sec);
            println!("    key_prefix: {}", config.session.key_prefix);
            if let Some(dir) = &config.session.dir {
                println!("    dir: {}", dir.display());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
