//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};
use url::Url;

use crate::application::usecases::resolve_cloud::ResolveOptions;

#[derive(Debug, Parser)]
#[command(name = "cloudenv")]
#[command(about = "Resolve Azure cloud environments and resource manager endpoints")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a cloud configuration and print it as JSON
    Resolve {
        /// Cloud name (case-insensitive, e.g. AzurePublicCloud)
        #[arg(long)]
        cloud: Option<String>,

        /// Resource manager endpoint override
        #[arg(long, value_parser = parse_endpoint)]
        endpoint: Option<String>,
    },
    /// List known cloud names
    Clouds,
    /// Show effective merged config and its resolution result
    Config,
}

#[derive(Debug)]
pub enum CliAction {
    Resolve(ResolveOptions),
    ListClouds,
    InspectConfig,
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        match self.command {
            Commands::Resolve { cloud, endpoint } => {
                CliAction::Resolve(ResolveOptions { cloud, endpoint })
            }
            Commands::Clouds => CliAction::ListClouds,
            Commands::Config => CliAction::InspectConfig,
        }
    }
}

/// URL 형식만 확인하고 입력 문자열은 그대로 넘긴다.
fn parse_endpoint(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    Url::parse(trimmed).map_err(|err| format!("invalid endpoint URL '{trimmed}': {err}"))?;
    Ok(trimmed.to_string())
}
