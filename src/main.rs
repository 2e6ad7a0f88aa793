//! `cloudenv` 바이너리 진입점.

use cloudenv::interface::cli::{Cli, CliAction};
use cloudenv::interface::composition::AppComposition;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = Cli::parse_action();
    let composition = AppComposition::default();

    let output = match action {
        CliAction::Resolve(options) => composition
            .resolve_cloud_usecase()
            .execute_pretty_json(&options),
        CliAction::ListClouds => Ok(composition.list_clouds_usecase().execute()),
        CliAction::InspectConfig => composition.inspect_config_usecase().execute(),
    };

    match output {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
