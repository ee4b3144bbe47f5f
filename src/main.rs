use clap::Parser;

mod cli;
mod domain;
mod services;

use cli::Cli;
use domain::models::CheckReport;
use services::checker::check;
use services::config::build_config;
use services::manifest::load_manifest;
use services::output::{announce_config, announce_manifest, print_report};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    announce_config(cli.json, &config)?;

    let report = match load_manifest(&cli.workspace) {
        Ok(manifest) => {
            announce_manifest(cli.json, &manifest);
            check(&manifest, &config)
        }
        Err(e) => CheckReport::failed(e.to_string()),
    };

    print_report(cli.json, &report)?;
    if !report.success {
        std::process::exit(1);
    }
    Ok(())
}
