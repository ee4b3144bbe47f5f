use crate::domain::models::{CheckConfig, CheckReport, JsonOut, Manifest};

pub fn announce_config(json: bool, config: &CheckConfig) -> anyhow::Result<()> {
    if !json {
        println!("config: {}", serde_json::to_string(config)?);
    }
    Ok(())
}

pub fn announce_manifest(json: bool, manifest: &Manifest) {
    if !json {
        println!(
            "manifest: {} dependencies, {} peerDependencies, {} devDependencies",
            manifest.dependencies.len(),
            manifest.peer_dependencies.len(),
            manifest.dev_dependencies.len()
        );
    }
}

pub fn print_report(json: bool, report: &CheckReport) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: report.success,
                data: report
            })?
        );
    } else if report.success {
        println!("dependency check passed");
    } else {
        println!(
            "dependency check failed with {} error(s):",
            report.errors.len()
        );
        for e in &report.errors {
            println!("  - {e}");
        }
    }
    Ok(())
}
