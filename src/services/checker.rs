use crate::domain::models::{CheckConfig, CheckReport, Manifest};
use crate::services::classifier::is_internal;

/// Applies the policy rules for the configured package type and collects
/// every violation rather than failing on the first one. Package types
/// other than `internal_lib` and `bundled_lib` run no rules and pass.
pub fn check(manifest: &Manifest, config: &CheckConfig) -> CheckReport {
    let mut errors = Vec::new();
    let extra = &config.additional_internal_modules;
    let ignored = |name: &str| config.ignore_packages.iter().any(|p| p == name);

    match config.package_type.as_str() {
        "internal_lib" => {
            for name in manifest.dependencies.keys() {
                if is_internal(name, extra) && !ignored(name) {
                    errors.push(format!(
                        "Internal module \"{name}\" found in dependencies. It should be in peerDependencies or devDependencies."
                    ));
                }
            }
            if config.peer_deps_should_be_asterisk {
                for (name, version) in &manifest.peer_dependencies {
                    if is_internal(name, extra) && version != "*" && !ignored(name) {
                        errors.push(format!(
                            "Internal module \"{name}\" in peerDependencies should use \"*\" as version."
                        ));
                    }
                }
            }
        }
        "bundled_lib" => {
            for name in manifest.dependencies.keys() {
                if is_internal(name, extra) && !ignored(name) {
                    errors.push(format!(
                        "Internal module \"{name}\" found in dependencies. Bundled libs cannot have internal dependencies."
                    ));
                }
            }
            for name in manifest.peer_dependencies.keys() {
                if is_internal(name, extra) && !ignored(name) {
                    errors.push(format!(
                        "Internal module \"{name}\" found in peerDependencies. Bundled libs cannot have internal peer dependencies."
                    ));
                }
            }
        }
        // Unrecognized package types run no rules.
        _ => {}
    }

    CheckReport::from_errors(errors)
}
