use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "depcheck",
    version,
    about = "Internal dependency policy check for package manifests"
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        env = "GITHUB_WORKSPACE",
        default_value = ".",
        help = "Workspace root containing package.json"
    )]
    pub workspace: String,
    #[arg(
        long,
        env = "INPUT_PACKAGE_TYPE",
        default_value = "internal_lib",
        help = "Policy profile (internal_lib or bundled_lib)"
    )]
    pub package_type: String,
    #[arg(
        long,
        env = "INPUT_PEER_DEPS_SHOULD_BE_ASTERISK",
        default_value = "",
        help = "Require \"*\" versions for internal peerDependencies (\"true\" to enable)"
    )]
    pub peer_deps_should_be_asterisk: String,
    #[arg(
        long,
        env = "INPUT_ADDITIONAL_INTERNAL_MODULES",
        default_value = "",
        help = "Comma-separated package names treated as internal"
    )]
    pub additional_internal_modules: String,
    #[arg(
        long,
        env = "INPUT_IGNORE_PACKAGES",
        default_value = "",
        help = "Comma-separated package names exempt from all checks"
    )]
    pub ignore_packages: String,
}
