use crate::cli::Cli;
use crate::domain::models::CheckConfig;

pub fn build_config(cli: &Cli) -> CheckConfig {
    CheckConfig {
        package_type: cli.package_type.clone(),
        peer_deps_should_be_asterisk: cli.peer_deps_should_be_asterisk == "true",
        additional_internal_modules: split_list(&cli.additional_internal_modules),
        ignore_packages: split_list(&cli.ignore_packages),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_list;

    #[test]
    fn split_list_trims_entries() {
        assert_eq!(
            split_list(" @tscircuit/core , jscad-fiber "),
            vec!["@tscircuit/core".to_string(), "jscad-fiber".to_string()]
        );
    }

    #[test]
    fn split_list_of_empty_string_is_empty() {
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
    }
}
