use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Effective run configuration, assembled once from defaults overridden
/// by CLI/environment input and immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct CheckConfig {
    pub package_type: String,
    pub peer_deps_should_be_asterisk: bool,
    pub additional_internal_modules: Vec<String>,
    pub ignore_packages: Vec<String>,
}

/// Parsed `package.json` dependency declarations. Maps keep manifest
/// declaration order so violations are reported in the order the
/// dependencies were declared.
#[derive(Debug, Deserialize, Default)]
pub struct Manifest {
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
    #[serde(default, rename = "peerDependencies")]
    pub peer_dependencies: IndexMap<String, String>,
    /// Declared but checked by no rule.
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: IndexMap<String, String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckReport {
    pub success: bool,
    pub errors: Vec<String>,
}

impl CheckReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            success: errors.is_empty(),
            errors,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            errors: vec![error],
        }
    }
}
