use crate::domain::models::Manifest;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "package.json";

#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("manifest not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read manifest at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse manifest at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn manifest_path(workspace: &str) -> PathBuf {
    Path::new(workspace).join(MANIFEST_FILE)
}

pub fn load_manifest(workspace: &str) -> Result<Manifest, ManifestError> {
    let path = manifest_path(workspace);
    if !path.exists() {
        return Err(ManifestError::NotFound(path));
    }
    let raw = std::fs::read_to_string(&path).map_err(|source| ManifestError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ManifestError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use super::{load_manifest, ManifestError};
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn loads_manifest_with_absent_sections_defaulting_to_empty() {
        let tmp = TempDir::new().expect("temp dir");
        std::fs::write(
            tmp.path().join("package.json"),
            json!({"name": "some-pkg", "dependencies": {"react": "^18.0.0"}}).to_string(),
        )
        .expect("write manifest");

        let m = load_manifest(tmp.path().to_str().expect("utf8 path")).expect("load");
        assert_eq!(m.dependencies.len(), 1);
        assert!(m.peer_dependencies.is_empty());
        assert!(m.dev_dependencies.is_empty());
    }

    #[test]
    fn missing_manifest_is_not_found() {
        let tmp = TempDir::new().expect("temp dir");
        let err = load_manifest(tmp.path().to_str().expect("utf8 path")).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let tmp = TempDir::new().expect("temp dir");
        std::fs::write(tmp.path().join("package.json"), "{not json").expect("write manifest");
        let err = load_manifest(tmp.path().to_str().expect("utf8 path")).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }
}
