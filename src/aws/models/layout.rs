use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Directory, relative to the working directory, holding the local models.
pub const DEFAULT_MODELS_DIR: &str = "aws-models";

/// Suffix a local entry must carry to be treated as a model.
pub const MODEL_EXTENSION: &str = ".json";

/// Directory inside each upstream model folder that holds the model file.
pub const SMITHY_DIR: &str = "smithy";

/// File name of the upstream model.
pub const SOURCE_MODEL_FILE: &str = "model.json";

/// Returns the model name for a local file name, or `None` when the name
/// does not end with `.json`.
///
/// This is a plain suffix strip: `s3.json` yields `s3`, `a.b.json` yields
/// `a.b` and a bare `.json` yields the empty name.
pub fn model_name(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(MODEL_EXTENSION)
}

/// [`model_name`] for raw directory entry names, which need not be UTF-8.
#[cfg(unix)]
pub fn model_name_os(file_name: &OsStr) -> Option<&OsStr> {
    use std::os::unix::ffi::OsStrExt;

    file_name
        .as_bytes()
        .strip_suffix(MODEL_EXTENSION.as_bytes())
        .map(OsStr::from_bytes)
}

/// [`model_name`] for raw directory entry names. Names that are not valid
/// Unicode never match here.
#[cfg(not(unix))]
pub fn model_name_os(file_name: &OsStr) -> Option<&OsStr> {
    file_name.to_str().and_then(model_name).map(OsStr::new)
}

/// Builds `<repo_path>/<model_name>/smithy/model.json`.
pub fn source_model_path(repo_path: &Path, model_name: impl AsRef<Path>) -> PathBuf {
    repo_path
        .join(model_name)
        .join(SMITHY_DIR)
        .join(SOURCE_MODEL_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_the_trailing_suffix() {
        assert_eq!(model_name("dynamodb.json"), Some("dynamodb"));
        assert_eq!(model_name("api.gateway.json"), Some("api.gateway"));
        assert_eq!(model_name("s3.json.json"), Some("s3.json"));
        assert_eq!(model_name(".json"), Some(""));
    }

    #[test]
    fn rejects_names_without_the_suffix() {
        assert_eq!(model_name("README.md"), None);
        assert_eq!(model_name("model.JSON"), None);
        assert_eq!(model_name("model.json.bak"), None);
        assert_eq!(model_name("json"), None);
    }

    #[test]
    fn os_names_follow_the_same_rules() {
        assert_eq!(model_name_os(OsStr::new("ec2.json")), Some(OsStr::new("ec2")));
        assert_eq!(model_name_os(OsStr::new("ec2.json.bak")), None);
    }

    #[cfg(unix)]
    #[test]
    fn os_names_strip_the_suffix_from_non_utf8_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let name = model_name_os(OsStr::from_bytes(b"\xffsvc.json"));
        assert_eq!(name, Some(OsStr::from_bytes(b"\xffsvc")));
    }

    #[test]
    fn source_path_nests_under_smithy() {
        let path = source_model_path(Path::new("/checkout/models"), "sts");
        assert_eq!(path, PathBuf::from("/checkout/models/sts/smithy/model.json"));
    }
}
