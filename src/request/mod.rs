//!
//! The compilation request.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;

///
/// The compilation request.
///
/// Immutable once constructed: the project root is absolute, and the contract
/// path has been normalized to the root-relative form `forge build` expects.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationRequest {
    /// The absolute project root directory.
    pub project_root: PathBuf,
    /// The contract source path, relative to the project root.
    pub contract_relative: PathBuf,
}

impl CompilationRequest {
    ///
    /// Resolves and validates the user-provided directory and contract path.
    ///
    /// The directory may start with `~`, which is expanded to the invoking
    /// user's home directory. The contract path may be given either relative
    /// to the root or as an absolute path under the root.
    ///
    pub fn resolve(directory: &str, contract: &str) -> Result<Self, Error> {
        let directory = expand_tilde(directory);
        let project_root = std::fs::canonicalize(&directory)
            .map_err(|_| Error::DirectoryNotFound(directory.to_string_lossy().to_string()))?;
        if !project_root.is_dir() {
            return Err(Error::DirectoryNotFound(
                directory.to_string_lossy().to_string(),
            ));
        }

        let contract = expand_tilde(contract);
        let contract_relative = if contract.is_absolute() {
            contract
                .strip_prefix(&project_root)
                .map(Path::to_path_buf)
                .unwrap_or(contract)
        } else {
            contract
        };

        let contract_absolute = if contract_relative.is_absolute() {
            contract_relative.clone()
        } else {
            project_root.join(&contract_relative)
        };
        if !contract_absolute.is_file() {
            return Err(Error::ContractFileNotFound(
                contract_absolute.to_string_lossy().to_string(),
            ));
        }

        Ok(Self {
            project_root,
            contract_relative,
        })
    }

    ///
    /// The contract source file name, e.g. `Token.sol`.
    ///
    pub fn contract_file_name(&self) -> &str {
        self.contract_relative
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    ///
    /// The contract name: the source file name minus its extension.
    ///
    pub fn contract_name(&self) -> &str {
        self.contract_relative
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
    }
}

///
/// Expands a leading `~` to the invoking user's home directory.
///
/// Paths without the shorthand are returned unchanged.
///
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_in(path, std::env::var_os("HOME").map(PathBuf::from))
}

fn expand_tilde_in(path: &str, home: Option<PathBuf>) -> PathBuf {
    match home {
        Some(home) if path == "~" => home,
        Some(home) => match path.strip_prefix("~/") {
            Some(rest) => home.join(rest),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::expand_tilde_in;
    use super::CompilationRequest;
    use crate::error::Error;

    fn project_with_contract() -> tempfile::TempDir {
        let root = tempfile::tempdir().expect("Always valid");
        std::fs::create_dir(root.path().join("src")).expect("Always valid");
        std::fs::write(root.path().join("src/Token.sol"), "contract Token {}")
            .expect("Always valid");
        root
    }

    #[test]
    fn ok_relative_contract_path() {
        let root = project_with_contract();

        let request = CompilationRequest::resolve(
            root.path().to_str().expect("Always valid"),
            "src/Token.sol",
        )
        .expect("Always valid");

        assert_eq!(request.contract_relative, PathBuf::from("src/Token.sol"));
        assert_eq!(request.contract_file_name(), "Token.sol");
        assert_eq!(request.contract_name(), "Token");
    }

    #[test]
    fn ok_absolute_contract_path_under_root() {
        let root = project_with_contract();
        let canonical = std::fs::canonicalize(root.path()).expect("Always valid");
        let absolute = canonical.join("src/Token.sol");

        let request = CompilationRequest::resolve(
            root.path().to_str().expect("Always valid"),
            absolute.to_str().expect("Always valid"),
        )
        .expect("Always valid");

        assert_eq!(request.contract_relative, PathBuf::from("src/Token.sol"));
    }

    #[test]
    fn error_contract_file_not_found() {
        let root = tempfile::tempdir().expect("Always valid");

        let result = CompilationRequest::resolve(
            root.path().to_str().expect("Always valid"),
            "src/Missing.sol",
        );

        assert!(matches!(result, Err(Error::ContractFileNotFound(_))));
    }

    #[test]
    fn error_directory_not_found() {
        let result = CompilationRequest::resolve("/nonexistent/project/root", "Token.sol");

        assert!(matches!(result, Err(Error::DirectoryNotFound(_))));
    }

    #[test]
    fn ok_tilde_expansion() {
        let home = PathBuf::from("/home/tester");

        assert_eq!(
            expand_tilde_in("~/project", Some(home.clone())),
            PathBuf::from("/home/tester/project"),
        );
        assert_eq!(expand_tilde_in("~", Some(home.clone())), home);
        assert_eq!(
            expand_tilde_in("/absolute/path", Some(home)),
            PathBuf::from("/absolute/path"),
        );
    }

    #[test]
    fn ok_tilde_without_home() {
        assert_eq!(
            expand_tilde_in("~/project", None),
            PathBuf::from("~/project"),
        );
    }
}
