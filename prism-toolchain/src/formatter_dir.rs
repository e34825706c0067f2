//! フォーマッタスクリプトディレクトリの解決

use crate::{Result, ToolchainError, ToolchainInfo};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// sysrootからフォーマッタスクリプトディレクトリへの相対パス
pub const FORMATTER_SUBDIR: [&str; 3] = ["lib", "rustlib", "etc"];

/// 存在が確認されたフォーマッタスクリプトディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterDirectory {
    path: PathBuf,
}

impl FormatterDirectory {
    /// sysrootから期待されるディレクトリパスを計算する
    pub fn expected_path(sysroot: &Path) -> PathBuf {
        FORMATTER_SUBDIR
            .iter()
            .fold(sysroot.to_path_buf(), |path, component| path.join(component))
    }

    /// sysrootからディレクトリを解決し、存在を確認する
    pub fn resolve(sysroot: &Path) -> Result<Self> {
        let path = Self::expected_path(sysroot);

        if !path.is_dir() {
            warn!(target: "prism", "[formatters] {} is not a directory", path.display());
            return Err(ToolchainError::FormatterDirMissing(path));
        }

        debug!(target: "prism", "[formatters] found {}", path.display());
        Ok(Self { path })
    }

    /// ツールチェーン情報からディレクトリを解決する
    pub fn for_toolchain(info: &ToolchainInfo) -> Result<Self> {
        Self::resolve(&info.sysroot_path)
    }

    /// ディレクトリのパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ディレクトリ内のスクリプトのパス
    pub fn script(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// ディレクトリ内にスクリプトが存在するか
    pub fn has_script(&self, name: &str) -> bool {
        self.script(name).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_expected_path() {
        assert_eq!(
            FormatterDirectory::expected_path(Path::new("/opt/toolchain")),
            PathBuf::from("/opt/toolchain/lib/rustlib/etc")
        );
    }

    #[test]
    fn test_resolve_existing() {
        let sysroot = tempfile::tempdir().unwrap();
        let etc = sysroot.path().join("lib/rustlib/etc");
        fs::create_dir_all(&etc).unwrap();
        fs::write(etc.join("lldb_commands"), "").unwrap();

        let dir = FormatterDirectory::resolve(sysroot.path()).unwrap();
        assert_eq!(dir.path(), etc.as_path());
        assert!(dir.has_script("lldb_commands"));
        assert!(!dir.has_script("gdb_load_rust_pretty_printers.py"));
    }

    #[test]
    fn test_resolve_missing() {
        let sysroot = tempfile::tempdir().unwrap();
        let err = FormatterDirectory::resolve(sysroot.path()).unwrap_err();
        assert!(matches!(err, ToolchainError::FormatterDirMissing(_)));
    }

    #[test]
    fn test_resolve_file_instead_of_dir() {
        let sysroot = tempfile::tempdir().unwrap();
        fs::create_dir_all(sysroot.path().join("lib/rustlib")).unwrap();
        fs::write(sysroot.path().join("lib/rustlib/etc"), "not a dir").unwrap();

        assert!(FormatterDirectory::resolve(sysroot.path()).is_err());
    }
}
