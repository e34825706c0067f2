//! 実行ファイル検索パス（PATH）の操作

use crate::{Result, ToolchainError};
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 検索パスの環境変数名
pub const PATH_VAR: &str = "PATH";

/// ユーザーごとのツールチェーンバイナリディレクトリを取得する
///
/// `CARGO_HOME` が設定されていれば `$CARGO_HOME/bin`、なければ `~/.cargo/bin` を返します。
/// ホームディレクトリを判定できない場合は None です。
pub fn toolchain_bin_dir() -> Option<PathBuf> {
    home::cargo_home().ok().map(|dir| dir.join("bin"))
}

/// 検索パスの先頭にディレクトリを追加した値を計算する
///
/// `dir` がすでに含まれている場合は None を返します。
/// 既存のエントリの順序は変更しません。
///
/// # Examples
/// ```
/// use prism_toolchain::prepend_unique;
/// use std::ffi::OsStr;
/// use std::path::Path;
///
/// let updated = prepend_unique(Some(OsStr::new("/usr/bin")), Path::new("/opt/bin")).unwrap();
/// assert_eq!(updated.unwrap(), "/opt/bin:/usr/bin");
/// ```
pub fn prepend_unique(current: Option<&OsStr>, dir: &Path) -> Result<Option<OsString>> {
    // 空のPATHはエントリなしとして扱う（空エントリはカレントディレクトリを意味するため）
    let entries: Vec<PathBuf> = current
        .filter(|value| !value.is_empty())
        .map(|value| env::split_paths(value).collect())
        .unwrap_or_default();

    if entries.iter().any(|entry| entry == dir) {
        return Ok(None);
    }

    let joined = env::join_paths(std::iter::once(dir.to_path_buf()).chain(entries)).map_err(
        |source| ToolchainError::SearchPath {
            dir: dir.to_path_buf(),
            source,
        },
    )?;

    Ok(Some(joined))
}

/// プロセスのPATHにディレクトリを追加する（未登録の場合のみ）
///
/// 追加した場合はtrueを返します。変更はこのプロセス内に限られます。
pub fn ensure_on_search_path(dir: &Path) -> Result<bool> {
    let current = env::var_os(PATH_VAR);

    match prepend_unique(current.as_deref(), dir)? {
        Some(updated) => {
            env::set_var(PATH_VAR, &updated);
            info!(target: "prism", "[toolchain] added {} to PATH", dir.display());
            Ok(true)
        }
        None => {
            debug!(target: "prism", "[toolchain] {} already on PATH", dir.display());
            Ok(false)
        }
    }
}
