//! コンパイラとsysrootの探索

use crate::search_path::{ensure_on_search_path, toolchain_bin_dir, PATH_VAR};
use crate::{Result, ToolchainError};
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

/// デフォルトのコンパイラ名
pub const DEFAULT_COMPILER: &str = "rustc";

/// 探索されたツールチェーンの情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainInfo {
    /// コンパイラ実行ファイルのパス
    pub executable_path: PathBuf,
    /// コンパイラのインストールルート（`rustc --print sysroot`）
    pub sysroot_path: PathBuf,
}

/// ツールチェーン探索のトレイト
///
/// 初期化処理はこのトレイトを通してツールチェーンを取得します。
/// テストでは偽の実装を注入します。
pub trait ToolchainProbe {
    fn locate(&self) -> Result<ToolchainInfo>;
}

/// 実環境のツールチェーン探索器
#[derive(Debug, Clone)]
pub struct ToolchainLocator {
    /// コンパイラ名またはパス
    compiler: String,
    /// `~/.cargo/bin` をPATHに追加するか
    augment_path: bool,
}

impl ToolchainLocator {
    /// 新しい探索器を作成する
    pub fn new(compiler: impl Into<String>) -> Self {
        Self {
            compiler: compiler.into(),
            augment_path: true,
        }
    }

    /// PATHを変更しない探索器にする
    pub fn without_path_augmentation(mut self) -> Self {
        self.augment_path = false;
        self
    }

    /// 探索対象のコンパイラ名
    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    /// ビンディレクトリを指定して探索する
    ///
    /// `bin_dir` がNoneの場合（ホームディレクトリ不明）はPATHを変更せずに探索を続けます。
    pub fn locate_with_bin_dir(&self, bin_dir: Option<PathBuf>) -> Result<ToolchainInfo> {
        if self.augment_path {
            augment_search_path(bin_dir);
        }

        let search_path = env::var_os(PATH_VAR);
        let executable_path = find_compiler(&self.compiler, search_path.as_deref())?;
        info!(target: "prism", "[toolchain] using {}", executable_path.display());

        let sysroot_path = query_sysroot(&executable_path)?;
        info!(target: "prism", "[toolchain] sysroot: {}", sysroot_path.display());

        Ok(ToolchainInfo {
            executable_path,
            sysroot_path,
        })
    }
}

/// ビンディレクトリをPATHに追加する（Noneなら何もしない）
fn augment_search_path(bin_dir: Option<PathBuf>) {
    let Some(dir) = bin_dir else {
        warn!(target: "prism", "[toolchain] home directory unavailable, PATH left unchanged");
        return;
    };

    // PATHに追加できなくても探索は継続する
    if let Err(e) = ensure_on_search_path(&dir) {
        warn!(target: "prism", "[toolchain] {}", e);
    }
}

impl Default for ToolchainLocator {
    fn default() -> Self {
        Self::new(DEFAULT_COMPILER)
    }
}

impl ToolchainProbe for ToolchainLocator {
    fn locate(&self) -> Result<ToolchainInfo> {
        let bin_dir = if self.augment_path {
            toolchain_bin_dir()
        } else {
            None
        };
        self.locate_with_bin_dir(bin_dir)
    }
}

/// 検索パスからコンパイラの実行ファイルを探す
///
/// パス区切りを含む名前はそのままパスとして解釈されます。
pub fn find_compiler(name: &str, search_path: Option<&OsStr>) -> Result<PathBuf> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    which::which_in(name, search_path, cwd).map_err(|e| {
        debug!(target: "prism", "[toolchain] lookup of `{}` failed: {}", name, e);
        ToolchainError::CompilerNotFound {
            name: name.to_string(),
        }
    })
}

/// コンパイラにsysrootを問い合わせる
///
/// 標準出力の最初の1行をトリムしたものをsysrootとします。
pub fn query_sysroot(executable: &Path) -> Result<PathBuf> {
    let query_error = |reason: String| ToolchainError::SysrootQuery {
        executable: executable.to_path_buf(),
        reason,
    };

    let output = Command::new(executable)
        .args(["--print", "sysroot"])
        .output()
        .map_err(|e| query_error(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(query_error(format!("{}: {}", output.status, stderr.trim())));
    }

    parse_sysroot(&output.stdout)
        .ok_or_else(|| query_error("empty or non UTF-8 output".to_string()))
}

/// `--print sysroot` の出力を解釈する
fn parse_sysroot(stdout: &[u8]) -> Option<PathBuf> {
    let text = std::str::from_utf8(stdout).ok()?;
    let line = text.lines().next()?.trim();

    if line.is_empty() {
        None
    } else {
        Some(PathBuf::from(line))
    }
}
