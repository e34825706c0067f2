//! Prism CLI - コマンドラインインターフェース
//!
//! ツールチェーン同梱のRust用フォーマッタをLLDBに読み込む初期化を行います。
//! 標準出力にはLLDBコマンドスクリプトだけを書き、ログは標準エラー出力に出します。

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use prism_core::{
    FormatterDirectory, InitConfig, InitOutcome, Initializer, ScriptHost, ToolchainLocator,
    ToolchainProbe, ValueNode,
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Prism - Rust pretty-printer bootstrap for LLDB
#[derive(Parser)]
#[command(name = "prism")]
#[command(version = "0.1.0")]
#[command(about = "Loads the toolchain's Rust formatters into an LLDB session", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: PrismCommand,
}

#[derive(Subcommand)]
enum PrismCommand {
    /// Write an LLDB command script that loads the Rust formatters
    Init {
        #[command(flatten)]
        toolchain: ToolchainArgs,

        #[command(flatten)]
        tuning: TuningArgs,

        /// Write the script to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the discovered compiler, sysroot and formatter directory
    Sysroot {
        #[command(flatten)]
        toolchain: ToolchainArgs,
    },

    /// Summarize a JSON value tree with the registered summary providers
    Inspect {
        /// Path to a JSON value tree ({"type": ..., "value": ..., "children": [...]})
        tree: PathBuf,

        #[command(flatten)]
        toolchain: ToolchainArgs,

        #[command(flatten)]
        tuning: TuningArgs,
    },
}

#[derive(Args)]
struct ToolchainArgs {
    /// Compiler executable name or path
    #[arg(long, env = "RUSTC", default_value = "rustc")]
    rustc: String,

    /// Do not prepend the cargo bin directory to PATH
    #[arg(long)]
    no_path_augmentation: bool,
}

impl ToolchainArgs {
    fn locator(&self) -> ToolchainLocator {
        let locator = InitConfig {
            compiler: self.rustc.clone(),
            ..InitConfig::default()
        }
        .locator();
        if self.no_path_augmentation {
            locator.without_path_augmentation()
        } else {
            locator
        }
    }
}

#[derive(Args)]
struct TuningArgs {
    /// Formatter category to enable
    #[arg(long, default_value = "Rust")]
    category: String,

    /// Maximum rendered string length
    #[arg(long, default_value_t = 10_000)]
    max_string_length: usize,

    /// Type name identifiers treated as URL/URI wrappers (repeatable)
    #[arg(long = "uri-type", value_name = "IDENT")]
    uri_types: Vec<String>,
}

impl TuningArgs {
    fn config(&self, toolchain: &ToolchainArgs) -> InitConfig {
        let mut config = InitConfig {
            compiler: toolchain.rustc.clone(),
            category: self.category.clone(),
            max_string_length: self.max_string_length,
            ..InitConfig::default()
        };
        if !self.uri_types.is_empty() {
            config.uri_identifiers = self.uri_types.clone();
        }
        config
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        PrismCommand::Init {
            toolchain,
            tuning,
            output,
        } => handle_init(&toolchain, &tuning, output),
        PrismCommand::Sysroot { toolchain } => handle_sysroot(&toolchain),
        PrismCommand::Inspect {
            tree,
            toolchain,
            tuning,
        } => handle_inspect(&tree, &toolchain, &tuning),
    }
}

/// ログ出力を初期化する（`RUST_LOG` で上書き可能）
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("prism=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// 初期化を実行してホストを返す
fn run_initializer(toolchain: &ToolchainArgs, tuning: &TuningArgs) -> (ScriptHost, InitOutcome) {
    let initializer = Initializer::new(tuning.config(toolchain));
    let mut host = ScriptHost::new();
    let outcome = initializer.run(&toolchain.locator(), &mut host);
    (host, outcome)
}

/// Initコマンドを処理する
///
/// 初期化に失敗してもエラー終了せず、空のスクリプトを出力します。
fn handle_init(
    toolchain: &ToolchainArgs,
    tuning: &TuningArgs,
    output: Option<PathBuf>,
) -> Result<()> {
    let (host, outcome) = run_initializer(toolchain, tuning);

    if let Some(report) = outcome.report() {
        eprintln!(
            "Loaded {} from {} ({} tuning commands)",
            report.module,
            report.formatter_dir.path().display(),
            report.tuning_commands
        );
    }

    match output {
        Some(path) => {
            host.save(&path)?;
            eprintln!("Wrote LLDB command script to {}", path.display());
        }
        None => host.write_to(io::stdout().lock())?,
    }

    Ok(())
}

/// Sysrootコマンドを処理する
fn handle_sysroot(toolchain: &ToolchainArgs) -> Result<()> {
    let info = toolchain.locator().locate()?;
    println!("compiler:   {}", info.executable_path.display());
    println!("sysroot:    {}", info.sysroot_path.display());

    match FormatterDirectory::for_toolchain(&info) {
        Ok(dir) => println!("formatters: {}", dir.path().display()),
        Err(e) => println!("formatters: unavailable ({})", e),
    }

    Ok(())
}

/// Inspectコマンドを処理する
fn handle_inspect(tree: &Path, toolchain: &ToolchainArgs, tuning: &TuningArgs) -> Result<()> {
    let text = fs::read_to_string(tree).with_context(|| format!("Failed to read {:?}", tree))?;
    let value: ValueNode =
        serde_json::from_str(&text).with_context(|| format!("Invalid value tree in {:?}", tree))?;
    debug!(target: "prism", "[cli] loaded value tree for {}", value.type_name);

    let (host, outcome) = run_initializer(toolchain, tuning);
    if let InitOutcome::Aborted(e) = &outcome {
        anyhow::bail!("Pretty-printers unavailable: {}", e);
    }

    match host.summarize(&value) {
        Some(summary) => println!("{} = {}", value.type_name, summary),
        None => println!("No summary provider for {}", value.type_name),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_tuning_args_to_config() {
        let cli = Cli::try_parse_from([
            "prism",
            "init",
            "--rustc",
            "/opt/toolchain/bin/rustc",
            "--max-string-length",
            "512",
            "--uri-type",
            "Link",
            "--uri-type",
            "Href",
        ])
        .unwrap();

        let PrismCommand::Init { toolchain, tuning, output } = cli.command else {
            panic!("expected init command");
        };
        let config = tuning.config(&toolchain);

        assert!(output.is_none());
        assert_eq!(config.compiler, "/opt/toolchain/bin/rustc");
        assert_eq!(config.category, "Rust");
        assert_eq!(config.max_string_length, 512);
        assert_eq!(config.uri_identifiers, vec!["Link", "Href"]);
    }

    #[test]
    fn test_default_uri_types_are_kept() {
        let cli =
            Cli::try_parse_from(["prism", "inspect", "tree.json", "--rustc", "rustc"]).unwrap();

        let PrismCommand::Inspect { toolchain, tuning, .. } = cli.command else {
            panic!("expected inspect command");
        };
        assert_eq!(
            tuning.config(&toolchain).uri_identifiers,
            InitConfig::default().uri_identifiers
        );
    }
}
