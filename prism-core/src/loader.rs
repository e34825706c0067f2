//! フォーマッタモジュールの読み込み

use crate::command::HostCommand;
use crate::config::InitConfig;
use crate::errors::InitError;
use crate::host::{FormatterModule, Host};
use prism_toolchain::FormatterDirectory;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// ツールチェーンのフォーマッタモジュールを読み込む
///
/// モジュールの読み込みに失敗した場合は初期化を中断します。
/// 続いてホストがコマンド実行インターフェースを提供していれば、
/// 同じディレクトリの補助コマンドスクリプトを読み込ませます。
/// スクリプトが無いことは致命的ではありません。
pub fn load_formatters(
    host: &mut dyn Host,
    dir: &FormatterDirectory,
    config: &InitConfig,
) -> Result<Rc<dyn FormatterModule>, InitError> {
    let module = host
        .import_module(dir.path(), &config.module)
        .map_err(|source| InitError::Import {
            module: config.module.clone(),
            source,
        })?;
    info!(target: "prism", "[loader] imported {} from {}", module.name(), dir.path().display());

    source_command_script(host, dir, config);

    Ok(module)
}

/// 補助コマンドスクリプトを読み込ませる
fn source_command_script(host: &mut dyn Host, dir: &FormatterDirectory, config: &InitConfig) {
    let Some(interface) = host.command_interface() else {
        debug!(
            target: "prism",
            "[loader] host has no command interface, skipping {}",
            config.command_script
        );
        return;
    };

    if !dir.has_script(&config.command_script) {
        warn!(
            target: "prism",
            "[loader] {} not found in {}",
            config.command_script,
            dir.path().display()
        );
        return;
    }

    let command = HostCommand::SourceScript(dir.script(&config.command_script));
    interface.handle_command(&command.to_string());
    info!(target: "prism", "[loader] sourced {}", config.command_script);
}
