//! カテゴリと表示設定の調整

use crate::command::HostCommand;
use crate::config::{InitConfig, VEC_TYPE_PATTERN};
use crate::host::Host;
use tracing::{debug, info};

/// 発行するコマンド列（順序固定）
///
/// 補助コマンドスクリプトの登録順に依存しないよう、Vecの合成子要素と
/// サマリーを明示的に再登録します。
pub fn tuning_commands(config: &InitConfig) -> Vec<HostCommand> {
    vec![
        HostCommand::EnableCategory(config.category.clone()),
        HostCommand::SetMaxStringLength(config.max_string_length),
        HostCommand::AddSynthetic {
            class: config.synthetic_provider(),
            pattern: VEC_TYPE_PATTERN.to_string(),
            category: config.category.clone(),
        },
        HostCommand::AddSummary {
            function: config.summary_provider(),
            pattern: VEC_TYPE_PATTERN.to_string(),
            category: config.category.clone(),
        },
    ]
}

/// コマンドをホストに発行し、発行した数を返す
pub fn apply(host: &mut dyn Host, config: &InitConfig) -> usize {
    let Some(interface) = host.command_interface() else {
        debug!(target: "prism", "[tuner] host has no command interface, skipping");
        return 0;
    };

    let commands = tuning_commands(config);
    for command in &commands {
        debug!(target: "prism", "[tuner] {}", command);
        interface.handle_command(&command.to_string());
    }

    info!(target: "prism", "[tuner] enabled category {}", config.category);
    commands.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuning_commands_order() {
        let rendered: Vec<String> = tuning_commands(&InitConfig::default())
            .iter()
            .map(|c| c.to_string())
            .collect();

        assert_eq!(
            rendered,
            vec![
                "type category enable Rust".to_string(),
                "settings set target.max-string-summary-length 10000".to_string(),
                r#"type synthetic add -l lldb_lookup.synthetic_lookup -x "^(alloc::([a-z_]+::)+)Vec<.+>$" --category Rust"#.to_string(),
                r#"type summary add -F lldb_lookup.summary_lookup -e -x -h "^(alloc::([a-z_]+::)+)Vec<.+>$" --category Rust"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_tuning_commands_follow_config() {
        let config = InitConfig {
            category: "Custom".into(),
            max_string_length: 512,
            module: "my_lookup".into(),
            ..InitConfig::default()
        };
        let commands = tuning_commands(&config);

        assert_eq!(commands[0], HostCommand::EnableCategory("Custom".into()));
        assert_eq!(commands[1], HostCommand::SetMaxStringLength(512));
        assert!(commands[2].to_string().contains("my_lookup.synthetic_lookup"));
        assert!(commands[3].to_string().ends_with("--category Custom"));
    }
}
