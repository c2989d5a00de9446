//! Config command handler - Configuration management

use crate::cli::{ConfigArgs, ConfigOperation};
use crate::commands::{render, CommandContext};
use crate::config::{config_file_path, PacksmithConfig};
use crate::error::Result;

/// Run the config command
pub fn run_config(args: &ConfigArgs, ctx: &CommandContext) -> Result<String> {
    match &args.operation {
        ConfigOperation::Show => {
            let config = PacksmithConfig::load()?;

            let json_value = serde_json::json!({
                "_type": "config",
                "workspace_root": config.workspace.root.as_ref().map(|p| p.to_string_lossy().to_string()),
                "default_namespace": config.defaults.namespace,
                "default_pack_format": config.defaults.pack_format,
                "file": config_file_path().map(|p| p.to_string_lossy().to_string()),
            });

            let mut text = config.display();
            if !text.ends_with('\n') {
                text.push('\n');
            }
            render(ctx, json_value, text)
        }

        ConfigOperation::Set { key, value } => {
            let mut config = PacksmithConfig::load()?;
            config.set(key, value)?;
            config.save()?;

            let json_value = serde_json::json!({
                "_type": "config_set",
                "key": key,
                "value": value,
            });
            render(ctx, json_value, format!("{} = {}\n", key, value))
        }

        ConfigOperation::Reset => {
            let mut config = PacksmithConfig::load()?;
            config.reset();
            config.save()?;

            let json_value = serde_json::json!({
                "_type": "config_reset",
            });
            render(ctx, json_value, "configuration reset to defaults\n".to_string())
        }
    }
}
