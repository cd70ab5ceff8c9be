//! Configuration module.
//!
//! Settings come from a TOML file, environment variables and command-line
//! flags, resolved in that order of increasing precedence.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

use crate::hook::ChangeIdHook;
use crate::parser::MessageParser;

impl ResolvedConfig {
    /// Build the hook these settings describe.
    pub fn hook(&self) -> ChangeIdHook {
        ChangeIdHook::new(MessageParser::new(self.comment_char)).enabled(self.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_enabled_hook() {
        assert!(ResolvedConfig::default().hook().is_enabled());
    }

    #[test]
    fn disabled_config_builds_disabled_hook() {
        let config = ResolvedConfig {
            enabled: false,
            ..ResolvedConfig::default()
        };
        assert!(!config.hook().is_enabled());
    }
}
