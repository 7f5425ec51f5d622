//! `cplan config` handlers
//!
//! Changes go to the user config file right away. The working curriculum file
//! is never touched here, even when `data_file` moves.

use crate::args::ConfigSubcommand;
use crate::commands::confirm;
use curriculum_planner::config::{unknown_key, Config, KEYS};
use curriculum_planner::{info, verbose};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => show_all(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => set_key(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_key(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

/// One `key = value  # description` line per setting
pub fn settings_table(config: &Config) -> String {
    let width = KEYS.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    KEYS.iter()
        .map(|(name, description)| {
            let value = config.get(name).unwrap_or_default();
            format!("  {name:<width$} = \"{value}\"  # {description}\n")
        })
        .collect()
}

fn show_all(config: &Config) {
    println!("\n=== cplan configuration ===\n");
    print!("{}", settings_table(config));
    println!("\nFile: {}", Config::get_config_file_path().display());
}

fn show_key(config: &Config, key: &str) {
    if let Some(value) = config.get(key) {
        println!("{value}");
    } else {
        eprintln!("✗ {}", unknown_key(key));
        std::process::exit(1);
    }
}

fn save_or_exit(config: &Config) {
    if let Err(e) = config.save() {
        eprintln!(
            "✗ Failed to save {}: {e}",
            Config::get_config_file_path().display()
        );
        std::process::exit(1);
    }
}

fn set_key(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    save_or_exit(config);

    let stored = config.get(key).unwrap_or_default();
    info!("Config {key} changed to '{stored}'");
    println!("✓ {key} = {stored}");
    if matches!(key, "data_file" | "data-file") {
        verbose!("  Existing curriculum files are not moved.");
    }
}

fn unset_key(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    save_or_exit(config);

    let stored = config.get(key).unwrap_or_default();
    println!("✓ {key} restored to default ({stored})");
}

fn reset() {
    let path = Config::get_config_file_path();
    if !path.exists() {
        println!("✓ No config file; defaults already apply");
        return;
    }

    if !confirm(&format!("Delete {} and go back to defaults?", path.display())) {
        println!("✗ Reset cancelled");
        return;
    }
    if let Err(e) = Config::reset() {
        eprintln!("✗ Failed to remove {}: {e}", path.display());
        std::process::exit(1);
    }
    info!("Config file removed: {}", path.display());
    println!("✓ Config reset to defaults");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_table_lists_every_key() {
        let mut config = Config::default();
        config.set("data_file", "/tmp/plan.json").unwrap();
        let table = settings_table(&config);

        assert_eq!(table.lines().count(), KEYS.len());
        assert!(table.contains("data_file   = \"/tmp/plan.json\"  # working curriculum file"));
        assert!(table.contains("verbose     = \"false\""));
    }
}
