use std::fs;

use emoji_engine::settings;

use super::or_exit;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = or_exit(fs::read_to_string(file), &format!("Error reading {file}"));
    let s = or_exit(settings::parse_settings_toml(&content), "Invalid settings");
    let opts = s.to_options();
    println!(
        "OK: emoji_set={}, pattern={}, overrides={}",
        opts.emoji_set,
        opts.pattern,
        opts.overrides.len()
    );
}
