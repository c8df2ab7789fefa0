use std::fs;

use shaw_core::phoneme::{parse_phoneme_toml, DEFAULT_TOML};
use shaw_core::settings;

pub fn ipa_export() {
    print!("{DEFAULT_TOML}");
}

pub fn ipa_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(parse_phoneme_toml(&content), "Error: {}");
    let digraphs = map.keys().filter(|k| k.chars().count() == 2).count();
    println!("OK: {} mappings ({digraphs} digraphs)", map.len());
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: markers.namer={:?}, markers.constructed={:?}, markers.phonetic={:?}, entities={}",
        s.markers.namer,
        s.markers.constructed,
        s.markers.phonetic,
        s.entities.namer_types.len()
    );
}
