use std::env;
use std::path::{Path, PathBuf};

use shaw_core::lexicon::UserLexicon;

/// `$XDG_DATA_HOME/shaw/user_lexicon.shul`, falling back to `~/.local/share`.
pub fn default_user_dict_path() -> PathBuf {
    let data_home = env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let home = env::var_os("HOME").unwrap_or_else(|| "/tmp".into());
            Path::new(&home).join(".local/share")
        });
    data_home.join("shaw").join("user_lexicon.shul")
}

pub fn user_dict_add(path: &Path, word: &str, script: &str, tag: Option<&str>) {
    let dict = die!(UserLexicon::open(path), "Error opening user lexicon: {}");
    let tag_label = tag.unwrap_or("any");
    if dict.register(word, tag, script) {
        if let Some(parent) = path.parent() {
            die!(std::fs::create_dir_all(parent), "Error creating directory: {}");
        }
        die!(dict.save(path), "Error saving user lexicon: {}");
        println!("Added: {word} ({tag_label}) → {script}");
    } else {
        println!("Already exists: {word} ({tag_label}) → {script}");
    }
}

pub fn user_dict_remove(path: &Path, word: &str, script: &str) {
    let dict = die!(UserLexicon::open(path), "Error opening user lexicon: {}");
    if dict.unregister(word, script) {
        die!(dict.save(path), "Error saving user lexicon: {}");
        println!("Removed: {word} → {script}");
    } else {
        println!("Not found: {word} → {script}");
    }
}

pub fn user_dict_list(path: &Path) {
    let dict = die!(UserLexicon::open(path), "Error opening user lexicon: {}");
    let entries = dict.list();
    if entries.is_empty() {
        println!("(empty)");
        return;
    }
    for (word, entry) in &entries {
        println!("{word}\t{}\t{}", entry.tag, entry.script);
    }
    println!("---");
    println!("{} entries", entries.len());
}
