use std::fs;
use std::path::Path;
use std::process;

use shaw_core::lexicon::{Lexicon, LexiconEntry, LexiconStore, PhraseList, UserLexicon};

use super::{column_width, pad};
use crate::readlex;

const SAMPLE_WORDS: &[&str] = &["the", "read", "tear", "shavian", "london"];

fn open_lexicon(file: &str) -> LexiconStore {
    die!(
        LexiconStore::load(Path::new(file)),
        "Error opening lexicon {file}: {}"
    )
}

fn megabytes(file: &str) -> f64 {
    fs::metadata(file).map(|m| m.len()).unwrap_or(0) as f64 / 1_048_576.0
}

pub fn fetch(output_dir: &str) {
    eprintln!("Fetching ReadLex into {output_dir}...");
    let fetched = die!(
        readlex::fetch(Path::new(output_dir)),
        "Error fetching ReadLex: {}"
    );
    eprintln!("Downloaded {} file(s)", fetched.len());
}

pub fn compile(input_file: &str, output_file: &str) {
    eprintln!("Reading {input_file}...");
    let store = open_lexicon(input_file);
    let (words, entries) = store.stats();
    eprintln!("Compiling {words} words ({entries} entries)...");
    die!(
        store.save(Path::new(output_file)),
        "Error writing lexicon: {}"
    );
    eprintln!("Wrote {output_file} ({:.1} MB)", megabytes(output_file));
}

pub fn info(file: &str) {
    let magic = fs::read(file)
        .ok()
        .and_then(|b| b.get(..4).map(|s| s.to_vec()));

    match magic.as_deref() {
        Some(b"SHUL") => info_user(file),
        Some(_) => info_lexicon(file),
        None => {
            eprintln!("Error reading file: {file}");
            process::exit(1);
        }
    }
}

fn info_lexicon(file: &str) {
    let store = open_lexicon(file);
    let (words, entries) = store.stats();
    let heteronyms = store.iter().filter(|(_, e)| e.len() > 1).count();

    println!("Lexicon:    {file}");
    println!("File size:  {:.1} MB", megabytes(file));
    println!("Words:      {words}");
    println!("Entries:    {entries}");
    println!("Multi-tag:  {heteronyms}");

    println!();
    println!("Sample lookups:");
    for word in SAMPLE_WORDS {
        let found = store.lookup(word);
        if found.is_empty() {
            println!("  {word} → (not found)");
        } else {
            let scripts: Vec<String> = found
                .iter()
                .map(|e| format!("{} [{}]", e.script, e.tag))
                .collect();
            println!("  {word} → {}", scripts.join(", "));
        }
    }
}

fn info_user(file: &str) {
    let dict = die!(
        UserLexicon::open(Path::new(file)),
        "Error opening user lexicon: {}"
    );
    println!("User lexicon: {file}");
    println!("Entries:      {}", dict.list().len());
}

fn print_entries(entries: &[LexiconEntry]) {
    let width = column_width(entries.iter().map(|e| e.tag.as_str()));
    for e in entries {
        println!("  {}  {}", pad(&e.tag, width), e.script);
    }
}

pub fn lookup(lexicon_file: &str, word: &str) {
    let store = open_lexicon(lexicon_file);
    let key = word.to_lowercase();
    let entries = store.lookup(&key);
    if entries.is_empty() {
        println!("{key}: not found");
    } else {
        println!("{key}: {} entries", entries.len());
        print_entries(&entries);
    }
}

pub fn prefix(lexicon_file: &str, query: &str, n: usize) {
    let store = open_lexicon(lexicon_file);
    let results = store.predict(&query.to_lowercase(), n);
    if results.is_empty() {
        println!("{query}: no matches");
        return;
    }
    let width = column_width(results.iter().map(|r| r.word.as_str()));
    for r in &results {
        let scripts: Vec<&str> = r.entries.iter().map(|e| e.script.as_str()).collect();
        println!("{}  {}", pad(&r.word, width), scripts.join(", "));
    }
}

/// Mark known multi-word phrases in `text`, longest match first.
pub fn phrase(phrases_file: &str, text: &str) {
    let phrases = die!(
        PhraseList::open(Path::new(phrases_file)),
        "Error opening phrase list: {}"
    );
    eprintln!("{} phrases", phrases.len());

    let words: Vec<&str> = text.split_whitespace().collect();
    let mut pieces = Vec::new();
    let mut i = 0;
    while i < words.len() {
        match phrases.longest_match(&words[i..]).filter(|&n| n > 1) {
            Some(n) => {
                pieces.push(format!("[{}]", words[i..i + n].join(" ")));
                i += n;
            }
            None => {
                pieces.push(words[i].to_string());
                i += 1;
            }
        }
    }
    println!("{}", pieces.join(" "));
}
