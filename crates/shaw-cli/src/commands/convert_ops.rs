use std::fs;
use std::io::{self, BufWriter, Read};

use shaw_core::fallback::Resolution;
use shaw_core::phoneme::PhonemeMapper;
use shaw_session::{serve, Document, Session};
use tracing::info;

use super::{column_width, pad};
use crate::engine::EngineOptions;

/// Read a token document from a file, or stdin for `-`.
fn read_document(tokens_file: &str) -> Document {
    let json = if tokens_file == "-" {
        let mut buf = String::new();
        die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
        buf
    } else {
        die!(
            fs::read_to_string(tokens_file),
            "Error reading {tokens_file}: {}"
        )
    };
    die!(Document::from_json(&json), "Error parsing tokens: {}")
}

fn open_session(opts: &EngineOptions) -> Session {
    Session::new(die!(opts.build(), "Error: {}"))
}

pub fn convert_cmd(opts: &EngineOptions, tokens_file: &str) {
    let doc = read_document(tokens_file);
    let session = open_session(opts);
    println!("{}", session.convert_document(&doc));
}

pub fn explain_cmd(opts: &EngineOptions, tokens_file: &str, json: bool) {
    let doc = read_document(tokens_file);
    let session = open_session(opts);
    let explained = session.explain_document(&doc);

    if json {
        let out = die!(
            serde_json::to_string_pretty(&explained),
            "Error serializing: {}"
        );
        println!("{out}");
        return;
    }

    for (n, sentence) in explained.iter().enumerate() {
        println!("=== sentence {} ({} tokens) ===", n + 1, sentence.len());
        let text_w = column_width(sentence.iter().map(|t| t.text.as_str()));
        let tag_w = column_width(sentence.iter().map(|t| t.tag.as_str()));
        let rule_w = column_width(sentence.iter().map(|t| t.rule));
        for t in sentence {
            println!(
                "  {}  {}  {}  {}{}",
                pad(&t.text, text_w),
                pad(&t.tag, tag_w),
                pad(t.rule, rule_w),
                t.body,
                if t.whitespace.is_empty() { "" } else { "␣" },
            );
        }
    }
}

pub fn serve_cmd(opts: &EngineOptions) {
    let session = open_session(opts);
    // Readiness signal for the parent process.
    eprintln!("READY");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = die!(
        serve(&session, stdin.lock(), BufWriter::new(stdout.lock())),
        "Error: {}"
    );
    info!(
        answered = stats.answered,
        cached = session.engine().resolver().cache().len(),
        "serve finished"
    );
}

pub fn phonemize_cmd(opts: &EngineOptions, words: &[String]) {
    die!(opts.install_globals(), "Error: {}");
    let resolver = die!(opts.resolver(), "Error: {}");
    let mapper = PhonemeMapper::global();
    let width = column_width(words.iter().map(String::as_str));
    for word in words {
        match resolver.resolve(word) {
            Resolution::Phonemes(ipa) => {
                println!("{}  /{ipa}/  {}", pad(word, width), mapper.map(&ipa));
            }
            Resolution::Unresolved(_) => println!("{}  (unresolved)", pad(word, width)),
        }
    }
}
