//! Download of the ReadLex converter data files.

use std::fs;
use std::io;
use std::path::Path;

const READLEX_BASE_URL: &str = "https://raw.githubusercontent.com/Shavian-info/readlex/main";

/// Lexicon JSON file name.
pub const LEXICON_FILE: &str = "readlex_converter.json";
/// Phrase list file name.
pub const PHRASES_FILE: &str = "readlex_converter_phrases.json";

const FILES: &[&str] = &[LEXICON_FILE, PHRASES_FILE];

/// Download size cap; the lexicon JSON is tens of megabytes.
const MAX_DOWNLOAD_BYTES: u64 = 256 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(String),
}

fn download_file(url: &str, dest: &Path) -> Result<(), FetchError> {
    let body = ureq::get(url)
        .call()
        .map_err(|e| FetchError::Http(format!("{url}: {e}")))?
        .into_body()
        .with_config()
        .limit(MAX_DOWNLOAD_BYTES)
        .read_to_vec()
        .map_err(|e| FetchError::Http(format!("{url}: {e}")))?;
    fs::write(dest, &body)?;
    Ok(())
}

/// Download every data file into `dest`, skipping files already present.
///
/// Returns the names of the files actually downloaded.
pub fn fetch(dest: &Path) -> Result<Vec<&'static str>, FetchError> {
    fs::create_dir_all(dest)?;
    let mut fetched = Vec::new();
    for &name in FILES {
        let path = dest.join(name);
        if path.exists() {
            eprintln!("  {name} (already exists, skipping)");
            continue;
        }
        eprintln!("  {name}");
        download_file(&format!("{READLEX_BASE_URL}/{name}"), &path)?;
        fetched.push(name);
    }
    Ok(fetched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_files_are_not_downloaded() {
        let dir = tempfile::tempdir().unwrap();
        for name in FILES {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        assert!(fetch(dir.path()).unwrap().is_empty());
    }
}
