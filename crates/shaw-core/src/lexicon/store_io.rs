use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;

use super::{LexiconError, LexiconStore};

pub(super) const MAGIC: &[u8; 4] = b"SHLX";
const VERSION: u8 = 1;

/// Length of the `magic + version` prefix shared by every binary lexicon file.
pub(super) const HEADER_SIZE: usize = 5;

/// Prefix a bincode body with its magic and format version.
pub(super) fn frame(magic: &[u8; 4], version: u8, body: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
    buf.extend_from_slice(magic);
    buf.push(version);
    buf.extend_from_slice(body);
    buf
}

/// Check the header and return the body that follows it.
pub(super) fn unframe<'a>(
    magic: &'static [u8; 4],
    version: u8,
    data: &'a [u8],
) -> Result<&'a [u8], LexiconError> {
    if data.len() < HEADER_SIZE {
        return Err(LexiconError::InvalidHeader);
    }
    let (header, body) = data.split_at(HEADER_SIZE);
    if &header[..4] != magic {
        return Err(LexiconError::InvalidMagic(
            std::str::from_utf8(magic).unwrap_or("?"),
        ));
    }
    if header[4] != version {
        return Err(LexiconError::UnsupportedVersion(header[4]));
    }
    Ok(body)
}

impl LexiconStore {
    pub fn to_bytes(&self) -> Result<Vec<u8>, LexiconError> {
        let body = bincode::serialize(self).map_err(LexiconError::Serialize)?;
        Ok(frame(MAGIC, VERSION, &body))
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, LexiconError> {
        let body = unframe(MAGIC, VERSION, data)?;
        let store: LexiconStore = bincode::deserialize(body).map_err(LexiconError::Deserialize)?;
        if store.keys.len() != store.values.len() {
            return Err(LexiconError::InvalidHeader);
        }
        Ok(store)
    }

    /// Open a compiled lexicon through a read-only mapping.
    ///
    /// The store is deserialized from the mapped region, then the mapping is dropped.
    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let file = File::open(path)?;
        // SAFETY: read-only mapping of a file we do not write; it does not
        // outlive this call.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    pub fn save(&self, path: &Path) -> Result<(), LexiconError> {
        Ok(fs::write(path, self.to_bytes()?)?)
    }
}
