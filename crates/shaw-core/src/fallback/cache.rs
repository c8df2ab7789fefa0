use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::Resolution;

/// Memo of word → resolution. Append-only: the first resolution stored for a
/// word is kept.
pub trait IpaCache: Send + Sync {
    fn get(&self, word: &str) -> Option<Resolution>;
    fn insert(&self, word: &str, resolution: Resolution);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-wide cache, safe to share between threads.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Resolution>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IpaCache for MemoryCache {
    fn get(&self, word: &str) -> Option<Resolution> {
        let map = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        map.get(word).cloned()
    }

    fn insert(&self, word: &str, resolution: Resolution) {
        let mut map = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        map.entry(word.to_string()).or_insert(resolution);
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Never stores anything.
pub struct NoCache;

impl IpaCache for NoCache {
    fn get(&self, _word: &str) -> Option<Resolution> {
        None
    }

    fn insert(&self, _word: &str, _resolution: Resolution) {}

    fn len(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insert_wins() {
        let cache = MemoryCache::new();
        cache.insert("shaw", Resolution::Phonemes("ʃɔ".into()));
        cache.insert("shaw", Resolution::Unresolved("shaw".into()));
        assert_eq!(cache.get("shaw"), Some(Resolution::Phonemes("ʃɔ".into())));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let cache = MemoryCache::new();
        cache.insert("Shaw", Resolution::Phonemes("ʃɔ".into()));
        assert!(cache.get("shaw").is_none());
    }

    #[test]
    fn no_cache_is_always_empty() {
        let cache = NoCache;
        cache.insert("shaw", Resolution::Phonemes("ʃɔ".into()));
        assert!(cache.get("shaw").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn shared_across_threads() {
        let cache = std::sync::Arc::new(MemoryCache::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cache = std::sync::Arc::clone(&cache);
                std::thread::spawn(move || {
                    cache.insert(&format!("w{i}"), Resolution::Phonemes(format!("p{i}")));
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(cache.len(), 4);
    }
}
