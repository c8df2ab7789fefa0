pub mod classifier;
pub mod fallback;
pub mod lexicon;
pub mod phoneme;
pub mod settings;
pub mod unicode;
