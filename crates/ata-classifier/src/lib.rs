//! ATA line classifier: normalizes physical lines and turns each surviving
//! line into one [`ata_types::Statement`].

pub mod classifier;
pub mod keyword;
pub mod normalizer;

pub use classifier::{classify, classify_line};
pub use keyword::{keyword_for, Keyword, KeywordForm, KEYWORDS};
pub use normalizer::{normalize, normalize_source, COMMENT_PREFIX};
