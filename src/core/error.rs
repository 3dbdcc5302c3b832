use thiserror::Error;

/// Programmer-error conditions the generator aborts on. Valid inputs never
/// produce an `Err` after this point (see §7 of the design notes: soft
/// conditions like an unreachable road or a pier-less settlement are
/// handled in place, not surfaced here).
#[derive(Error, Debug)]
pub enum WorldGenError {
    #[error("invalid generation config: {0}")]
    InvalidConfig(String),

    #[error("missing catalog entry: {0}")]
    MissingCatalogEntry(String),

    #[error("noise permutation table construction mismatch: expected {expected} entries, got {actual}")]
    PermutationTableError { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, WorldGenError>;
