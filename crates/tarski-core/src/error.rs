/// Alias for `Result<T, TarskiError>`.
pub type TarskiResult<T> = Result<T, TarskiError>;

/// Errors that can occur when building a world or applying a predicate.
#[derive(Debug, thiserror::Error)]
pub enum TarskiError {
    /// A shape keyword is not one of `cube`, `tet`, `dodec`.
    #[error("unknown shape: \"{0}\" (expected cube, tet, or dodec)")]
    UnknownShape(String),

    /// A size keyword is not one of `small`, `medium`, `large`.
    #[error("unknown size: \"{0}\" (expected small, medium, or large)")]
    UnknownSize(String),

    /// A predicate was applied to the wrong number of entities.
    #[error("{predicate} expects {expected} argument(s), got {found}")]
    Arity {
        /// The predicate's query name.
        predicate: &'static str,
        /// The predicate's fixed arity.
        expected: usize,
        /// The number of arguments supplied.
        found: usize,
    },

    /// A world file could not be parsed.
    #[error("invalid world file: {0}")]
    WorldFile(#[from] serde_json::Error),
}
