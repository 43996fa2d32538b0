//! Error types shared by the solver and the game implementation.

use thiserror::Error;

/// Problems found while validating a configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Rank count outside the supported range.
    #[error("rank count {0} is out of range [2, 6]")]
    InvalidRanks(u8),

    /// Copies per rank outside the supported range.
    #[error("copies per rank {0} is out of range [1, 4]")]
    InvalidCopies(u8),

    /// Round count outside the supported range.
    #[error("round count {0} is out of range [1, 3]")]
    InvalidRounds(u8),

    /// Chip amounts that must be positive.
    #[error("{0} must be positive")]
    NonPositive(&'static str),

    /// The raise cap is not reachable in whole raises.
    #[error("raise cap {cap} is not a multiple of the raise increment {increment}")]
    #[allow(missing_docs)]
    UnevenCap { cap: u32, increment: u32 },

    /// A public card that can never be revealed.
    #[error("a public card needs at least two betting rounds")]
    BoardWithoutRound,

    /// A fixed public rank outside the deck.
    #[error("public rank {rank} does not exist in a {ranks}-rank deck")]
    #[allow(missing_docs)]
    BoardOutOfDeck { rank: u8, ranks: u8 },

    /// Not enough cards to deal two hands and a board.
    #[error("deck of {0} cards cannot deal two hands and a board")]
    DeckTooSmall(usize),

    /// Solver iteration settings that make no sense.
    #[error("{0} must be at least 1")]
    ZeroInterval(&'static str),

    /// Average strategy cutoff outside [0, 1).
    #[error("strategy threshold {0} is out of range [0, 1)")]
    InvalidThreshold(f64),
}

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration rejected by `validate()`.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A line that breaks the betting rules.
    #[error("illegal action '{action}' after history '{history}'")]
    #[allow(missing_docs)]
    IllegalAction { history: String, action: char },

    /// A character outside the action alphabet.
    #[error("unknown action symbol '{0}'")]
    Parse(char),

    /// A rank symbol that is not in the configured deck.
    #[error("rank '{0}' is not in the deck")]
    UnknownRank(char),

    /// Average strategy asked of a set with zero accumulated reach.
    #[error("information set {key} was never reached")]
    #[allow(missing_docs)]
    Unreached { key: String },

    /// File access.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
