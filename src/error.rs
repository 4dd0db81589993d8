//! Error types for loading card lists and planning buy lists.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while reading deck lists or seller inventories.
///
/// The planner itself never sees malformed input; everything here is caught
/// at the file boundary.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line that is not `<quantity> <card name>` with a positive integer
    /// quantity.
    #[error("{path}:{line}: malformed card line: {content:?}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        content: String,
    },

    /// A list file whose name has no usable stem to derive a section or
    /// seller id from.
    #[error("cannot derive a list name from {path}")]
    UnnamedList { path: PathBuf },
}

/// Errors from the buy list planner.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The match table references a seller the inventory set does not know.
    /// This breaks the matcher's invariant and is a bug, not bad user input.
    #[error("match table references unknown seller {seller:?}")]
    UnknownSeller { seller: String },

    /// A matched card with an empty offer list. Also a broken matcher
    /// invariant: a card only enters the table through an offer.
    #[error("matched card {card:?} has no offers")]
    NoOffers { card: String },
}
