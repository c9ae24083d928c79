use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the extractors. Both kinds abort the extraction
/// as a whole: the caller never receives a partially populated catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed record: {0}")]
    MalformedRecord(String),
}
