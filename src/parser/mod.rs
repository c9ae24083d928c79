//! Extractors: one per record family. Each reads a whole source
//! document and returns typed records, or a single error with nothing
//! partially loaded.

pub mod pages;
pub mod tariffs;
