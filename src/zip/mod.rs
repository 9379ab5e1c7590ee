//! In-memory zip archive parsing and recursive SVG extraction.
//!
//! The whole archive is already buffered by the fetcher, so parsing works
//! directly over a byte slice: find the End of Central Directory record at
//! the tail, walk the Central Directory for entry metadata, then read each
//! entry's data through its Local File Header.
//!
//! ## Supported features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - STORED (no compression) and DEFLATE methods, with CRC-32 verification
//!
//! ## Limitations
//!
//! - No ZIP64 support (the source icon archives are a few megabytes;
//!   a ZIP64 archive is rejected with an explicit error)
//! - No encryption or multi-disk support

mod parser;
mod structures;
mod walker;

pub use parser::Archive;
pub use structures::{CompressionMethod, EntryRecord};
pub use walker::{MAX_NESTING, walk};
