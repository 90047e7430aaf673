//! Versioned unit/property persistence for specification criteria.
//!
//! Data is a tree of named *units*, each carrying its own floating-point
//! schema version. A unit holds ordered, named, typed *properties* and
//! nested units. Units close in strict LIFO order; both [`UnitWriter`] and
//! [`UnitReader`] enforce this.
//!
//! ## File Layout
//!
//! ```text
//! Library File Layout:
//! ┌──────────────────────────────┐
//! │ Magic: 0x534C4600 ("SLF\0") │  4 bytes
//! │ Format: major.minor          │  2 bytes
//! │ Reserved                     │  2 bytes
//! │ payload_length: u64          │  8 bytes
//! ├──────────────────────────────┤
//! │ JSON payload                 │
//! │   (root unit)                │
//! ├──────────────────────────────┤
//! │ Content Hash (SHA-256)       │  32 bytes
//! └──────────────────────────────┘
//! ```

mod archive;
mod error;
mod file;
mod reader;
mod unit;
mod writer;

pub use archive::Archive;
pub use error::StoreError;
pub use file::{FormatVersion, LibraryFile, MAGIC};
pub use reader::UnitReader;
pub use unit::{Entry, Unit, Value};
pub use writer::UnitWriter;
