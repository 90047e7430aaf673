//! Library file container.
//!
//! A fixed-size header with magic bytes and format version, followed by the
//! JSON-serialized root unit, terminated by a SHA-256 content hash.

use std::io::{Read, Write};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::StoreError;
use crate::unit::{Entry, Unit, Value};

/// Magic bytes identifying a library file: "SLF\0"
pub const MAGIC: [u8; 4] = [0x53, 0x4C, 0x46, 0x00];

/// 4 (magic) + 2 (format) + 2 (reserved) + 8 (payload length)
const HEADER_SIZE: usize = 16;

const HASH_SIZE: usize = 32;

/// Library file format version. Independent of the unit versions inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatVersion {
    pub major: u8,
    pub minor: u8,
}

impl FormatVersion {
    pub const CURRENT: FormatVersion = FormatVersion { major: 1, minor: 0 };

    /// Same major version, and no newer minor than this build writes.
    pub fn is_compatible(&self) -> bool {
        self.major == Self::CURRENT.major && self.minor <= Self::CURRENT.minor
    }
}

impl std::fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A library file: header metadata plus the root unit.
#[derive(Debug, Clone)]
pub struct LibraryFile {
    pub version: FormatVersion,
    pub root: Unit,
}

impl LibraryFile {
    /// Wrap a root unit at the current format version.
    pub fn new(root: Unit) -> Self {
        Self {
            version: FormatVersion::CURRENT,
            root,
        }
    }

    /// Serialize to a writer. Fails on any non-finite float in the tree.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), StoreError> {
        check_finite(&self.root)?;
        let payload =
            serde_json::to_vec(&self.root).map_err(|e| StoreError::Serialization(e.to_string()))?;

        let mut header = Vec::with_capacity(HEADER_SIZE);
        header.extend_from_slice(&MAGIC);
        header.push(self.version.major);
        header.push(self.version.minor);
        header.extend_from_slice(&[0, 0]);
        header.extend_from_slice(&(payload.len() as u64).to_le_bytes());

        let mut hasher = Sha256::new();
        hasher.update(&header);
        hasher.update(&payload);
        let hash: [u8; 32] = hasher.finalize().into();

        writer.write_all(&header)?;
        writer.write_all(&payload)?;
        writer.write_all(&hash)?;

        debug!(
            root = %self.root.name,
            payload_len = payload.len(),
            "wrote library file"
        );
        Ok(())
    }

    /// Serialize to a byte vector.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(buf)
    }

    /// Deserialize from a reader.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, StoreError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Deserialize from a byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self, StoreError> {
        if data.len() < HEADER_SIZE + HASH_SIZE {
            return Err(StoreError::TooShort {
                expected: HEADER_SIZE + HASH_SIZE,
                actual: data.len(),
            });
        }

        if data[0..4] != MAGIC {
            return Err(StoreError::InvalidMagic);
        }

        let version = FormatVersion {
            major: data[4],
            minor: data[5],
        };
        if !version.is_compatible() {
            return Err(StoreError::UnsupportedFormat {
                major: version.major,
                minor: version.minor,
            });
        }

        let mut len_bytes = [0u8; 8];
        len_bytes.copy_from_slice(&data[8..16]);
        let payload_len = usize::try_from(u64::from_le_bytes(len_bytes))
            .map_err(|_| StoreError::malformed("payload length does not fit in memory"))?;

        let expected = HEADER_SIZE
            .checked_add(payload_len)
            .and_then(|n| n.checked_add(HASH_SIZE))
            .ok_or_else(|| StoreError::malformed("payload length overflows"))?;
        if data.len() < expected {
            return Err(StoreError::TooShort {
                expected,
                actual: data.len(),
            });
        }
        if data.len() > expected {
            return Err(StoreError::malformed(format!(
                "{} bytes after the content hash",
                data.len() - expected
            )));
        }

        let payload_end = HEADER_SIZE + payload_len;
        let stored_hash = &data[payload_end..payload_end + HASH_SIZE];

        let mut hasher = Sha256::new();
        hasher.update(&data[..payload_end]);
        let computed: [u8; 32] = hasher.finalize().into();
        if computed != stored_hash {
            return Err(StoreError::HashMismatch);
        }

        let root: Unit = serde_json::from_slice(&data[HEADER_SIZE..payload_end])
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        debug!(root = %root.name, %version, payload_len, "read library file");
        Ok(Self { version, root })
    }
}

fn check_finite(unit: &Unit) -> Result<(), StoreError> {
    for entry in &unit.entries {
        match entry {
            Entry::Property {
                name,
                value: Value::Float(v),
            } if !v.is_finite() => {
                return Err(StoreError::NonFiniteFloat {
                    name: name.clone(),
                    value: *v,
                });
            }
            Entry::Property { .. } => {}
            Entry::Unit(child) => check_finite(child)?,
        }
    }
    Ok(())
}
