//! Configuration persistence
//!
//! The configuration is stored as a fixed-size blob:
//!
//! | Offset | Size | Content |
//! |---|---|---|
//! | 0 | 2 | header size (configuration incl. both size fields), LE |
//! | 2 | 2 | extension size, LE |
//! | 4 | .. | configuration body |
//! | header size | extension size | schedule extension |
//!
//! Both size fields are checked on load: a blob written by a build with a
//! different layout is rejected as a whole.

mod autosave;
mod codec;

use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use autosave::{AUTOSAVE_DELAY, Autosave};
use codec::{ByteReader, ByteWriter, Persist};

use crate::config::{Configuration, ScheduleState};
use crate::mode::ModeId;

/// Size of the two size fields at the start of the blob
const SIZE_FIELDS: usize = 4;

/// Encoded configuration size, including the size fields
pub const CONFIGURATION_SIZE: usize = SIZE_FIELDS + <Configuration as Persist>::SIZE;

/// Encoded schedule extension size
pub const EXTENSION_SIZE: usize = <ScheduleState as Persist>::SIZE;

/// Total persisted region size
pub const STORE_SIZE: usize = CONFIGURATION_SIZE + EXTENSION_SIZE;

/// Byte-addressable persistent region (EEPROM or emulated flash)
pub trait PersistentStore {
    type Error: fmt::Debug;

    /// Read one byte of the region
    fn read_byte(&self, offset: usize) -> u8;

    /// Stage one byte for writing
    fn write_byte(&mut self, offset: usize, value: u8);

    /// Flush staged writes to the medium
    fn commit(&mut self) -> Result<(), Self::Error>;
}

/// Reasons a persisted blob is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// Stored configuration size differs from this build
    HeaderMismatch { expected: u16, found: u16 },
    /// Stored extension size differs from this build
    ExtensionMismatch { expected: u16, found: u16 },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeaderMismatch { expected, found } => {
                write!(f, "configuration size {found}, expected {expected}")
            }
            Self::ExtensionMismatch { expected, found } => {
                write!(f, "extension size {found}, expected {expected}")
            }
        }
    }
}

/// Configuration and extension restored from a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredState {
    pub config: Configuration,
    pub schedule: ScheduleState,
}

/// Serialize configuration and extension into a blob
#[allow(clippy::cast_possible_truncation)]
pub fn encode(config: &Configuration, schedule: &ScheduleState) -> [u8; STORE_SIZE] {
    let mut blob = [0; STORE_SIZE];
    let mut w = ByteWriter::new(&mut blob);
    w.u16(CONFIGURATION_SIZE as u16);
    w.u16(EXTENSION_SIZE as u16);
    config.encode(&mut w);
    schedule.encode(&mut w);
    blob
}

/// Deserialize a blob, validating its size fields
///
/// Mode ids outside the catalog decode as `Off`.
#[allow(clippy::cast_possible_truncation)]
pub fn decode(blob: &[u8; STORE_SIZE]) -> Result<StoredState, LoadError> {
    let mut r = ByteReader::new(blob);
    let header = r.u16();
    let extension = r.u16();
    if usize::from(header) != CONFIGURATION_SIZE {
        return Err(LoadError::HeaderMismatch {
            expected: CONFIGURATION_SIZE as u16,
            found: header,
        });
    }
    if usize::from(extension) != EXTENSION_SIZE {
        return Err(LoadError::ExtensionMismatch {
            expected: EXTENSION_SIZE as u16,
            found: extension,
        });
    }
    let config = Configuration::decode(&mut r);
    let schedule = ScheduleState::decode(&mut r);
    Ok(StoredState { config, schedule })
}

/// Read and validate the configuration from a store
///
/// A special mode that was running when the blob was saved becomes the
/// active mode so that it restarts on boot.
pub fn load<S: PersistentStore>(store: &S) -> Result<StoredState, LoadError> {
    let mut blob = [0; STORE_SIZE];
    for (offset, byte) in blob.iter_mut().enumerate() {
        *byte = store.read_byte(offset);
    }
    let mut state = decode(&blob)?;
    if state.config.special_mode != ModeId::Off {
        state.config.mode = state.config.special_mode;
    }
    Ok(state)
}

/// Write configuration and extension to a store and commit
pub fn save<S: PersistentStore>(
    store: &mut S,
    config: &Configuration,
    schedule: &ScheduleState,
) -> Result<(), S::Error> {
    let blob = encode(config, schedule);
    for (offset, byte) in blob.iter().enumerate() {
        store.write_byte(offset, *byte);
    }
    #[cfg(feature = "esp32-log")]
    println!("[storage.save] writing {} bytes", STORE_SIZE);
    store.commit()
}

/// RAM-backed store, useful on hosts and in tests
#[derive(Debug, Clone)]
pub struct MemoryStore {
    bytes: [u8; STORE_SIZE],
    commits: u32,
}

impl MemoryStore {
    /// Create a store in the erased state (all bytes `0xFF`)
    pub const fn new() -> Self {
        Self {
            bytes: [0xFF; STORE_SIZE],
            commits: 0,
        }
    }

    /// Raw contents of the region
    pub const fn bytes(&self) -> &[u8; STORE_SIZE] {
        &self.bytes
    }

    /// Mutable raw contents, for simulating corruption
    pub const fn bytes_mut(&mut self) -> &mut [u8; STORE_SIZE] {
        &mut self.bytes
    }

    /// Number of successful commits
    pub const fn commits(&self) -> u32 {
        self.commits
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PersistentStore for MemoryStore {
    type Error = core::convert::Infallible;

    fn read_byte(&self, offset: usize) -> u8 {
        self.bytes.get(offset).copied().unwrap_or(0xFF)
    }

    fn write_byte(&mut self, offset: usize, value: u8) {
        if let Some(slot) = self.bytes.get_mut(offset) {
            *slot = value;
        }
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        self.commits += 1;
        Ok(())
    }
}
