use super::{Observation, StoreError};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

const LOG_TARGET: &str = "     store";

/// Indentation used when writing the log, one tab per level.
const INDENT: &[u8] = b"\t";

/// The append-only sequence of observations, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationLog {
    observations: Vec<Observation>,
}

impl ObservationLog {
    #[must_use]
    pub const fn new() -> Self {
        Self { observations: Vec::new() }
    }

    /// Load the log stored at `path`.
    ///
    /// A missing file yields an empty log. A file holding JSON `null` also yields an
    /// empty log, since that is how an empty log was occasionally written in the past.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!(target: LOG_TARGET, "No observation log at '{}', starting empty", path.display());
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let observations: Option<Vec<Observation>> = serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let log = Self {
            observations: observations.unwrap_or_default(),
        };

        log::debug!(target: LOG_TARGET, "Loaded {} observation(s) from '{}'", log.len(), path.display());
        Ok(log)
    }

    /// Write the log to `path`, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let write_err = |source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        self.encode(&mut writer).map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        log::debug!(target: LOG_TARGET, "Saved {} observation(s) to '{}'", self.len(), path.display());
        Ok(())
    }

    /// Serialize the log in its on-disk form.
    pub fn encode<W: Write>(&self, writer: W) -> io::Result<()> {
        let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
        self.observations.serialize(&mut serializer).map_err(io::Error::from)
    }

    pub fn append(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    #[must_use]
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl From<Vec<Observation>> for ObservationLog {
    fn from(observations: Vec<Observation>) -> Self {
        Self { observations }
    }
}
