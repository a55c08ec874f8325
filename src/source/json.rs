use std::path::Path;

use tracing::{debug, instrument};

use crate::error::{Result, RosterError};
use crate::model::ContributorRecord;

use super::RosterSource;

/// A roster kept in a JSON document: a top-level array of records.
///
/// ```json
/// [
///   {
///     "photoUrl": "https://avatars.githubusercontent.com/u/1?v=4",
///     "name": "Ana",
///     "bio": "Desenvolvedora",
///     "links": { "github": "https://github.com/ana", "telegram": "" }
///   }
/// ]
/// ```
///
/// Missing keys read as empty strings.
#[derive(Debug, Clone)]
pub struct JsonRoster {
    records: Vec<ContributorRecord>,
}

impl JsonRoster {
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ContributorRecord> = serde_json::from_str(json)?;
        debug!(count = records.len(), "parsed roster JSON");
        Ok(Self { records })
    }

    #[instrument]
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| RosterError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }
}

impl RosterSource for JsonRoster {
    fn records(&self) -> Result<Vec<ContributorRecord>> {
        Ok(self.records.clone())
    }
}
