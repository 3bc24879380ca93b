use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::dictionary::LocalizedDictionary;
use crate::domain::types::LangCode;
use crate::repository::DictionaryReader;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dictionary {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads dictionaries from `<dir>/<locale>.json`.
#[derive(Debug, Clone)]
pub struct FileDictionaryRepository {
    dir: PathBuf,
}

impl FileDictionaryRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, locale: &LangCode) -> PathBuf {
        self.dir.join(format!("{locale}.json"))
    }
}

impl DictionaryReader for FileDictionaryRepository {
    fn load_dictionary(
        &self,
        locale: &LangCode,
    ) -> Result<Option<LocalizedDictionary>, DictionaryError> {
        let path = self.path_for(locale);

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(DictionaryError::Io { path, source }),
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| DictionaryError::Parse { path, source })
    }
}
