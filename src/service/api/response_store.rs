use std::{
    fs::{self, File},
    io::{self, Read, Write},
    path::PathBuf,
};

use json::JsonValue;

use crate::model::ids::LanguageCode;

use super::{Endpoint, LoadError};

/// Raw API responses on disk, one file per endpoint and language.
#[derive(Debug, Clone)]
pub struct ResponseStore {
    dir: PathBuf,
}

impl ResponseStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, endpoint: Endpoint, language: Option<&LanguageCode>) -> PathBuf {
        match language {
            Some(lang) => self.dir.join(format!("{}_{}.json", endpoint, lang)),
            None => self.dir.join(format!("{}.json", endpoint)),
        }
    }

    pub fn save(&self, endpoint: Endpoint, language: Option<&LanguageCode>, json: &JsonValue) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(endpoint, language);
        let mut file = File::create(&path)?;
        file.write_all(json.pretty(2).as_bytes())?;
        Ok(path)
    }

    pub fn load(&self, endpoint: Endpoint, language: Option<&LanguageCode>) -> Result<JsonValue, LoadError> {
        let mut file = File::open(self.path_for(endpoint, language))?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)?;
        Ok(json::parse(&buf)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_are_kept_per_language() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResponseStore::new(dir.path().join("data"));
        let pl = LanguageCode::from("pl_PL");

        let en = json::parse(r#"{"1": {"id": "1", "name": "Ahri"}}"#).unwrap();
        let localized = json::parse(r#"{"1": {"id": "1", "name": "Ahri PL"}}"#).unwrap();

        store.save(Endpoint::Champions, None, &en).unwrap();
        let path = store.save(Endpoint::Champions, Some(&pl), &localized).unwrap();
        assert_eq!(path.file_name().unwrap(), "champions_pl_PL.json");

        assert_eq!(store.load(Endpoint::Champions, None).unwrap()["1"]["name"], "Ahri");
        assert_eq!(store.load(Endpoint::Champions, Some(&pl)).unwrap()["1"]["name"], "Ahri PL");
    }

    #[test]
    fn endpoints_do_not_share_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResponseStore::new(dir.path());
        let items = json::parse(r#"{"1001": {"name": "Boots", "gold": {"total": 300}}}"#).unwrap();

        let path = store.save(Endpoint::Items, None, &items).unwrap();
        assert_eq!(path.file_name().unwrap(), "items.json");
        assert_eq!(store.load(Endpoint::Items, None).unwrap()["1001"]["name"], "Boots");
        assert!(matches!(
            store.load(Endpoint::Champions, None),
            Err(LoadError::LocalFileError(_))
        ));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResponseStore::new(dir.path());

        assert!(matches!(
            store.load(Endpoint::Champions, Some(&"ko_KR".into())),
            Err(LoadError::LocalFileError(_))
        ));
    }

    #[test]
    fn corrupt_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResponseStore::new(dir.path());
        fs::write(store.path_for(Endpoint::Items, None), "<html>").unwrap();

        assert!(matches!(
            store.load(Endpoint::Items, None),
            Err(LoadError::JsonParseError(_))
        ));
    }
}
