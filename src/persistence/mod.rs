use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::Deserialize;

use crate::core::FlashcardError;

const APP_NAME: &str = "flashcards";

pub fn get_app_data_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(data_dir) => data_dir.join(APP_NAME),
        None => PathBuf::from("."),
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

/// Missing files yield `T::default()`.
pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(
    file_path: &Path,
) -> Result<T, FlashcardError> {
    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(file_path)?;
    let data: T = serde_json::from_str(&json)?;
    log::info!("Data loaded from: {}", file_path.display());
    Ok(data)
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(
    filename: &str,
) -> Result<T, FlashcardError> {
    load_json_from(&get_data_file_path(filename))
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Default, Debug, PartialEq)]
    struct Sample {
        name: String,
    }

    #[test]
    fn test_load_json_from() {
        let dir = tempfile::tempdir().unwrap();

        let missing: Sample = load_json_from(&dir.path().join("missing.json")).unwrap();
        assert_eq!(missing, Sample::default());

        let path = dir.path().join("sample.json");
        fs::write(&path, r#"{"name": "deck"}"#).unwrap();
        let sample: Sample = load_json_from(&path).unwrap();
        assert_eq!(sample.name, "deck");

        fs::write(&path, "{").unwrap();
        assert!(matches!(load_json_from::<Sample>(&path), Err(FlashcardError::Json(_))));
    }
}
