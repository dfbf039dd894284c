use gsconf_core::{Layer, Store};
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

pub const GLOBAL_SETTINGS_FILE: &str = "settings.json";
pub const GAME_SETTINGS_DIR: &str = "games";

pub struct File<T: Serialize + for<'de> Deserialize<'de>> {
    pub path: Option<PathBuf>,
    pub contents: T,
}

#[derive(Debug)]
pub enum FileError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::Io(err) => write!(f, "I/O error: {err}"),
            FileError::Json(err) => write!(f, "JSON serialization error: {err}"),
        }
    }
}

impl<T: Default + Serialize + for<'de> Deserialize<'de>> File<T> {
    pub fn read(path: &Path, default_on_not_found: bool) -> Result<Self, FileError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                if default_on_not_found && err.kind() == io::ErrorKind::NotFound {
                    return Ok(File {
                        path: Some(path.to_path_buf()),
                        contents: Default::default(),
                    });
                } else {
                    return Err(FileError::Io(err));
                }
            }
        };
        match serde_json::from_str(&content) {
            Ok(result) => Ok(File {
                path: Some(path.to_path_buf()),
                contents: result,
            }),
            Err(err) => Err(FileError::Json(err)),
        }
    }

    pub fn write(&self) -> Result<(), FileError> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(FileError::Io)?;
            }
            fs::write(
                path,
                serde_json::to_vec_pretty(&self.contents).map_err(FileError::Json)?,
            )
            .map_err(FileError::Io)
        } else {
            Ok(())
        }
    }
}

pub fn game_settings_path(config_dir: &Path, serial: &str) -> PathBuf {
    config_dir
        .join(GAME_SETTINGS_DIR)
        .join(format!("{serial}.json"))
}

/// The global settings file and, when editing a game, its override file.
pub struct SettingsFiles {
    pub global: File<Layer>,
    pub game: Option<File<Layer>>,
}

impl SettingsFiles {
    pub fn read(config_dir: &Path, game_serial: Option<&str>) -> Result<Self, FileError> {
        let global = File::read(&config_dir.join(GLOBAL_SETTINGS_FILE), true)?;
        let game = game_serial
            .map(|serial| File::read(&game_settings_path(config_dir, serial), true))
            .transpose()?;
        Ok(SettingsFiles { global, game })
    }

    pub fn store(&self) -> Store {
        match &self.game {
            Some(game) => Store::per_game(self.global.contents.clone(), game.contents.clone()),
            None => Store::global(self.global.contents.clone()),
        }
    }

    /// Copies the edited layer of `store` back into the matching file.
    pub fn update_from(&mut self, store: &Store) {
        match (&mut self.game, store.game_layer()) {
            (Some(file), Some(layer)) => file.contents = layer.clone(),
            _ => self.global.contents = store.base_layer().clone(),
        }
    }

    pub fn write(&self) -> Result<(), FileError> {
        match &self.game {
            Some(game) => game.write(),
            None => self.global.write(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsconf_core::gs;

    #[test]
    fn missing_files_read_as_empty_layers() {
        let dir = tempfile::tempdir().unwrap();
        let files = SettingsFiles::read(dir.path(), Some("SLUS-20312")).unwrap();
        assert!(files.global.contents.is_empty());
        assert!(files.store().is_per_game());
    }

    #[test]
    fn malformed_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(GLOBAL_SETTINGS_FILE), "{ not json").unwrap();
        match SettingsFiles::read(dir.path(), None) {
            Err(FileError::Json(_)) => {}
            Err(err) => panic!("unexpected error: {err}"),
            Ok(_) => panic!("malformed file was accepted"),
        }
    }

    #[test]
    fn game_overrides_are_written_to_their_own_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = SettingsFiles::read(dir.path(), Some("SLES-50330")).unwrap();
        let mut store = files.store();
        store.set(gs::INTEGER_SCALING, Some(&true));
        files.update_from(&store);
        files.write().unwrap();

        assert!(!dir.path().join(GLOBAL_SETTINGS_FILE).exists());
        let reread = SettingsFiles::read(dir.path(), Some("SLES-50330")).unwrap();
        assert_eq!(reread.store().resolve(gs::INTEGER_SCALING).0, true);
        assert!(reread.global.contents.is_empty());
    }
}
