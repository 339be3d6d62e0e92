//! Profile persistence
//!
//! All profiles live in one JSON file. Writes go to a temporary file first
//! and are moved into place with an atomic rename.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use super::{Profile, ProfileError};

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProfilesFile {
    profiles: Vec<Profile>,
}

/// Profile storage manager
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<ProfilesFile, ProfileError> {
        if !self.path.exists() {
            return Ok(ProfilesFile::default());
        }
        let reader = BufReader::new(fs::File::open(&self.path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    fn write(&self, file: &ProfilesFile) -> Result<(), ProfileError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        // Write to temporary file first
        let temp_path = self.path.with_extension("json.tmp");
        let writer = BufWriter::new(fs::File::create(&temp_path)?);
        serde_json::to_writer_pretty(writer, file)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path)?;
        log::debug!("Saved {} profile(s) to {:?}", file.profiles.len(), self.path);
        Ok(())
    }

    /// Store a new profile. A default profile demotes the previous one.
    pub fn save(&self, profile: Profile) -> Result<(), ProfileError> {
        let mut file = self.load()?;
        if file.profiles.iter().any(|p| p.name == profile.name) {
            return Err(ProfileError::AlreadyExists(profile.name));
        }
        let make_default = profile.is_default || file.profiles.is_empty();
        if make_default {
            file.profiles.iter_mut().for_each(|p| p.is_default = false);
        }
        let mut profile = profile;
        profile.is_default = make_default;
        log::info!("Storing profile {}", profile.name);
        file.profiles.push(profile);
        self.write(&file)
    }

    /// Replace a stored profile with the same name
    pub fn update(&self, profile: Profile) -> Result<(), ProfileError> {
        let mut file = self.load()?;
        let slot = file
            .profiles
            .iter_mut()
            .find(|p| p.name == profile.name)
            .ok_or_else(|| ProfileError::NotFound(profile.name.clone()))?;
        *slot = profile;
        self.write(&file)
    }

    pub fn find(&self, name: &str) -> Result<Profile, ProfileError> {
        self.load()?
            .profiles
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ProfileError::NotFound(name.to_string()))
    }

    pub fn all(&self) -> Result<Vec<Profile>, ProfileError> {
        Ok(self.load()?.profiles)
    }

    pub fn default_profile(&self) -> Result<Profile, ProfileError> {
        self.load()?
            .profiles
            .into_iter()
            .find(|p| p.is_default)
            .ok_or(ProfileError::NoDefault)
    }

    /// The named profile, or the default one when no name is given
    pub fn resolve(&self, name: Option<&str>) -> Result<Profile, ProfileError> {
        match name {
            Some(name) => self.find(name),
            None => self.default_profile(),
        }
    }

    /// Make `name` the only default profile
    pub fn set_default(&self, name: &str) -> Result<(), ProfileError> {
        let mut file = self.load()?;
        if !file.profiles.iter().any(|p| p.name == name) {
            return Err(ProfileError::NotFound(name.to_string()));
        }
        for profile in &mut file.profiles {
            profile.is_default = profile.name == name;
        }
        self.write(&file)
    }

    pub fn remove(&self, name: &str) -> Result<Profile, ProfileError> {
        let mut file = self.load()?;
        let index = file
            .profiles
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| ProfileError::NotFound(name.to_string()))?;
        let removed = file.profiles.remove(index);
        self.write(&file)?;
        Ok(removed)
    }
}
