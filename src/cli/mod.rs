//! CLI command handlers
//!
//! Handlers resolve their options, talk to the node through the
//! repositories and print results. They share an [`AppState`].

pub mod account;
pub mod diagnostic;
pub mod mosaic;
pub mod profile;
pub mod transaction;

use crate::profile::{Profile, ProfileStore};
use crate::repository::{Repositories, RestClient};
use crate::resolver::{DialoguerPrompter, OptionsResolver, Prompter};
use crate::settings::Settings;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Application state
pub struct AppState {
    pub settings: Settings,
    pub store: ProfileStore,
    profile_name: Option<String>,
    allow_prompt: bool,
    prompter: Box<dyn Prompter>,
    repositories: Option<Repositories>,
}

impl AppState {
    /// State with terminal prompts
    pub fn new(settings: Settings, profile_name: Option<String>, allow_prompt: bool) -> Self {
        Self::with_prompter(
            settings,
            profile_name,
            allow_prompt,
            Box::new(DialoguerPrompter::new()),
        )
    }

    pub fn with_prompter(
        settings: Settings,
        profile_name: Option<String>,
        allow_prompt: bool,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        let store = ProfileStore::new(settings.profiles_file.clone());
        Self {
            settings,
            store,
            profile_name,
            allow_prompt,
            prompter,
            repositories: None,
        }
    }

    /// Use these repositories instead of connecting to the profile's node
    pub fn with_repositories(mut self, repositories: Repositories) -> Self {
        self.repositories = Some(repositories);
        self
    }

    pub fn resolver(&self) -> OptionsResolver<'_> {
        OptionsResolver::new(self.prompter.as_ref(), self.allow_prompt)
    }

    /// The profile selected with `--profile`, or the default one
    pub fn profile(&self) -> CliResult<Profile> {
        Ok(self.store.resolve(self.profile_name.as_deref())?)
    }

    /// Repositories talking to the node at `url`
    pub fn repositories(&self, url: &str) -> CliResult<Repositories> {
        if let Some(repositories) = &self.repositories {
            return Ok(repositories.clone());
        }
        let client = RestClient::new(url, self.settings.request_timeout())?;
        Ok(Repositories::from_client(client))
    }
}
