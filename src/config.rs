use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::{Classifier, FormationSettings, Taxonomy, TaxonomyError, TeamFormer, DEFAULT_TEAM_SIZE};
use crate::models::{GroupingAxis, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub teams: TeamSettings,
    #[serde(default)]
    pub classifier: ClassifierSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub roster: RosterSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct TeamSettings {
    #[serde(default = "default_target_size")]
    pub target_size: usize,
    #[serde(default = "default_axes")]
    pub axes: Vec<GroupingAxis>,
}

impl Default for TeamSettings {
    fn default() -> Self {
        Self {
            target_size: default_target_size(),
            axes: default_axes(),
        }
    }
}

fn default_target_size() -> usize { DEFAULT_TEAM_SIZE }
fn default_axes() -> Vec<GroupingAxis> {
    vec![GroupingAxis::ObjectiveInterest, GroupingAxis::LanguageRarity]
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassifierSettings {
    #[serde(default)]
    pub negation_aware: bool,
    /// TOML keyword taxonomy; the built-in one is used when unset
    pub taxonomy_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_weight")]
    pub languages: u32,
    #[serde(default = "default_weight")]
    pub objective: u32,
    #[serde(default = "default_weight")]
    pub availability: u32,
    #[serde(default = "default_weight")]
    pub skills: u32,
    #[serde(default = "default_weight")]
    pub experience: u32,
    #[serde(default = "default_weight")]
    pub roles: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            languages: default_weight(),
            objective: default_weight(),
            availability: default_weight(),
            skills: default_weight(),
            experience: default_weight(),
            roles: default_weight(),
        }
    }
}

fn default_weight() -> u32 { 1 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            languages: config.languages,
            objective: config.objective,
            availability: config.availability,
            skills: config.skills,
            experience: config.experience,
            roles: config.roles,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterSettings {
    /// JSON roster served by `GET /api/v1/teams/roster`
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TEAM_FORMER__)
    /// 5. ROSTER_PATH, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TEAM_FORMER__TEAMS__TARGET_SIZE -> teams.target_size
            .add_source(
                Environment::with_prefix("TEAM_FORMER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("TEAM_FORMER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn formation_settings(&self) -> FormationSettings {
        FormationSettings {
            target_team_size: self.teams.target_size,
            axes: self.teams.axes.clone(),
        }
    }

    /// Build the team former described by these settings
    ///
    /// Fails only when a taxonomy file is configured and cannot be read.
    pub fn team_former(&self) -> Result<TeamFormer, TaxonomyError> {
        let taxonomy = match &self.classifier.taxonomy_path {
            Some(path) => Taxonomy::load(path)?,
            None => Taxonomy::default(),
        };
        let classifier = Classifier::new(taxonomy, self.classifier.negation_aware);

        Ok(TeamFormer::new(
            classifier,
            ScoringWeights::from(&self.scoring.weights),
            self.formation_settings(),
        ))
    }
}

/// Apply plain environment variables that do not follow the prefixed scheme
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(roster_path) = std::env::var("ROSTER_PATH") {
        builder = builder.set_override("roster.path", roster_path)?;
    }

    builder.build()
}
