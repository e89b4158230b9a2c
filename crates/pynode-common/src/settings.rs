use std::{env, path::PathBuf};

use config::{Environment, File};
use log::LevelFilter;
use pynode_matrix::{tags::DEFAULT_TAG_PREFIX, CompatibilityTable, TagNaming, VersionSet};
use serde::{Deserialize, Serialize};

use crate::error::{PynodeError, PynodeResult};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: LevelFilter,

    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    #[serde(default)]
    pub tag_suffix: String,

    #[serde(default = "default_docker_binary")]
    pub docker_binary: String,

    #[serde(default = "default_dockerfile")]
    pub dockerfile: PathBuf,

    #[serde(default = "default_context")]
    pub context: PathBuf,

    #[serde(default)]
    pub versions: VersionSet,

    #[serde(default)]
    pub compatibility: CompatibilityTable,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            tag_prefix: default_tag_prefix(),
            tag_suffix: String::new(),
            docker_binary: default_docker_binary(),
            dockerfile: default_dockerfile(),
            context: default_context(),
            versions: VersionSet::default(),
            compatibility: CompatibilityTable::default(),
        }
    }
}

impl Settings {
    /// Loads settings from the usual config files, `settings_file` when given, and
    /// `PYNODE_*` environment variables, later sources winning.
    pub fn load(settings_file: Option<PathBuf>) -> PynodeResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut s = config::Config::builder()
            .add_source(File::with_name("pynode").required(false))
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config.{}", run_mode)).required(false));

        if let Some(settings_file) = settings_file {
            if !settings_file.is_file() {
                return Err(PynodeError::FileNotFound(
                    settings_file.display().to_string(),
                ));
            }
            s = s.add_source(File::from(settings_file.as_path()));
        }

        let s = s.add_source(Environment::with_prefix("PYNODE")).build()?;

        let cfg: Settings = s.try_deserialize()?;
        cfg.versions.validate()?;
        Ok(cfg)
    }

    pub fn naming(&self) -> TagNaming {
        TagNaming::new(&self.tag_prefix, &self.tag_suffix)
    }
}

fn default_log_level() -> LevelFilter {
    LevelFilter::Info
}

fn default_tag_prefix() -> String {
    DEFAULT_TAG_PREFIX.to_string()
}

fn default_docker_binary() -> String {
    "docker".to_string()
}

fn default_dockerfile() -> PathBuf {
    PathBuf::from("Dockerfile")
}

fn default_context() -> PathBuf {
    PathBuf::from(".")
}
