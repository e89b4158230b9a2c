use std::path::PathBuf;

use clap::Args;
use pynode_common::settings::Settings;
use pynode_matrix::VersionList;

/// Command line overrides for the matrix settings.
#[derive(Args, Debug, Clone, Default)]
pub struct MatrixOverrides {
    /// Ubuntu releases to build on, the last one being the latest
    #[arg(long, num_args = 1.., value_name = "VERSION")]
    pub ubuntu_versions: Option<Vec<String>>,
    /// Python versions to build, the last one being the latest
    #[arg(long, num_args = 1.., value_name = "VERSION")]
    pub python_versions: Option<Vec<String>>,
    /// Node versions to build, the last one being the latest
    #[arg(long, num_args = 1.., value_name = "VERSION")]
    pub node_versions: Option<Vec<String>>,

    /// Image repository the tags are created in
    #[arg(long, alias = "tag_prefix")]
    pub tag_prefix: Option<String>,
    /// Appended to every tag
    #[arg(long, alias = "tag_suffix")]
    pub tag_suffix: Option<String>,

    #[arg(long)]
    pub dockerfile: Option<PathBuf>,
    /// Build context
    #[arg(long)]
    pub context: Option<PathBuf>,
}

impl MatrixOverrides {
    pub fn apply(&self, config: &Settings) -> Settings {
        let mut settings = config.clone();
        if let Some(ref versions) = self.ubuntu_versions {
            settings.versions.ubuntu = VersionList::new(versions.iter().cloned());
        }
        if let Some(ref versions) = self.python_versions {
            settings.versions.python = VersionList::new(versions.iter().cloned());
        }
        if let Some(ref versions) = self.node_versions {
            settings.versions.node = VersionList::new(versions.iter().cloned());
        }
        if let Some(ref prefix) = self.tag_prefix {
            settings.tag_prefix = prefix.clone();
        }
        if let Some(ref suffix) = self.tag_suffix {
            settings.tag_suffix = suffix.clone();
        }
        if let Some(ref dockerfile) = self.dockerfile {
            settings.dockerfile = dockerfile.clone();
        }
        if let Some(ref context) = self.context {
            settings.context = context.clone();
        }
        settings
    }
}
