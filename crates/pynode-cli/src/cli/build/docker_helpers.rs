use std::{fmt::Display, path::PathBuf, process::Stdio};

use pynode_common::settings::Settings;
use pynode_matrix::{BuildSpec, ImageTag};
use tokio::process::Command;

/// Environment every docker invocation runs with, enabling the inline build cache.
pub const BUILDKIT_ENV: [(&str, &str); 2] = [("DOCKER_BUILDKIT", "1"), ("BUILDKIT_INLINE_CACHE", "1")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl DockerCommand {
    pub fn to_command_string(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|s| shell_escape::escape(s.as_str().into()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_process(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .envs(BUILDKIT_ENV)
            .stdin(Stdio::null());
        cmd
    }
}

impl Display for DockerCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_command_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerCli {
    pub binary: String,
    pub dockerfile: PathBuf,
    pub context: PathBuf,
}

impl DockerCli {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            binary: settings.docker_binary.clone(),
            dockerfile: settings.dockerfile.clone(),
            context: settings.context.clone(),
        }
    }

    pub fn build_command(&self, spec: &BuildSpec) -> DockerCommand {
        let build_args = [
            ("UBUNTU_VERSION", spec.ubuntu.as_str()),
            ("APT_REPOSITORY", spec.extra_repository.as_deref().unwrap_or("")),
            ("PYTHON_VERSION", spec.python.as_str()),
            ("NODE_VERSION", spec.node.as_str()),
        ];

        let mut args = vec!["build".to_string()];
        for (key, value) in build_args {
            args.extend_from_slice(&["--build-arg".to_string(), format!("{}={}", key, value)]);
        }
        args.extend_from_slice(&[
            "-t".to_string(),
            spec.primary_tag.to_string(),
            "-f".to_string(),
            self.dockerfile.to_string_lossy().into_owned(),
            self.context.to_string_lossy().into_owned(),
        ]);

        DockerCommand {
            program: self.binary.clone(),
            args,
        }
    }

    pub fn tag_command(&self, source: &ImageTag, target: &ImageTag) -> DockerCommand {
        DockerCommand {
            program: self.binary.clone(),
            args: vec!["tag".to_string(), source.to_string(), target.to_string()],
        }
    }

    /// The build of `spec` followed by one tag command per alias.
    pub fn commands_for(&self, spec: &BuildSpec) -> Vec<DockerCommand> {
        std::iter::once(self.build_command(spec))
            .chain(
                spec.alias_tags
                    .iter()
                    .map(|alias| self.tag_command(&spec.primary_tag, alias)),
            )
            .collect()
    }
}
