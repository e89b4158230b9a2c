use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use pynode_common::debug;

use super::docker_helpers::DockerCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InvocationOutcome {
    Skipped,
    Succeeded,
    Failed(String),
}

/// Executes (or doesn't) one docker invocation.
pub(crate) trait CommandRunner {
    async fn run(&mut self, command: &DockerCommand) -> InvocationOutcome;
}

pub(crate) struct DryRun;

impl CommandRunner for DryRun {
    async fn run(&mut self, _command: &DockerCommand) -> InvocationOutcome {
        InvocationOutcome::Skipped
    }
}

pub(crate) struct ProcessRunner {
    style: ProgressStyle,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        let style = ProgressStyle::with_template("{prefix:.bold.dim} {spinner} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ");
        Self { style }
    }
}

impl CommandRunner for ProcessRunner {
    async fn run(&mut self, command: &DockerCommand) -> InvocationOutcome {
        let pb = ProgressBar::new_spinner();
        pb.set_style(self.style.clone());
        pb.set_prefix(command.args.first().cloned().unwrap_or_default());
        pb.set_message(command.to_command_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        let output = command.to_process().output().await;
        pb.finish_and_clear();

        match output {
            Ok(output) if output.status.success() => {
                debug!("stdout: {}", String::from_utf8_lossy(&output.stdout).trim());
                InvocationOutcome::Succeeded
            }
            Ok(output) => InvocationOutcome::Failed(format!(
                "{}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )),
            Err(e) => InvocationOutcome::Failed(format!(
                "unable to spawn {}: {}",
                command.program, e
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> DockerCommand {
        DockerCommand {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
        }
    }

    #[tokio::test]
    async fn test_dry_run_skips() {
        let outcome = DryRun.run(&sh("exit 1")).await;
        assert_eq!(outcome, InvocationOutcome::Skipped);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_process_runner_sets_buildkit_env() {
        let mut runner = ProcessRunner::default();
        let outcome = runner
            .run(&sh(r#"test "$DOCKER_BUILDKIT" = 1 && test "$BUILDKIT_INLINE_CACHE" = 1"#))
            .await;
        assert_eq!(outcome, InvocationOutcome::Succeeded);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_process_runner_reports_exit_status() {
        let mut runner = ProcessRunner::default();
        match runner.run(&sh("echo broken >&2; exit 3")).await {
            InvocationOutcome::Failed(reason) => {
                assert!(reason.contains('3'), "{}", reason);
                assert!(reason.contains("broken"), "{}", reason);
            }
            outcome => panic!("unexpected outcome: {:?}", outcome),
        }
    }

    #[tokio::test]
    async fn test_process_runner_reports_spawn_failure() {
        let mut runner = ProcessRunner::default();
        let command = DockerCommand {
            program: "pynode-definitely-missing-binary".to_string(),
            args: vec!["build".to_string()],
        };
        match runner.run(&command).await {
            InvocationOutcome::Failed(reason) => assert!(reason.starts_with("unable to spawn")),
            outcome => panic!("unexpected outcome: {:?}", outcome),
        }
    }
}
