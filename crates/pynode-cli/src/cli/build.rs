use clap::Parser;
use console::{style, Emoji};
use pynode_common::{info, settings::Settings, warn};
use pynode_matrix::{generate, BuildSpec};

use crate::error::PynodeCliResult;

use self::{
    docker_helpers::DockerCli,
    runner::{CommandRunner, DryRun, InvocationOutcome, ProcessRunner},
};

use super::overrides::MatrixOverrides;

mod docker_helpers;
mod runner;

static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
static TRUCK: Emoji<'_, '_> = Emoji("🚚  ", "");

const BANNER: &str = "============================";

#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Log the docker commands without running them
    #[arg(long, short)]
    pub dry_run: bool,

    #[command(flatten)]
    pub overrides: MatrixOverrides,
}

pub async fn run(args: BuildArgs, config: &Settings) -> PynodeCliResult<()> {
    let settings = args.overrides.apply(config);

    println!(
        "{} Generating build matrix {}",
        style("[1/2]").bold().dim(),
        LOOKING_GLASS
    );
    let specs = generate(
        &settings.versions,
        &settings.compatibility,
        &settings.naming(),
    )?;
    info!("{} images in the build matrix", specs.len());

    println!(
        "{} Issuing docker commands {}",
        style("[2/2]").bold().dim(),
        TRUCK
    );
    let docker = DockerCli::from_settings(&settings);
    let issued = if args.dry_run {
        issue_matrix(&specs, &docker, &mut DryRun).await
    } else {
        issue_matrix(&specs, &docker, &mut ProcessRunner::default()).await
    };
    info!("Issued {} docker commands", issued.len());
    Ok(())
}

/// Logs and hands every command of the matrix to `runner`, in matrix order, returning the
/// logged command lines.
///
/// A failed invocation is only logged: the rest of the matrix is still issued, nothing is
/// retried, and failures are not reported to the caller. A clean return therefore does not
/// mean every image was built; check the `warn` lines.
pub(crate) async fn issue_matrix<R: CommandRunner>(
    specs: &[BuildSpec],
    docker: &DockerCli,
    runner: &mut R,
) -> Vec<String> {
    let mut issued = Vec::new();
    for spec in specs {
        match spec.extra_repository {
            Some(ref repo) => info!(
                "Building {} using the {} apt repository",
                spec.primary_tag, repo
            ),
            None => info!("Building {}", spec.primary_tag),
        }
        info!("{} {} {}", BANNER, spec.primary_tag, BANNER);

        for command in docker.commands_for(spec) {
            let line = command.to_command_string();
            info!("{}", line);

            if let InvocationOutcome::Failed(reason) = runner.run(&command).await {
                warn!("Command failed, continuing with the matrix: {} ({})", line, reason);
            }
            issued.push(line);
        }
    }
    issued
}
