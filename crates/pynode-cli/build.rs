extern crate vergen_gitcl;
use anyhow::Result;
use vergen_gitcl::*;

fn main() -> Result<()> {
    vergen()?;
    Ok(())
}

fn vergen() -> Result<()> {
    let build = BuildBuilder::all_build()?;
    let git = GitclBuilder::all_git()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&git)?
        .emit()?;

    Ok(())
}
