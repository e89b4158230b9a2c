mod cli;
mod error;
mod init;

pub use cli::{exec, Cli};
pub use error::{PynodeCliError, PynodeCliResult};
