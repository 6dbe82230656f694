mod print;
mod schema_files;
mod validate;

use crate::Cli;
use crate::CommandResult;
use print::PrintCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "typegraph")]
pub(crate) enum CommandEnum {
    /// Builds a schema from the given files and prints it as canonical SDL.
    Print(Box<PrintCmd>),

    /// Builds a schema from the given files and reports whether it is valid.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Print(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
