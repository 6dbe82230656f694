use crate::commands::schema_files::SchemaFileArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[command(flatten)]
    schema_files: SchemaFileArgs,
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.schema_files.build_schema() {
            Ok((schema, _)) => CommandResult::success(typegraph_core::print_schema(&schema)),

            Err(rendered_err) => CommandResult::failure(rendered_err),
        }
    }
}
