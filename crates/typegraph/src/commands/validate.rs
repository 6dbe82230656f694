use crate::commands::schema_files::SchemaFileArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[command(flatten)]
    schema_files: SchemaFileArgs,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.schema_files.build_schema() {
            Ok((schema, num_files)) => {
                log::info!("Validated {num_files} GraphQL files.");
                CommandResult::success(format!(
                    "{} Schema is valid ({} types, {} directives)\n",
                    output_utils::GREEN_CHECK,
                    schema.types().len(),
                    schema.directives().len(),
                ))
            },

            Err(rendered_err) => CommandResult::failure(rendered_err),
        }
    }
}
