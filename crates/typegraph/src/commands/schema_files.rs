use crate::output_utils;
use std::collections::HashSet;
use std::path::PathBuf;
use typegraph_core::Schema;
use typegraph_core::SchemaBuildError;
use typegraph_core::SchemaBuilder;
use typegraph_core::file_reader;
use walkdir::WalkDir;

/// The schema inputs shared by every subcommand.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaFileArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which make up the schema.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl SchemaFileArgs {
    /// Builds one schema from every matching file, in path order. On failure,
    /// returns the rendered diagnostic.
    pub fn build_schema(&self) -> Result<(Schema, usize), String> {
        let file_paths = self.collect_file_paths()?;
        log::debug!("Found {} GraphQL files to load.", file_paths.len());

        SchemaBuilder::from_files(&file_paths)
            .and_then(SchemaBuilder::build)
            .map(|schema| (schema, file_paths.len()))
            .map_err(|err| format!("{} {}", output_utils::RED_X, render_build_error(&err)))
    }

    /// Finds all GraphQL files recursively located at or under each path
    /// passed as an arg.
    fn collect_file_paths(&self) -> Result<Vec<PathBuf>, String> {
        let graphql_file_exts: HashSet<&str> = self.graphql_file_exts
            .iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.map_err(|err| format!(
                    "{} Failed to read {}: {err}",
                    output_utils::RED_X,
                    path.display(),
                ))?;
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }

                let matches_ext = path.extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| graphql_file_exts.contains(&*ext));
                if matches_ext {
                    log::trace!("Found GraphQL file at {path:#?}.");
                    file_paths.push(path.to_path_buf());
                } else {
                    log::trace!("Skipping non-GraphQL file: {path:#?}.");
                }
            }
        }

        // A single file passed explicitly is loaded even if its extension
        // doesn't match `--graphql-file-exts`.
        if file_paths.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file() {
            log::warn!(
                "Proceeding with {only_path:#?} even though it doesn't match \
                any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.join(", "),
            );
            file_paths.push(only_path.to_owned());
        }

        if file_paths.is_empty() {
            return Err(format!(
                "{} No GraphQL files found under the given paths.",
                output_utils::RED_X,
            ));
        }
        Ok(file_paths)
    }
}

/// Syntax errors get a source snippet when their file can be re-read.
fn render_build_error(err: &SchemaBuildError) -> String {
    match err {
        SchemaBuildError::Syntax(parse_error) => {
            let source = parse_error.span()
                .file_path()
                .and_then(|file_path| file_reader::read_content(file_path).ok());
            parse_error.format_detailed(source.as_deref())
        },

        _ => match err.location() {
            Some(location) => format!("{err}\n  --> {location}"),
            None => err.to_string(),
        },
    }
}
