use std::process::ExitCode;

/// What a finished command hands back to `main`: text for stdout on
/// success, or a rendered diagnostic for stderr on failure.
#[derive(Debug)]
pub(crate) enum CommandResult {
    Failure(String),
    Success(String),
}

impl CommandResult {
    pub fn failure(diagnostic: impl Into<String>) -> Self {
        Self::Failure(diagnostic.into())
    }

    pub fn success(output: impl Into<String>) -> Self {
        Self::Success(output.into())
    }

    /// Writes the payload to the matching stream and maps the outcome to a
    /// process exit code.
    pub fn emit(self) -> ExitCode {
        match self {
            Self::Failure(diagnostic) => {
                eprintln!("{diagnostic}");
                ExitCode::FAILURE
            },
            Self::Success(output) => {
                print!("{output}");
                ExitCode::SUCCESS
            },
        }
    }
}
