use std::process::ExitCode;

/// Process exit status for the `transqa` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// No issues at or above error severity were found.
    Success,
    /// At least one error-severity issue was found.
    IssuesFound,
    /// The run itself failed (bad config, unreadable path, etc.).
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::IssuesFound => ExitCode::from(1),
            ExitStatus::Failure => ExitCode::from(2),
        }
    }
}
