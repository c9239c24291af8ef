/// Numeric result of a script invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitStatus {
    Success,
    /// The active permission scope rejected author vs. target
    PermissionDenied,
    /// Uncaught failure while a modifier or command was running
    InternalError,
    /// The command body found fewer positional arguments than it needs
    MissingArguments,
    UnknownCommand,
}

impl ExitStatus {
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::PermissionDenied => 2,
            Self::InternalError => 3,
            Self::MissingArguments => 4,
            Self::UnknownCommand => 127,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            2 => Some(Self::PermissionDenied),
            3 => Some(Self::InternalError),
            4 => Some(Self::MissingArguments),
            127 => Some(Self::UnknownCommand),
            _ => None,
        }
    }
}

impl From<ExitStatus> for i32 {
    fn from(status: ExitStatus) -> Self {
        status.code()
    }
}
