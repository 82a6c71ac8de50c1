use std::fmt;

use thiserror::Error;

/// The remote operations whose failures surface as a single fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadProviders,
    AddProvider,
    UpdateProvider,
    DeleteProvider,
    LoadSchedule,
}

impl Operation {
    /// The message shown in the error slot when this operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::LoadProviders => "Failed to fetch providers",
            Operation::AddProvider => "Failed to add provider",
            Operation::UpdateProvider => "Failed to update provider",
            Operation::DeleteProvider => "Failed to delete provider",
            Operation::LoadSchedule => "Failed to fetch schedule",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::LoadProviders => "load providers",
            Operation::AddProvider => "add provider",
            Operation::UpdateProvider => "update provider",
            Operation::DeleteProvider => "delete provider",
            Operation::LoadSchedule => "load schedule",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Please fill in all fields")]
    Validation,

    #[error("{}", .0.failure_message())]
    RequestFailed(Operation),
}

pub type ClientResult<T> = Result<T, ClientError>;
