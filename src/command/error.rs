use std::io;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Command bound to a receiver that no longer exists")]
    InvalidBinding,

    #[error("Receiver was dropped before the command executed")]
    ReceiverDropped,

    #[error("Adding this command would make the composite contain itself")]
    CyclicComposition,

    #[error("Only composite commands accept children")]
    NotComposite,

    #[error("No command registered at index {0}")]
    UnknownCommand(usize),
}

#[derive(Error, Debug, PartialEq)]
pub enum ReceiverError {
    #[error("Divisor must not be zero")]
    ZeroDivisor,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Console error: {0}")]
    Io(#[from] io::Error),

    #[error("Command failed: {0}")]
    Command(#[from] CommandError),
}
