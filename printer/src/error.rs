use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("More argument required")]
    MissingArgument,

    #[error("Unexpected argument: `{0}`")]
    TrailingArgument(String),

    #[error("Address out of range: 0x{0:X}")]
    AddressOverflow(usize),

    #[error("Cannot parse `{0}` as number")]
    ParseNumber(String, #[source] std::num::ParseIntError),

    #[error("Failed to format output")]
    Format(#[source] std::fmt::Error),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Invalid config file: {0}")]
    Config(String, #[source] serde_yaml::Error),
}
