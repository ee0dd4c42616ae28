use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Invalid subnet mask: {0}")]
    InvalidMask(String),
    #[error("Prefix length out of range: /{0}")]
    InvalidPrefix(u32),
    #[error("{0}")]
    Usage(String),
}

pub type CalcResult<T> = std::result::Result<T, CalcError>;
