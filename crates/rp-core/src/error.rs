use thiserror::Error;

pub type RpResult<T> = Result<T, RpError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpError {
    #[error("Invalid id: {raw} (ids start at 1)")]
    InvalidId { raw: u64 },
}
