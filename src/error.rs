use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The decimal string was empty or held a byte outside `0`..=`9`.
    #[error("invalid decimal digit at byte {position}")]
    InvalidDigit { position: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
