//! Errors reported by the logarithm kernels

#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum Error {
    /// The magnitude of the input is zero, log2 is undefined there.
    #[error("log2 of a non-positive magnitude is undefined")]
    NonPositive,
}

pub type Result<T> = std::result::Result<T, Error>;
