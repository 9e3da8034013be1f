use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A strict read hit a column that holds no value.
    #[error("Column is null.")]
    ColumnNull,
}
