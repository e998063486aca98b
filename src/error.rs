use thiserror::Error;

#[derive(Error, Debug)]
pub enum CharlistError {
    /// Propagated I/O error while reading input or writing the table.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
