use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    #[error("No keywords provided for highlighting")]
    InvalidInput,

    #[error("Could not find a compatible PDF viewer")]
    NoCompatibleViewer,
}
