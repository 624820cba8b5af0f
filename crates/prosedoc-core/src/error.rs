use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("unknown document type: {0}")]
    UnknownDocumentType(String),

    #[error("unknown jurisdiction: {0}")]
    UnknownJurisdiction(String),

    #[error("motion type {id} is not available in {jurisdiction}")]
    MotionNotApplicable { id: String, jurisdiction: String },

    #[error("no document with id {0}")]
    DocumentNotFound(String),

    #[error("no exhibit with id {0}")]
    ExhibitNotFound(String),
}
