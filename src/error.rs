use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("markup error: {0}")]
    Markup(#[from] quick_xml::Error),

    #[error("markup attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("device profile error: {0}")]
    Profile(#[from] serde_json::Error),

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
