use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to read folder \"{}\": {source}", path.display())]
    ReadFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Could not determine the home directory")]
    HomeDir,
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Signature time error: {0}")]
    SignatureTime(#[from] gix::date::parse::Error),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for StatsError {
    fn from(err: gix::open::Error) -> Self {
        StatsError::Git(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for StatsError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        StatsError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for StatsError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        StatsError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for StatsError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        StatsError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for StatsError {
    fn from(err: gix::objs::decode::Error) -> Self {
        StatsError::ObjectDecode(Box::new(err))
    }
}
