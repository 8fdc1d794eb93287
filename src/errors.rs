use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Run-level failures of an import. Malformed rows are never reported here;
/// they only show up in `RunStatistics::bad_rows`.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("cannot read source {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("email header '{header}' not found")]
    HeaderNotFound { header: String },
}

impl ImportError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: impl Into<io::Error>) -> Self {
        ImportError::SourceUnreadable {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
