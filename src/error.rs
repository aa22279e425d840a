use std::{error, fmt, io, path::PathBuf};

#[derive(Debug, derive_more::From)]
pub enum ZError {
    IOError(io::Error),
    RonDeserializeError {
        error: ron::de::Error,
        path: PathBuf,
    },
    BadConfig {
        path: PathBuf,
        reason: &'static str,
    },
    MqFileError(mq::file::FileError),
    MqFontError(mq::text::FontError),
}

impl ZError {
    pub fn from_ron_de_error(error: ron::de::Error, path: PathBuf) -> Self {
        ZError::RonDeserializeError { error, path }
    }

    pub fn bad_config(path: PathBuf, reason: &'static str) -> Self {
        ZError::BadConfig { path, reason }
    }
}

impl fmt::Display for ZError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ZError::IOError(ref e) => write!(f, "Can't read a file: {}", e),
            ZError::RonDeserializeError { error, path } => {
                write!(f, "'{}' isn't valid RON: {}", path.display(), error)
            }
            ZError::BadConfig { path, reason } => {
                write!(f, "Rejected '{}': {}", path.display(), reason)
            }
            ZError::MqFileError(ref e) => write!(f, "Can't load an asset: {}", e),
            ZError::MqFontError(ref e) => write!(f, "Can't load the font: {}", e),
        }
    }
}

impl error::Error for ZError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ZError::IOError(ref e) => Some(e),
            ZError::RonDeserializeError { error, .. } => Some(error),
            ZError::BadConfig { .. } => None,
            ZError::MqFileError(ref e) => Some(e),
            ZError::MqFontError(ref e) => Some(e),
        }
    }
}
