use std::error::Error;
use std::fmt;
use std::io;

/// Errors raised while loading settings or driving a session.
///
/// The simulation itself never fails; every odd game situation is resolved
/// in-band (reflection, respawn).
#[derive(Debug)]
pub enum BrickfallError {
    Io(io::Error),
    Parse(serde_json::Error),
    InvalidSettings(String),
}

impl fmt::Display for BrickfallError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BrickfallError::Io(ref e) => write!(f, "I/O error: {}", e),
            BrickfallError::Parse(ref e) => write!(f, "Settings parse error: {}", e),
            BrickfallError::InvalidSettings(ref s) => write!(f, "Invalid settings: {}", s),
        }
    }
}

impl Error for BrickfallError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            BrickfallError::Io(ref e) => Some(e),
            BrickfallError::Parse(ref e) => Some(e),
            BrickfallError::InvalidSettings(_) => None,
        }
    }
}

impl From<io::Error> for BrickfallError {
    fn from(err: io::Error) -> BrickfallError {
        BrickfallError::Io(err)
    }
}

impl From<serde_json::Error> for BrickfallError {
    fn from(err: serde_json::Error) -> BrickfallError {
        BrickfallError::Parse(err)
    }
}
