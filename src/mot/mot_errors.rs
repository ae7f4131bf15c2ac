use std::fmt;

#[derive(Debug)]
pub enum TrackerError {
    NoObject(NoObjectInTracker),
}

impl From<NoObjectInTracker> for TrackerError {
    fn from(e: NoObjectInTracker) -> Self {
        TrackerError::NoObject(e)
    }
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrackerError::NoObject(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TrackerError {}

#[derive(Debug)]
pub struct NoObjectInTracker {
    pub txt: String,
}
impl fmt::Display for NoObjectInTracker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NoObjectInTracker: {}", self.txt)
    }
}
