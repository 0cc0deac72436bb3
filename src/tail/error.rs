//! Tailer error types.

use std::path::PathBuf;

/// Errors that terminate a tailed line sequence.
#[derive(thiserror::Error, Debug)]
pub enum TailError {
    /// Log file does not exist when the tailer is opened.
    #[error("Log file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied accessing the log file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Any other I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TailError {
    /// Map an open/read error for `path` onto the tailer taxonomy.
    pub(crate) fn from_io(path: &std::path::Path, e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = TailError::NotFound(PathBuf::from("/tmp/output_log.txt"));
        assert_eq!(err.to_string(), "Log file not found: /tmp/output_log.txt");
    }

    #[test]
    fn test_permission_denied_display() {
        let err = TailError::PermissionDenied(PathBuf::from("/root/Player.log"));
        assert_eq!(err.to_string(), "Permission denied: /root/Player.log");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let tail_err: TailError = io_err.into();
        assert!(matches!(tail_err, TailError::Io(_)));
        assert!(tail_err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_from_io_maps_kinds() {
        let path = PathBuf::from("/tmp/x.log");
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            TailError::from_io(&path, missing),
            TailError::NotFound(p) if p == path
        ));

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no");
        assert!(matches!(
            TailError::from_io(&path, denied),
            TailError::PermissionDenied(_)
        ));
    }
}
