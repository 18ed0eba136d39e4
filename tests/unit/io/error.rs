//! Tests for error display, sources and conversions

#[cfg(test)]
mod tests {

    use identicon::io::error::{IdenticonError, invalid_argument};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests display formatting of invalid argument errors
    #[test]
    fn test_invalid_argument_message() {
        let err = invalid_argument("code", &"-3", &"must be non-negative");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'code' = '-3': must be non-negative"
        );
        assert!(err.source().is_none());
    }

    // Tests that I/O errors convert and keep their source
    // Verified by returning None from source for FileSystem
    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: IdenticonError = io.into();

        match &err {
            IdenticonError::FileSystem {
                path, operation, ..
            } => {
                assert_eq!(path, &PathBuf::from("<unknown>"));
                assert_eq!(*operation, "unknown");
            }
            _ => unreachable!("Expected FileSystem error type"),
        }
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing"));
    }

    // Tests display formatting of file system errors with a path
    #[test]
    fn test_file_system_message() {
        let err = IdenticonError::FileSystem {
            path: PathBuf::from("out/icons"),
            operation: "create directory",
            source: std::io::Error::other("denied"),
        };
        assert_eq!(
            err.to_string(),
            "File system error during create directory on 'out/icons': denied"
        );
    }
}
