use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Only environment-level failures surface here. Name-based lookups that find nothing and
/// static values that cannot be recovered are ordinary `Option::None` results, never errors;
/// the caller decides whether absence is fatal.
#[derive(Error, Debug)]
pub enum Error {
    /// The decoded assembly view is damaged and could not be consumed.
    ///
    /// The format engine hands over an already-decoded structure; if that structure is
    /// internally inconsistent, the condition is reported unchanged with the source
    /// location where it was detected.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The binary format engine required to decode this input is not available.
    ///
    /// Raw managed binaries (.dll/.exe) need a native decoder backend, which is
    /// distributed separately from this crate. This is fatal for the whole process,
    /// since no partial operation is possible without the decoded view.
    #[error("The '{backend}' decoder backend is required to read this input but is not available")]
    MissingDependency {
        /// Name of the backend component that could not be located
        backend: String,
    },

    /// This file type is not supported by any available format engine.
    #[error("This file type is not supported")]
    NotSupported,

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while reading a decoded view from
    /// disk or writing a patched one back.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Deserialization error from the decoded-view interchange format.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}
