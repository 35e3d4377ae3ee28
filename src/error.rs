use std::{error::Error as StdError, fmt};

/// Errors that occurred while putting metric data.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The request body is too large for the ingestion API, either measured after compression
    /// or reported by the API itself.
    ///
    /// Buckets of more than one datum that fail with this error are split in half and sent
    /// again, so callers only see it for a single datum that can never be sent.
    #[error("request size too large: size={size}")]
    RequestSize {
        /// Size of the offending request body in bytes.
        size: usize,
    },

    /// Metric data failed to serialize to JSON.
    ///
    /// Note: This is an error in this crate. If you spot this, please open an issue.
    #[error("serializing request failed with {0}")]
    SerializeRequest(serde_json::Error),

    /// Metric data failed to compress.
    ///
    /// Note: This is an error in this crate. If you spot this, please open an issue.
    #[error("compressing request failed with {0}")]
    CompressRequest(std::io::Error),

    /// Could not complete the HTTP request to the ingestion API.
    #[error("sending request failed with {0}")]
    Connection(Box<dyn StdError + Send + Sync + 'static>),

    /// The ingestion API rejected the request.
    #[error("upload failed with {0}")]
    Upload(String),

    /// More than one request failed.
    #[error(transparent)]
    Multiple(MultiError),
}

impl Error {
    /// Returns `true` if the request was rejected because its body was too large.
    pub fn is_request_size_error(&self) -> bool {
        matches!(self, Error::RequestSize { .. })
    }
}

/// Several errors reported as one.
#[derive(Debug)]
pub struct MultiError {
    errors: Vec<Error>,
}

impl MultiError {
    /// The individual errors, in the order the failed requests were submitted.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Consume this error and return the individual errors.
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("multiple errors: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl StdError for MultiError {}

/// Turns the outcomes of several requests into a single result.
///
/// No errors is success, a single error is returned as is and anything more is wrapped in
/// [`Error::Multiple`], keeping the input order.
pub(crate) fn consolidate_errors(
    errors: impl IntoIterator<Item = Option<Error>>,
) -> Result<(), Error> {
    let mut errors: Vec<Error> = errors.into_iter().flatten().collect();
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(Error::Multiple(MultiError { errors })),
    }
}
