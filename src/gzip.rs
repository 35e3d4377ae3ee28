use crate::Error;
use bytes::Bytes;
use flate2::{write::GzEncoder, Compression};
use http::{header::CONTENT_ENCODING, HeaderValue, Request};
use std::{fmt::Debug, io::Write};

/// Maximum size of a compressed request body.
///
/// The ingestion API documents "Each PutMetricData request is limited to 40 KB in size for HTTP
/// POST requests". That includes the headers, so we leave some room for them.
pub const PUT_METRIC_DATA_REQUEST_SIZE_LIMIT: usize = 38 * 1000;

/// A step run on every outgoing request right before it is sent.
///
/// Decorators may rewrite the request and may fail the attempt. Failing with
/// [`Error::RequestSize`] tells the [`Pager`](crate::Pager) to retry with fewer datum.
pub trait RequestDecorator: Debug + Send + Sync {
    /// Name of the decorator. A request carries at most one decorator of the same name.
    fn name(&self) -> &'static str;

    /// Modify the request.
    fn decorate(&self, request: &mut Request<Bytes>) -> Result<(), Error>;
}

/// Compresses the request body with gzip and rejects bodies that are still too large.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GzipBody {
    size_limit: usize,
}

impl GzipBody {
    /// Create a decorator rejecting compressed bodies larger than `size_limit` bytes.
    pub fn new(size_limit: usize) -> Self {
        Self { size_limit }
    }

    /// Maximum size of the compressed body in bytes.
    pub fn size_limit(&self) -> usize {
        self.size_limit
    }
}

impl Default for GzipBody {
    fn default() -> Self {
        Self::new(PUT_METRIC_DATA_REQUEST_SIZE_LIMIT)
    }
}

impl RequestDecorator for GzipBody {
    fn name(&self) -> &'static str {
        "gzip"
    }

    fn decorate(&self, request: &mut Request<Bytes>) -> Result<(), Error> {
        request
            .headers_mut()
            .insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));

        let compressed = compress(request.body())?;
        if compressed.len() > self.size_limit {
            return Err(Error::RequestSize {
                size: compressed.len(),
            });
        }
        *request.body_mut() = Bytes::from(compressed);
        Ok(())
    }
}

fn compress(body: &[u8]) -> Result<Vec<u8>, Error> {
    let mut gzip_encoder = GzEncoder::new(Vec::new(), Compression::default());
    gzip_encoder
        .write_all(body)
        .map_err(Error::CompressRequest)?;
    gzip_encoder.finish().map_err(Error::CompressRequest)
}
