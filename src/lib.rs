//! Put any amount of metric data into a time-series ingestion API with [CloudWatch-style
//! request limits].
//!
//! [CloudWatch-style request limits]: https://docs.aws.amazon.com/AmazonCloudWatch/latest/APIReference/API_PutMetricData.html
//!
//! The ingestion API enforces three limits on every request:
//!
//! | Limit                                | Value         |
//! | ------------------------------------ | ------------- |
//! | Datum per request                    | 20            |
//! | Values per datum                     | 150           |
//! | Compressed request body              | 38,000 bytes  |
//!
//! A [`Pager`] takes care of all of them. It splits datum with too many values into several
//! datum, groups datum into requests, compresses every request body and sends all requests at
//! once. Requests that are still too large after compression are split in half and sent again,
//! until every request fits or a single datum is left that can never be sent.
//!
//! # Usage
//!
//! ```rust,no_run
//! use paged_metric_put::{HttpMetricsClient, MetricDatum, Pager, PutMetricDataInput};
//! # #[derive(Debug)]
//! # struct MyHttpClient;
//! # #[async_trait::async_trait]
//! # impl paged_metric_put::HttpClient for MyHttpClient {
//! #     async fn send(
//! #         &self,
//! #         _request: http::Request<bytes::Bytes>,
//! #     ) -> Result<http::Response<bytes::Bytes>, paged_metric_put::HttpError> {
//! #         unimplemented!()
//! #     }
//! # }
//!
//! async fn publish(http_client: MyHttpClient) -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpMetricsClient::new(http_client, "https://metrics.example.com/")?;
//!     let pager = Pager::new(client)
//!         .with_clear_invalid_units(true)
//!         .with_on_dropped_datum(|datum: &MetricDatum| {
//!             eprintln!("dropped {}", datum.metric_name);
//!         });
//!
//!     let metric_data = (0..100)
//!         .map(|i| MetricDatum::new(format!("metric-{}", i)).with_value(i as f64))
//!         .collect();
//!     pager
//!         .put_metric_data(PutMetricDataInput::new("my-service", metric_data))
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! Any [`PutMetricDataClient`] can be used in place of [`HttpMetricsClient`]. With one of the
//! `reqwest-client*` features enabled, `reqwest::Client` implements [`HttpClient`].
//!
//! # Errors
//!
//! Requests that fail are not retried, except for the splitting of oversized requests. Every
//! datum in a failed request is passed to the
//! [`on_dropped_datum`](Config::on_dropped_datum) callback, and the errors of all failed
//! requests are returned together as [`Error::Multiple`].
//!
//! # Logging
//!
//! Enable the `internal-logs` feature to get [`tracing`](https://docs.rs/tracing) events for
//! split datum, split requests and dropped datum.
#![doc(html_root_url = "https://docs.rs/paged-metric-put/0.1.0")]
#![deny(missing_docs, unreachable_pub, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(test, deny(warnings))]

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "internal-logs")]
        ::tracing::debug!(target: "paged_metric_put", $($arg)*);
        #[cfg(not(feature = "internal-logs"))]
        let _ = || ::std::format!($($arg)*);
    }};
}
pub(crate) use debug;

macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "internal-logs")]
        ::tracing::warn!(target: "paged_metric_put", $($arg)*);
        #[cfg(not(feature = "internal-logs"))]
        let _ = || ::std::format!($($arg)*);
    }};
}
pub(crate) use log_warn;

mod client;
mod convert;
mod error;
mod gzip;
mod http_client;
mod models;
mod pager;
mod split;
mod uploader;

pub use client::PutMetricDataClient;
pub use error::{Error, MultiError};
pub use gzip::{GzipBody, RequestDecorator, PUT_METRIC_DATA_REQUEST_SIZE_LIMIT};
pub use http_client::{HttpClient, HttpError};
pub use models::{
    filter_invalid_unit, is_valid_unit, Dimension, MetricDatum, PutMetricDataInput,
    PutMetricDataOutput, StatisticSet, VALID_UNITS,
};
pub use pager::{Config, OnDroppedDatum, Pager};
pub use split::{bucket_datum, split_large_value_array, MAX_DATUM_SIZE, MAX_VALUES_SIZE};
pub use uploader::HttpMetricsClient;
