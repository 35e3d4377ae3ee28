use crate::{
    client::PutMetricDataClient,
    error::consolidate_errors,
    gzip::{GzipBody, RequestDecorator, PUT_METRIC_DATA_REQUEST_SIZE_LIMIT},
    models::{MetricDatum, PutMetricDataInput, PutMetricDataOutput, Sanitize},
    split::{bucket_datum, split_large_value_array},
    Error,
};
use async_trait::async_trait;
use futures_util::future::{join_all, BoxFuture, FutureExt as _};
use std::{fmt, sync::Arc};

/// Callback for datum that could not be sent.
///
/// May be called concurrently from several in-flight requests.
pub type OnDroppedDatum = Arc<dyn Fn(&MetricDatum) + Send + Sync>;

/// Optional behavior of a [`Pager`]. The default is a reasonable choice.
#[derive(Clone, Default)]
pub struct Config {
    /// Clear the unit of datum whose unit is not one of [`VALID_UNITS`](crate::VALID_UNITS).
    pub clear_invalid_units: bool,

    /// Send requests one after another instead of all at once.
    pub serial_sends: bool,

    /// Called for every datum that could not be sent, either because the ingestion API rejected
    /// the request or because the datum is too large to ever fit into a request.
    pub on_dropped_datum: Option<OnDroppedDatum>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("clear_invalid_units", &self.clear_invalid_units)
            .field("serial_sends", &self.serial_sends)
            .field("on_dropped_datum", &self.on_dropped_datum.is_some())
            .finish()
    }
}

/// Puts any amount of metric data by splitting it into requests the ingestion API accepts.
///
/// Datum with too many values are split into several datum, datum are grouped into requests
/// of at most 20 and every request body is compressed. Requests that are still too large are
/// split in half and sent again.
///
/// The pager is as thread safe as its client.
#[derive(Debug)]
pub struct Pager<C> {
    client: C,
    config: Config,
    gzip: Arc<GzipBody>,
}

impl<C> Pager<C> {
    /// Create a new pager sending through `client`.
    pub fn new(client: C) -> Self {
        Self {
            client,
            config: Config::default(),
            gzip: Arc::new(GzipBody::new(PUT_METRIC_DATA_REQUEST_SIZE_LIMIT)),
        }
    }

    /// Replace the whole config.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Clear units that the ingestion API does not know.
    ///
    /// Default: false
    pub fn with_clear_invalid_units(mut self, clear_invalid_units: bool) -> Self {
        self.config.clear_invalid_units = clear_invalid_units;
        self
    }

    /// Send requests one after another.
    ///
    /// Default: false
    pub fn with_serial_sends(mut self, serial_sends: bool) -> Self {
        self.config.serial_sends = serial_sends;
        self
    }

    /// Set a callback for datum that could not be sent.
    ///
    /// ```
    /// # use paged_metric_put::{Pager, MetricDatum};
    /// # fn with_client<C>(client: C) -> Pager<C> {
    /// Pager::new(client).with_on_dropped_datum(|datum: &MetricDatum| {
    ///     eprintln!("dropped {}", datum.metric_name);
    /// })
    /// # }
    /// ```
    pub fn with_on_dropped_datum(
        mut self,
        on_dropped_datum: impl Fn(&MetricDatum) + Send + Sync + 'static,
    ) -> Self {
        self.config.on_dropped_datum = Some(Arc::new(on_dropped_datum));
        self
    }

    /// Set the maximum size of a compressed request body in bytes.
    ///
    /// Default: [`PUT_METRIC_DATA_REQUEST_SIZE_LIMIT`]
    pub fn with_request_size_limit(mut self, size_limit: usize) -> Self {
        self.gzip = Arc::new(GzipBody::new(size_limit));
        self
    }

    /// The current config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The client requests are sent through.
    pub fn client(&self) -> &C {
        &self.client
    }
}

impl<C: PutMetricDataClient> Pager<C> {
    /// Put all of `input`, using as many requests as needed.
    ///
    /// Returns an error if any request failed. Datum in failed requests are reported to the
    /// [`on_dropped_datum`](Config::on_dropped_datum) callback. If more than one request failed
    /// the error is an [`Error::Multiple`] listing the failures in the order the requests were
    /// created.
    pub async fn put_metric_data(
        &self,
        input: PutMetricDataInput,
    ) -> Result<PutMetricDataOutput, Error> {
        self.put_metric_data_with_decorators(input, Vec::new()).await
    }

    /// Like [`put_metric_data`](Self::put_metric_data), but runs additional decorators on every
    /// request. The pager's gzip decorator runs last.
    pub async fn put_metric_data_with_decorators(
        &self,
        input: PutMetricDataInput,
        mut decorators: Vec<Arc<dyn RequestDecorator>>,
    ) -> Result<PutMetricDataOutput, Error> {
        let gzip: Arc<dyn RequestDecorator> = self.gzip.clone();
        decorators.retain(|decorator| decorator.name() != gzip.name());
        decorators.push(gzip);

        let PutMetricDataInput {
            namespace,
            mut metric_data,
        } = input;
        if self.config.clear_invalid_units {
            for datum in metric_data.iter_mut() {
                datum.sanitize();
            }
        }

        let split_datum: Vec<MetricDatum> = metric_data
            .iter()
            .flat_map(split_large_value_array)
            .collect();
        let buckets = bucket_datum(split_datum);

        self.send_buckets(&namespace, buckets, &decorators).await?;
        Ok(PutMetricDataOutput::default())
    }

    /// Sends every bucket and waits for all of them to finish.
    async fn send_buckets(
        &self,
        namespace: &str,
        buckets: Vec<Vec<MetricDatum>>,
        decorators: &[Arc<dyn RequestDecorator>],
    ) -> Result<(), Error> {
        let sends = buckets
            .into_iter()
            .map(|bucket| self.send_datum(namespace, bucket, decorators));
        let results = if self.config.serial_sends {
            let mut results = Vec::new();
            for send in sends {
                results.push(send.await);
            }
            results
        } else {
            join_all(sends).await
        };
        consolidate_errors(results.into_iter().map(Result::err))
    }

    /// Sends a single request. If the request is too large it is split in half and both halves
    /// are sent separately.
    fn send_datum<'a>(
        &'a self,
        namespace: &'a str,
        datum: Vec<MetricDatum>,
        decorators: &'a [Arc<dyn RequestDecorator>],
    ) -> BoxFuture<'a, Result<(), Error>> {
        async move {
            if datum.is_empty() {
                return Ok(());
            }
            let input = PutMetricDataInput {
                namespace: namespace.to_owned(),
                metric_data: datum,
            };
            let err = match self.client.put_metric_data(&input, decorators).await {
                Ok(_) => return Ok(()),
                Err(err) => err,
            };
            let mut datum = input.metric_data;

            if err.is_request_size_error() {
                if datum.len() == 1 {
                    // Even a single datum is too large. It will never work.
                    crate::log_warn!(
                        "Dropping metric {} that is too large for a single request: {}",
                        datum[0].metric_name,
                        err
                    );
                    self.on_dropped_datum(&datum[0]);
                    return Err(err);
                }
                let second_half = datum.split_off(datum.len() / 2);
                crate::debug!(
                    "Request of {} datum too large, sending as {} and {}",
                    datum.len() + second_half.len(),
                    datum.len(),
                    second_half.len()
                );
                return self
                    .send_buckets(namespace, vec![datum, second_half], decorators)
                    .await;
            }

            crate::log_warn!("Dropping {} datum after failed request: {}", datum.len(), err);
            for d in &datum {
                self.on_dropped_datum(d);
            }
            Err(err)
        }
        .boxed()
    }

    fn on_dropped_datum(&self, datum: &MetricDatum) {
        if let Some(on_dropped_datum) = &self.config.on_dropped_datum {
            on_dropped_datum(datum);
        }
    }
}

/// A pager can stand in for any client. The input is paged like in
/// [`Pager::put_metric_data_with_decorators`].
#[async_trait]
impl<C: PutMetricDataClient> PutMetricDataClient for Pager<C> {
    async fn put_metric_data(
        &self,
        input: &PutMetricDataInput,
        decorators: &[Arc<dyn RequestDecorator>],
    ) -> Result<PutMetricDataOutput, Error> {
        self.put_metric_data_with_decorators(input.clone(), decorators.to_vec())
            .await
    }
}
