use crate::{
    client::PutMetricDataClient,
    http_client::HttpClient,
    models::{PutMetricDataInput, PutMetricDataOutput},
    Error, RequestDecorator,
};
use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response, StatusCode, Uri};
use std::{fmt, sync::Arc};

/// Sends metric data as JSON to an HTTP endpoint.
///
/// Request decorators run after the body is serialized and before anything is sent. A `413
/// Payload Too Large` response is reported as [`Error::RequestSize`]. Nothing is retried.
pub struct HttpMetricsClient<C> {
    client: Arc<C>,
    endpoint: Arc<Uri>,
}

impl<C: fmt::Debug> fmt::Debug for HttpMetricsClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpMetricsClient")
            .field("client", &self.client)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl<C> Clone for HttpMetricsClient<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            endpoint: Arc::clone(&self.endpoint),
        }
    }
}

impl<C> HttpMetricsClient<C> {
    /// Create a client posting to `endpoint`.
    pub fn new<U>(client: C, endpoint: U) -> Result<Self, http::Error>
    where
        U: TryInto<Uri>,
        U::Error: Into<http::Error>,
    {
        let endpoint = match endpoint.try_into() {
            Ok(endpoint) => endpoint,
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            client: Arc::new(client),
            endpoint: Arc::new(endpoint),
        })
    }

    /// The endpoint requests are posted to.
    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }
}

#[async_trait]
impl<C: HttpClient> PutMetricDataClient for HttpMetricsClient<C> {
    async fn put_metric_data(
        &self,
        input: &PutMetricDataInput,
        decorators: &[Arc<dyn RequestDecorator>],
    ) -> Result<PutMetricDataOutput, Error> {
        let payload = serde_json::to_vec(input).map_err(Error::SerializeRequest)?;
        let mut request = Request::post(self.endpoint.as_ref())
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Bytes::from(payload))
            .expect("request should be valid");
        for decorator in decorators {
            decorator.decorate(&mut request)?;
        }

        let size = request.body().len();
        let response = self
            .client
            .send(request)
            .await
            .map_err(Error::Connection)?;
        handle_response(response, size)
    }
}

fn handle_response(response: Response<Bytes>, size: usize) -> Result<PutMetricDataOutput, Error> {
    match response.status() {
        status if status.is_success() => Ok(PutMetricDataOutput::default()),
        status if status == StatusCode::PAYLOAD_TOO_LARGE => Err(Error::RequestSize { size }),
        status => Err(Error::Upload(format!(
            "{}: {}",
            status.as_u16(),
            String::from_utf8_lossy(response.body())
        ))),
    }
}
