use crate::{
    models::{PutMetricDataInput, PutMetricDataOutput},
    Error, RequestDecorator,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Anything that can receive metric data within the limits of the ingestion API.
///
/// Implementations must run every decorator on the outgoing request and must report an
/// oversized request as [`Error::RequestSize`]. Timeouts and cancellation are up to the
/// implementation or the caller awaiting the returned future.
#[async_trait]
pub trait PutMetricDataClient: Send + Sync {
    /// Send a single request containing all of `input`.
    async fn put_metric_data(
        &self,
        input: &PutMetricDataInput,
        decorators: &[Arc<dyn RequestDecorator>],
    ) -> Result<PutMetricDataOutput, Error>;
}

#[async_trait]
impl<C: PutMetricDataClient + ?Sized> PutMetricDataClient for Arc<C> {
    async fn put_metric_data(
        &self,
        input: &PutMetricDataInput,
        decorators: &[Arc<dyn RequestDecorator>],
    ) -> Result<PutMetricDataOutput, Error> {
        self.as_ref().put_metric_data(input, decorators).await
    }
}

#[async_trait]
impl<C: PutMetricDataClient + ?Sized> PutMetricDataClient for &C {
    async fn put_metric_data(
        &self,
        input: &PutMetricDataInput,
        decorators: &[Arc<dyn RequestDecorator>],
    ) -> Result<PutMetricDataOutput, Error> {
        (**self).put_metric_data(input, decorators).await
    }
}
