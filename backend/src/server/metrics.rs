//! Prometheus middleware that can be switched off at runtime.
//!
//! Both arms box the inner service so `create_server` wraps the app with one
//! concrete type whether or not a registry was built.

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::BoxBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::PrometheusMetrics;
use futures_util::future::LocalBoxFuture;
use std::sync::Arc;

/// Request metrics middleware, or a pass-through when disabled.
#[derive(Clone)]
pub(crate) enum MetricsLayer {
    Enabled(Arc<PrometheusMetrics>),
    Disabled,
}

impl MetricsLayer {
    /// Enable the layer when a metrics registry is present.
    #[must_use]
    pub(crate) fn from_option(metrics: Option<PrometheusMetrics>) -> Self {
        metrics.map_or(Self::Disabled, |metrics| Self::Enabled(Arc::new(metrics)))
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        match self.clone() {
            Self::Enabled(metrics) => {
                let pending = Compat::new(metrics.as_ref().clone()).new_transform(service);
                Box::pin(async move { pending.await.map(boxed::service) })
            }
            Self::Disabled => {
                let passthrough =
                    service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
                Box::pin(async move { Ok(boxed::service(passthrough)) })
            }
        }
    }
}
