//! Middleware to guard routes behind a shared access key

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::extract::Request;
use axum::http::Response;
use axum::response::IntoResponse;
use common::Error;
use tower::{Layer, Service};

/// Header that can carry the access key
pub const ACCESS_KEY_HEADER: &str = "x-access-key";

/// Query parameter that can carry the access key
pub const ACCESS_KEY_QUERY_PARAM: &str = "code";

/// Middleware layer that rejects requests without the configured access key
///
/// The key is accepted either in the [`ACCESS_KEY_HEADER`] header or the
/// [`ACCESS_KEY_QUERY_PARAM`] query parameter
#[derive(Clone)]
pub struct AccessKeyLayer {
	access_key: Arc<str>,
}

impl AccessKeyLayer {
	#[must_use]
	pub fn new(access_key: &str) -> Self {
		Self { access_key: Arc::from(access_key) }
	}
}

impl<S> Layer<S> for AccessKeyLayer {
	type Service = AccessKeyMiddleware<S>;

	fn layer(&self, inner: S) -> Self::Service {
		AccessKeyMiddleware { inner, access_key: self.access_key.clone() }
	}
}

#[derive(Clone)]
pub struct AccessKeyMiddleware<S> {
	inner:      S,
	access_key: Arc<str>,
}

impl<S> AccessKeyMiddleware<S> {
	/// Check if a request carries the expected access key
	fn is_authorized(&self, req: &Request<Body>) -> bool {
		let from_header = req
			.headers()
			.get(ACCESS_KEY_HEADER)
			.and_then(|v| v.to_str().ok())
			.is_some_and(|key| key == &*self.access_key);

		if from_header {
			return true;
		}

		req.uri().query().is_some_and(|query| {
			url::form_urlencoded::parse(query.as_bytes()).any(|(name, value)| {
				name == ACCESS_KEY_QUERY_PARAM && value == &*self.access_key
			})
		})
	}
}

impl<S> Service<Request<Body>> for AccessKeyMiddleware<S>
where
	S: Service<Request, Response = Response<Body>> + Clone + Send + 'static,
	S::Future: Send + 'static,
{
	type Error = S::Error;
	type Future = Pin<
		Box<
			dyn Future<Output = Result<Self::Response, Self::Error>>
				+ Send
				+ 'static,
		>,
	>;
	type Response = S::Response;

	fn poll_ready(
		&mut self,
		cx: &mut Context<'_>,
	) -> Poll<Result<(), Self::Error>> {
		self.inner.poll_ready(cx)
	}

	#[instrument(skip_all)]
	fn call(&mut self, req: Request<Body>) -> Self::Future {
		if !self.is_authorized(&req) {
			debug!(
				"rejected request to {} without a valid access key",
				req.uri().path()
			);

			return Box::pin(async { Ok(Error::Unauthorized.into_response()) });
		}

		let cloned_inner = self.inner.clone();
		let mut inner = std::mem::replace(&mut self.inner, cloned_inner);

		Box::pin(async move { inner.call(req).await })
	}
}
