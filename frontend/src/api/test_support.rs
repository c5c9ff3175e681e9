#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const DELETE: Method = Method::DELETE;

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        received: Vec<String>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        query: Vec<(String, String)>,
        response: MockResponse,
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    received: Vec::new(),
                })),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let status = then.status.unwrap_or(200);
            let response = match (then.raw.take(), then.body.take()) {
                (Some(raw), _) => MockResponse::raw(status, &raw),
                (None, Some(body)) => MockResponse::json(status, body),
                (None, None) if status == 204 => MockResponse::empty(status),
                (None, None) => MockResponse::json(status, serde_json::json!({})),
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                query: when.query,
                response,
            });
        }

        /// Requests seen so far, as `METHOD path[?query]`.
        pub fn received(&self) -> Vec<String> {
            self.inner.lock().expect("mock lock").received.clone()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method();
            let url = request.url();
            let path = url.path();
            let pairs: Vec<(String, String)> = url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            let mut inner = self.inner.lock().map_err(|_| ApiError::unknown("mock lock"))?;
            inner.received.push(match url.query() {
                Some(query) => format!("{} {}?{}", method, path, query),
                None => format!("{} {}", method, path),
            });

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| {
                    route.method == *method
                        && route.path == path
                        && route.query.iter().all(|expected| pairs.contains(expected))
                })
                .cloned();

            route
                .map(|route| route.response)
                .ok_or_else(|| ApiError::unknown(format!("No mock for {} {}", method, path)))
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
        query: Vec<(String, String)>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }

        pub fn query_param(&mut self, key: &str, value: &str) -> &mut Self {
            self.query.push((key.to_string(), value.to_string()));
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        raw: Option<String>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn body(&mut self, raw: &str) -> &mut Self {
            self.raw = Some(raw.to_string());
            self
        }
    }
}
