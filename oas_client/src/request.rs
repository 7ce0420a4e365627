use crate::Client;
use paths::PathParams;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Method, RequestBuilder};

/// Path and query parameters of a single request, plus its JSON body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    pub path: Option<PathParams>,
    pub query: PathParams,
    /// Ignored for `GET`.
    pub body: Option<serde_json::Value>,
}

macro_rules! impl_methods {
    ($(($fn_name:ident, $method:expr)),*) => {
        $(
            #[doc = concat!("Build a `", stringify!($fn_name), "` request, see [`Client::request`].")]
            pub fn $fn_name(
                &self,
                http: &reqwest::Client,
                path: &str,
                params: &RequestParams,
            ) -> RequestBuilder {
                self.request(http, $method, path, params)
            }
        )*
    };
}

impl Client {
    /// Build a request accepting JSON, with path and query parameters
    /// serialized into its URL and `params.body` sent as JSON on any method
    /// but `GET`. Sending is up to the caller.
    pub fn request(
        &self,
        http: &reqwest::Client,
        method: Method,
        path: &str,
        params: &RequestParams,
    ) -> RequestBuilder {
        let url = self.url_with_query(path, params.path.as_ref(), &params.query);

        let with_body = method != Method::GET;
        let builder = http
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        match &params.body {
            Some(body) if with_body => builder.json(body),
            _ => builder,
        }
    }

    impl_methods!(
        (get, Method::GET),
        (put, Method::PUT),
        (post, Method::POST),
        (delete, Method::DELETE),
        (patch, Method::PATCH)
    );
}
