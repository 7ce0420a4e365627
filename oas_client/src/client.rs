use paths::{PathParams, PathTemplate, QuerySerializer};
use serde::{Deserialize, Serialize};

/// Options of a [`Client`] instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ClientOptions {
    /// Common root URL for all API requests.
    pub base_url: String,
    /// Styles of query parameters.
    pub query: QuerySerializer,
}

impl ClientOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Builder of request URLs for a single API root.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    base_url: String,
    query: QuerySerializer,
}

impl Client {
    pub fn new(options: ClientOptions) -> Self {
        let ClientOptions { base_url, query } = options;

        Self {
            base_url: remove_trailing_slash(&base_url).to_owned(),
            query,
        }
    }

    /// Root URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn query_serializer(&self) -> &QuerySerializer {
        &self.query
    }

    /// Construct URL for an operation path, substituting path parameters.
    ///
    /// Only the path is resolved, placeholders in the root URL are kept.
    pub fn url(&self, path: &str, params: Option<&PathParams>) -> String {
        let resolved = PathTemplate::new(path).resolve(params);
        let url = format!("{}{resolved}", self.base_url);

        tracing::debug!(%url, "resolved request url");
        url
    }

    /// Construct URL for an operation path from a serializable
    /// map or struct of path parameters.
    pub fn url_with<T: ?Sized + Serialize>(&self, path: &str, args: &T) -> crate::Result<String> {
        let params = paths::to_params(args)?;
        Ok(self.url(path, Some(&params)))
    }

    /// Construct URL with a query string (omitted when empty).
    pub fn url_with_query(
        &self,
        path: &str,
        params: Option<&PathParams>,
        query: &PathParams,
    ) -> String {
        let mut url = self.url(path, params);
        let query = self.query.serialize(query);

        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        url
    }
}

/// Remove a single trailing slash from url.
pub fn remove_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}
