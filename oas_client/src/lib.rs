//! # `oas_client`: URLs for OpenAPI operations
//!
//! Every OpenAPI operation is addressed by a path template, like
//! `/users/{id}/posts{.format}`, whose placeholders are serialized
//! according to the parameter style (see [`paths`] for the details).
//!
//! A [`Client`] holds the common root URL of an API and turns
//! operation paths with their parameters into final request URLs:
//!
//! ```
//! use oas_client::{Client, ClientOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct GetPost {
//!     user: u32,
//!     post: &'static str,
//! }
//!
//! let client = Client::new(ClientOptions::new("https://api.example.com/"));
//! let url = client.url_with("/users/{user}/posts/{post}", &GetPost { user: 1, post: "hello world" });
//!
//! assert_eq!(url.unwrap(), "https://api.example.com/users/1/posts/hello%20world");
//! ```
//!
//! With the `reqwest` feature, the client also builds (but never sends)
//! [`reqwest`] requests for those URLs.

mod client;
#[cfg(feature = "reqwest")]
mod request;

pub use client::{remove_trailing_slash, Client, ClientOptions};
pub use paths;
pub use serde;

#[cfg(feature = "reqwest")]
pub use request::RequestParams;
#[cfg(feature = "reqwest")]
pub use reqwest;

/// Errors of building request URLs.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to serialize parameters: {0}")]
    Params(#[from] paths::Error),
    #[cfg(feature = "reqwest")]
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
