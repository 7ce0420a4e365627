/// Result type for this crate's functionality.
pub type Result<T> = std::result::Result<T, Error>;

/// Type of errors returned by encoders and the value serializer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A composite value was passed where only a scalar is accepted.
    #[error(
        "parameter `{name}` is an {kind}: deeply nested arrays/objects aren't supported, \
         provide your own serializer to handle these"
    )]
    NotPrimitive { name: String, kind: &'static str },
    /// Serialized value was a nested struct, a vec of structs/tuples, etc.
    #[error("only shallow objects and arrays of plain values can be serialized")]
    DeepNesting,
    /// Some values, like byte slices and data-carrying enum variants,
    /// are not supported.
    #[error("type `{0}` is not supported")]
    TypeNotSupported(&'static str),
    /// Map keys must serialize to plain values.
    #[error("map keys must be strings or plain values")]
    KeyMustBeAString,
    /// Custom error variant in accordance with serde guidelines.
    #[error("{0}")]
    Custom(String),
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: std::fmt::Display,
    {
        Self::Custom(msg.to_string())
    }
}
