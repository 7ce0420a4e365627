//! OpenAPI serialization styles.
//!
//! Every style-dependent decision (joiners, prefixes, wrapping) lives on
//! [`Style`] as an exhaustive `match`, so adding a style forces every rule
//! to be revisited.

use std::fmt::Display;
use std::str::FromStr;

/// OpenAPI 3.x `style` value of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Style {
    /// `simple`, comma separated values (path and header default).
    #[default]
    Simple,
    /// `label`, dot prefixed values.
    Label,
    /// `matrix`, semicolon prefixed `name=value` pairs.
    Matrix,
    /// `form`, `name=value` pairs (query default).
    Form,
    /// `spaceDelimited`, space separated array values.
    SpaceDelimited,
    /// `pipeDelimited`, pipe separated array values.
    PipeDelimited,
    /// `deepObject`, `name[key]=value` pairs.
    DeepObject,
}

impl Style {
    /// All styles, in declaration order.
    pub const ALL: [Style; 7] = [
        Style::Simple,
        Style::Label,
        Style::Matrix,
        Style::Form,
        Style::SpaceDelimited,
        Style::PipeDelimited,
        Style::DeepObject,
    ];

    /// Name of the style as spelled in OpenAPI documents.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Label => "label",
            Self::Matrix => "matrix",
            Self::Form => "form",
            Self::SpaceDelimited => "spaceDelimited",
            Self::PipeDelimited => "pipeDelimited",
            Self::DeepObject => "deepObject",
        }
    }

    /// Separator between entries of an exploded value.
    pub(crate) const fn exploded_joiner(self) -> &'static str {
        match self {
            Self::Simple => ",",
            Self::Label => ".",
            Self::Matrix => ";",
            Self::Form | Self::SpaceDelimited | Self::PipeDelimited | Self::DeepObject => "&",
        }
    }

    /// Separator between elements of a non-exploded array.
    pub(crate) const fn array_joiner(self) -> &'static str {
        match self {
            Self::SpaceDelimited => "%20",
            Self::PipeDelimited => "|",
            Self::Simple | Self::Label | Self::Matrix | Self::Form | Self::DeepObject => ",",
        }
    }

    /// Whether exploded output repeats the joiner in front of the first entry.
    pub(crate) const fn prefixes_exploded(self) -> bool {
        matches!(self, Self::Label | Self::Matrix)
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ParseStyleError(s.to_owned()))
    }
}

/// Error returned when parsing an unknown style name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown serialization style: {0}")]
pub struct ParseStyleError(pub String);

/// Styles that can be expressed with path template markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PathStyle {
    /// No marker.
    #[default]
    Simple,
    /// `{.name}`
    Label,
    /// `{;name}`
    Matrix,
}

impl From<PathStyle> for Style {
    fn from(value: PathStyle) -> Self {
        match value {
            PathStyle::Simple => Style::Simple,
            PathStyle::Label => Style::Label,
            PathStyle::Matrix => Style::Matrix,
        }
    }
}

/// Style and explode pair, governing how a composite value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct StyleOptions {
    pub style: Style,
    pub explode: bool,
}

impl StyleOptions {
    pub const fn new(style: Style, explode: bool) -> Self {
        Self { style, explode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_names() {
        for style in Style::ALL {
            assert_eq!(style.as_str().parse::<Style>(), Ok(style));
            assert_eq!(style.to_string(), style.as_str());
        }
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "spacedelimited".parse::<Style>(),
            Err(ParseStyleError("spacedelimited".to_owned()))
        );
    }

    #[test]
    fn path_style_conversion() {
        assert_eq!(Style::from(PathStyle::Simple), Style::Simple);
        assert_eq!(Style::from(PathStyle::Label), Style::Label);
        assert_eq!(Style::from(PathStyle::Matrix), Style::Matrix);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_options() {
        let options: StyleOptions =
            serde_json::from_str(r#"{"style":"pipeDelimited","explode":true}"#).unwrap();
        assert_eq!(options, StyleOptions::new(Style::PipeDelimited, true));

        let options: StyleOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, StyleOptions::default());
    }
}
