use crate::style::PathStyle;

/// A URL template, split into literal text and `{...}` placeholders.
///
/// Placeholders are non-empty, brace-free `{...}` regions. Unclosed or
/// empty braces are kept as literal text, so parsing never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct PathTemplate<'s> {
    segments: Vec<Segment<'s>>,
}

impl<'s> PathTemplate<'s> {
    /// Scan a template once, left to right.
    pub fn new(expr: &'s str) -> Self {
        let mut segments = vec![];
        let mut literal_start = 0;
        let mut cursor = 0;

        while let Some(open) = expr[cursor..].find('{').map(|pos| pos + cursor) {
            let Some(close) = expr[open + 1..]
                .find(|ch: char| ch == '{' || ch == '}')
                .map(|pos| pos + open + 1)
            else {
                break;
            };

            if expr.as_bytes()[close] == b'{' {
                // `{` reopened before closing, match from the inner brace
                cursor = close;
                continue;
            }

            if close == open + 1 {
                // `{}`
                cursor = close + 1;
                continue;
            }

            if literal_start < open {
                segments.push(Segment::Literal(&expr[literal_start..open]));
            }

            let raw = &expr[open..=close];
            segments.push(Segment::Token {
                raw,
                token: ParamToken::parse(&raw[1..raw.len() - 1]),
            });

            cursor = close + 1;
            literal_start = cursor;
        }

        if literal_start < expr.len() {
            segments.push(Segment::Literal(&expr[literal_start..]));
        }

        Self { segments }
    }

    /// Get literal and placeholder segments in template order.
    pub fn segments(&self) -> &[Segment<'s>] {
        &self.segments
    }

    /// Get parsed placeholders in template order.
    pub fn tokens(&self) -> impl Iterator<Item = &ParamToken<'s>> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Token { token, .. } => Some(token),
            Segment::Literal(_) => None,
        })
    }

    /// Check, if template contains placeholders.
    pub fn has_tokens(&self) -> bool {
        self.tokens().next().is_some()
    }
}

/// A segment of a URL template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'s> {
    /// Text copied to the output as is.
    Literal(&'s str),
    /// A placeholder, with its original text (braces included).
    Token { raw: &'s str, token: ParamToken<'s> },
}

/// A parsed placeholder: `{name}`, `{.name}`, `{;name}`, optionally
/// followed by the `*` explode marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamToken<'s> {
    pub name: &'s str,
    pub style: PathStyle,
    pub explode: bool,
}

impl<'s> ParamToken<'s> {
    /// Parse placeholder contents (without braces).
    ///
    /// The explode suffix is stripped first, then a single style prefix.
    /// Whatever remains is the name, even if empty.
    pub fn parse(inner: &'s str) -> Self {
        let (inner, explode) = match inner.strip_suffix('*') {
            Some(rest) => (rest, true),
            None => (inner, false),
        };

        let (name, style) = if let Some(name) = inner.strip_prefix('.') {
            (name, PathStyle::Label)
        } else if let Some(name) = inner.strip_prefix(';') {
            (name, PathStyle::Matrix)
        } else {
            (inner, PathStyle::Simple)
        };

        Self {
            name,
            style,
            explode,
        }
    }
}
