//! Substitution of path parameters into URL templates.

use crate::array::serialize_array;
use crate::encode::{encode_pair, encode_primitive};
use crate::object::serialize_object;
use crate::path_template::{ParamToken, PathTemplate, Segment};
use crate::style::{PathStyle, StyleOptions};
use crate::value::{ParamValue, PathParams};

impl PathTemplate<'_> {
    /// Substitute every placeholder with its serialized parameter.
    ///
    /// Placeholders without a value (or all of them, if `params` is `None`)
    /// keep their original `{...}` text. Every occurrence is resolved on its
    /// own, so a name used twice is serialized twice.
    pub fn resolve(&self, params: Option<&PathParams>) -> String {
        let mut output = String::new();

        for segment in self.segments() {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Token { raw, token } => {
                    let value = params.and_then(|params| params.get(token.name));

                    match value {
                        Some(value) if !value.is_absent() => {
                            output.push_str(&serialize_token(token, value))
                        }
                        _ => {
                            tracing::trace!(name = token.name, "no value for path parameter");
                            output.push_str(raw)
                        }
                    }
                }
            }
        }

        output
    }
}

/// Parse `template` and substitute its placeholders.
pub fn resolve(template: &str, params: Option<&PathParams>) -> String {
    PathTemplate::new(template).resolve(params)
}

fn serialize_token(token: &ParamToken<'_>, value: &ParamValue) -> String {
    let ParamToken {
        name,
        style,
        explode,
    } = *token;
    let options = StyleOptions::new(style.into(), explode);

    match value {
        ParamValue::Array(_) => serialize_array(name, value, options),
        ParamValue::Object(_) => serialize_object(name, value, options),
        ParamValue::Primitive(v) => match style {
            PathStyle::Matrix => format!(";{}", encode_pair(name, v)),
            PathStyle::Label => format!(".{}", encode_primitive(v)),
            PathStyle::Simple => encode_primitive(v),
        },
        ParamValue::Absent => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn params<const N: usize>(entries: [(&str, ParamValue); N]) -> PathParams {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v))
            .collect()
    }

    #[rstest]
    #[case("/users/{id}", "/users/5")]
    #[case("/users/{.id}", "/users/.5")]
    #[case("/users/{;id}", "/users/;id=5")]
    #[case("/users/{id*}", "/users/5")]
    #[case("/users/{.id*}", "/users/.5")]
    #[case("/users/{;id*}", "/users/;id=5")]
    fn primitive_styles(#[case] template: &str, #[case] expected: &str) {
        let params = params([("id", 5i64.into())]);
        assert_eq!(resolve(template, Some(&params)), expected);
    }

    #[rstest]
    #[case("/users/{id}", "/users/3,4,5")]
    #[case("/users/{id*}", "/users/3,4,5")]
    #[case("/users/{.id}", "/users/.3,4,5")]
    #[case("/users/{.id*}", "/users/.3.4.5")]
    #[case("/users/{;id}", "/users/;id=3,4,5")]
    #[case("/users/{;id*}", "/users/;id=3;id=4;id=5")]
    fn array_styles(#[case] template: &str, #[case] expected: &str) {
        let params = params([("id", ParamValue::array([3i64, 4, 5]))]);
        assert_eq!(resolve(template, Some(&params)), expected);
    }

    #[rstest]
    #[case("/users/{id}", "/users/role,admin,firstName,Alex")]
    #[case("/users/{id*}", "/users/role=admin,firstName=Alex")]
    #[case("/users/{.id}", "/users/.role,admin,firstName,Alex")]
    #[case("/users/{.id*}", "/users/.role=admin.firstName=Alex")]
    #[case("/users/{;id}", "/users/;id=role,admin,firstName,Alex")]
    #[case("/users/{;id*}", "/users/;role=admin;firstName=Alex")]
    fn object_styles(#[case] template: &str, #[case] expected: &str) {
        let params = params([(
            "id",
            ParamValue::object([("role", "admin"), ("firstName", "Alex")]),
        )]);
        assert_eq!(resolve(template, Some(&params)), expected);
    }

    #[test]
    fn values_are_percent_encoded() {
        let params = params([("name", "a/b c".into())]);
        assert_eq!(resolve("/files/{name}", Some(&params)), "/files/a%2Fb%20c");
    }

    #[test]
    fn absent_values_keep_placeholder() {
        let params = params([("id", ParamValue::Absent)]);
        assert_eq!(resolve("/a/{id}/{;other*}", Some(&params)), "/a/{id}/{;other*}");
        assert_eq!(resolve("/a/{id}", None), "/a/{id}");
    }

    #[test]
    fn empty_name_is_looked_up() {
        assert_eq!(resolve("/a/{*}", Some(&params([]))), "/a/{*}");
        assert_eq!(resolve("/a/{.}", Some(&params([("", "x".into())]))), "/a/.x");
    }

    #[test]
    fn distinct_placeholders_resolve_independently() {
        let params = params([("org", "acme".into()), ("repo", "rocket".into())]);
        assert_eq!(
            resolve("/orgs/{org}/repos/{repo}", Some(&params)),
            "/orgs/acme/repos/rocket"
        );
    }

    #[test]
    fn repeated_placeholders_use_their_own_style() {
        let params = params([("id", 7i64.into())]);
        assert_eq!(resolve("/{id}/{;id}/{id}", Some(&params)), "/7/;id=7/7");
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        // raw keys may contain braces, they must not be resolved again
        let params = params([
            ("a", ParamValue::object([("{b}", "1")])),
            ("b", "2".into()),
        ]);
        assert_eq!(resolve("/{a}/{b}", Some(&params)), "/{b},1/2");
    }

    proptest! {
        #[test]
        fn templates_without_placeholders_are_unchanged(template in "[^{}]*") {
            let params = params([("id", 1i64.into())]);
            prop_assert_eq!(resolve(&template, Some(&params)), template);
        }

        #[test]
        fn unknown_names_are_left_intact(name in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
            prop_assume!(name != "known");
            let template = format!("/x/{{{name}}}/{{known}}");
            let params = params([("known", "v".into())]);
            prop_assert_eq!(
                resolve(&template, Some(&params)),
                format!("/x/{{{name}}}/v")
            );
        }

        #[test]
        fn two_values_never_mix(a in "[a-z0-9]{1,8}", b in "[a-z0-9]{1,8}") {
            let params = params([("a", a.as_str().into()), ("b", b.as_str().into())]);
            prop_assert_eq!(
                resolve("/{a}/{b}", Some(&params)),
                format!("/{a}/{b}")
            );
        }
    }
}
