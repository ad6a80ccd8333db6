//! Prompt templating: `{{name}}` placeholder substitution.
//!
//! Substitution happens in a single pass over the template, so
//! placeholder-looking text inside a substituted value is never
//! expanded again. Unknown placeholders are left verbatim.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde_json::Value;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder regex"))
}

/// Render `template`, substituting each `{{name}}` from `vars`.
///
/// Strings are inserted verbatim; everything else is pretty-printed
/// JSON (`null` for JSON null).
pub fn render(template: &str, vars: &BTreeMap<&str, Value>) -> String {
    placeholder_re()
        .replace_all(template, |caps: &Captures| {
            match vars.get(&caps[1]) {
                Some(Value::String(s)) => s.clone(),
                Some(value) => {
                    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
                }
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars(pairs: &[(&'static str, Value)]) -> BTreeMap<&'static str, Value> {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn substitutes_string_values_verbatim() {
        let rendered = render(
            "Claim: {{claim}}",
            &vars(&[("claim", json!("The earth is round"))]),
        );
        assert_eq!(rendered, "Claim: The earth is round");
    }

    #[test]
    fn object_values_are_json_encoded() {
        let rendered = render(
            "Evidence: {{retrieved_docs}}",
            &vars(&[("retrieved_docs", json!({"web_search": []}))]),
        );
        assert!(rendered.contains("\"web_search\": []"));
    }

    #[test]
    fn null_renders_as_null() {
        let rendered = render("Context: {{context}}", &vars(&[("context", Value::Null)]));
        assert_eq!(rendered, "Context: null");
    }

    #[test]
    fn unknown_placeholders_are_left_intact() {
        let rendered = render("{{claim}} / {{unknown}}", &vars(&[("claim", json!("c"))]));
        assert_eq!(rendered, "c / {{unknown}}");
    }

    #[test]
    fn substituted_values_are_not_re_expanded() {
        // A value containing placeholder syntax must not trigger a
        // second substitution round.
        let rendered = render(
            "{{claim}} | {{context}}",
            &vars(&[
                ("claim", json!("beware {{context}} collisions")),
                ("context", json!("CTX")),
            ]),
        );
        assert_eq!(rendered, "beware {{context}} collisions | CTX");
    }

    #[test]
    fn repeated_placeholders_all_substitute() {
        let rendered = render(
            "{{claim}} and again {{claim}}",
            &vars(&[("claim", json!("x"))]),
        );
        assert_eq!(rendered, "x and again x");
    }
}
