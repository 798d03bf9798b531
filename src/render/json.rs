//! JSON rendering
//!
//! Serializes the listing and its annotations as one compact object:
//!
//! ```text
//! {"code":"...","annotations":[{"start":23,"end":52,"type":"offset","offset":4440},...]}
//! ```
//!
//! Key names (`code`, `annotations`, `start`, `end`, `type`,
//! `syntax_highlight`, `offset`) are a stable consumer contract. Only
//! offset and syntax-highlight annotations serialize; reference and
//! variable kinds are not part of this format.

use serde::Serialize;
use tracing::debug;

use crate::annotations::{AnnotatedCode, Annotation, AnnotationKind};
use crate::error::RenderError;

/// Wire form of the annotated listing: `code` first, then `annotations`
/// in store order.
#[derive(Serialize)]
struct AnnotatedCodeJson<'a> {
    code: &'a str,
    annotations: Vec<&'a Annotation>,
}

/// Render the listing and its offset/syntax-highlight annotations as JSON
pub fn render_json(code: &AnnotatedCode) -> Result<String, RenderError> {
    let annotations: Vec<&Annotation> = code
        .annotations()
        .iter()
        .filter(|a| {
            matches!(
                a.kind,
                AnnotationKind::Offset { .. } | AnnotationKind::SyntaxHighlight { .. }
            )
        })
        .collect();
    debug!(
        total = code.annotations().len(),
        rendered = annotations.len(),
        "rendering annotated listing to JSON"
    );
    Ok(serde_json::to_string(&AnnotatedCodeJson {
        code: code.code(),
        annotations,
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::fixtures::hello_world;

    #[test]
    fn test_render_json_hello_world() {
        let code = hello_world();
        let expected = concat!(
            r#"{"code":"\nvoid main(void)\n{\n    sym.imp.puts(\"Hello, World!\");\n    return;\n}\n","annotations":["#,
            r#"{"start":1,"end":5,"type":"syntax_highlight","syntax_highlight":"datatype"},"#,
            r#"{"start":6,"end":10,"type":"syntax_highlight","syntax_highlight":"function_name"},"#,
            r#"{"start":11,"end":15,"type":"syntax_highlight","syntax_highlight":"keyword"},"#,
            r#"{"start":23,"end":35,"type":"syntax_highlight","syntax_highlight":"function_name"},"#,
            r#"{"start":36,"end":51,"type":"syntax_highlight","syntax_highlight":"constant_variable"},"#,
            r#"{"start":23,"end":52,"type":"offset","offset":4440},"#,
            r#"{"start":58,"end":64,"type":"offset","offset":4447},"#,
            r#"{"start":58,"end":64,"type":"syntax_highlight","syntax_highlight":"keyword"},"#,
            r#"{"start":58,"end":64,"type":"offset","offset":4447}"#,
            "]}",
        );
        assert_eq!(render_json(&code).unwrap(), expected);
    }

    #[test]
    fn test_reference_and_variable_kinds_are_omitted() {
        let mut code = AnnotatedCode::new("int var = fcn();");
        code.add(Annotation::new_function_name(10, 13, "fcn", 0x1149));
        code.add(Annotation::new_local_variable(4, 7, "var"));
        code.add(Annotation::new_offset(0, 16, 0x1180));
        code.add(Annotation::new_function_parameter(4, 7, "arg1"));
        code.add(Annotation::new_global_variable(4, 7, "obj.var", 0x4060));
        code.add(Annotation::new_constant_variable(4, 7, "str.var", 0x2004));

        assert_eq!(
            render_json(&code).unwrap(),
            r#"{"code":"int var = fcn();","annotations":[{"start":0,"end":16,"type":"offset","offset":4480}]}"#
        );
    }

    #[test]
    fn test_backslash_and_quote_escaping() {
        let code = AnnotatedCode::new("puts(\"a\\b\");");
        assert_eq!(
            render_json(&code).unwrap(),
            r#"{"code":"puts(\"a\\b\");","annotations":[]}"#
        );
    }

    #[test]
    fn test_round_trip_reconstructs_rendered_annotations() {
        let code = hello_world();
        let json = render_json(&code).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["code"].as_str().unwrap(), code.code());

        let parsed: Vec<Annotation> =
            serde_json::from_value(value["annotations"].clone()).unwrap();
        let rendered: Vec<Annotation> = code
            .annotations()
            .iter()
            .filter(|a| {
                matches!(
                    a.kind,
                    AnnotationKind::Offset { .. } | AnnotationKind::SyntaxHighlight { .. }
                )
            })
            .cloned()
            .collect();
        assert_eq!(parsed, rendered);
    }
}
