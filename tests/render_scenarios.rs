use indoc::indoc;
use pretty_assertions::assert_eq;
use synthkit::*;

mod cases;

fn squash(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn test_all_cases() {
    for case in cases::TEST_CASES.iter() {
        assert_eq!(case.tree.to_swift(), case.swift, "Test case '{}' failed", case.name);
    }
}

#[test]
fn test_point_struct_ignoring_whitespace() {
    let point = cases::TEST_CASES
        .iter()
        .find(|case| case.name == "point_struct")
        .map(|case| case.tree.to_swift())
        .unwrap();
    assert_eq!(
        squash(&point),
        "struct Point: Equatable { let x: Double let y: Double }"
    );
}

#[test]
fn test_mapped_variable_renders_the_same() {
    let original = Expr::variable("x", 5);
    let mapped = original.clone().map(|n| n * 2);
    assert_eq!(mapped, Expr::variable("x", 10));
    assert_eq!(original.to_swift(), "x");
    assert_eq!(mapped.to_swift(), original.to_swift());
}

#[test]
fn test_payload_erasure_across_payload_types() {
    let build = |a, b| -> Decl<(&'static str, u8)> {
        FunctionSignature::new("f")
            .with_body(vec![Stmt::if_else(
                Expr::variable("flag", a),
                vec![Stmt::return_value(Expr::variable("x", b))],
                vec![Stmt::Throw(Expr::variable("error", a))],
            )])
            .into()
    };
    let left = build(("Bool", 1), ("Int", 2));
    let right = build(("?", 9), ("?", 0));
    assert_ne!(left, right);
    assert_eq!(left.to_swift(), right.to_swift());
    assert_eq!(left.render(), right.render());
}

#[test]
fn test_render_demo_shapes() {
    let decls: Vec<Decl<()>> = vec![
        StructSignature::new("Point")
            .with_access(AccessLevel::Public)
            .with_member(
                InitializerSignature::new(vec![Stmt::Expression(Expr::binary(
                    Expr::variable("self", ()).property("x"),
                    "=",
                    Expr::variable("x", ()),
                ))])
                .with_parameter(ParameterSignature::new("x", "Double")),
            )
            .into(),
        ExtensionSignature::new("Point")
            .conforming_to("CustomStringConvertible")
            .with_member(ComputedPropertySignature::new(
                "description",
                "String",
                vec![Stmt::return_value(Expr::string("point"))],
            ))
            .into(),
    ];
    assert_eq!(
        decls.to_swift_with(&FormatOptions {
            indent_width: 2,
            use_tabs: false,
        }),
        indoc! {r#"
            public struct Point {
              init(x: Double) {
                self.x = x
              }
            }
            extension Point: CustomStringConvertible {
              var description: String {
                get {
                  return "point"
                }
              }
            }"#}
    );
}

#[test]
fn test_validation_is_opt_in() {
    let decl: Decl<()> = PropertySignature::variable("x", "Int").inferred().into();
    assert_eq!(decl.to_swift(), "var x");
    assert_eq!(
        validate_decl(&decl),
        Err(ValidationError::UntypedProperty {
            name: "x".to_string()
        })
    );
}
