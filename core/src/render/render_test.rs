use super::{Render, Renderer};
use crate::decl::{
    AccessLevel, ComputedPropertySignature, Decl, ExtensionSignature, FunctionSignature,
    InitializerSignature, ParameterSignature, PropertySignature, StructSignature,
};
use crate::expr::{Argument, Expr};
use crate::literal::Literal;
use crate::stmt::Stmt;
use crate::test_utils::init_test_logging;
use indoc::indoc;
use pretty_assertions::assert_eq;
use synthkit_syntax::{CodeBlockItemSyntax, DeclSyntax, ExprSyntax, FormatOptions, Modifiers};

fn var(name: &str) -> Expr<()> {
    Expr::variable(name, ())
}

#[test]
fn test_literals() {
    assert_eq!(Literal::Integer(42).to_swift(), "42");
    assert_eq!(Literal::Integer(-7).to_swift(), "-7");
    assert_eq!(Literal::Double(3.0).to_swift(), "3.0");
    assert_eq!(Literal::Double(0.25).to_swift(), "0.25");
    assert_eq!(Literal::from("say \"hi\"\n").to_swift(), r#""say \"hi\"\n""#);
    assert_eq!(Literal::Boolean(false).to_swift(), "false");
    assert_eq!(Literal::Nil.to_swift(), "nil");
}

#[test]
fn test_string_control_characters_are_escaped() {
    assert_eq!(
        Literal::from("a\u{1}b\u{7f}c").to_swift(),
        r#""a\u{1}b\u{7f}c""#
    );
}

#[test]
fn test_non_finite_doubles() {
    assert_eq!(Literal::Double(f64::NAN).to_swift(), "Double.nan");
    assert_eq!(Literal::Double(f64::INFINITY).to_swift(), "Double.infinity");
    assert_eq!(
        Literal::Double(f64::NEG_INFINITY).to_swift(),
        "-Double.infinity"
    );
}

#[test]
fn test_literal_maps_to_matching_node_kind() {
    assert_eq!(
        Renderer.literal(&Literal::Integer(1)),
        ExprSyntax::IntegerLiteral("1".to_string())
    );
    assert_eq!(
        Renderer.literal(&Literal::Boolean(true)),
        ExprSyntax::BooleanLiteral(true)
    );
    assert_eq!(Renderer.literal(&Literal::Nil), ExprSyntax::NilLiteral);
}

#[test]
fn test_variable_renders_its_name() {
    assert_eq!(Expr::variable("x", 5).to_swift(), "x");
}

#[test]
fn test_binary_operation() {
    let expr: Expr<()> = Expr::binary(Expr::int(1), "+", Expr::int(2));
    assert_eq!(expr.to_swift(), "1 + 2");
}

#[test]
fn test_operator_token_is_verbatim() {
    let expr = Expr::binary(var("a"), "??", var("b"));
    assert_eq!(expr.to_swift(), "a ?? b");
}

#[test]
fn test_nested_binary_operands_are_grouped() {
    let sum = Expr::binary(var("a"), "+", var("b"));
    let expr = Expr::binary(sum, "*", var("c"));
    assert_eq!(expr.to_swift(), "(a + b) * c");

    let right = Expr::binary(var("b"), "-", var("c"));
    let expr = Expr::binary(var("a"), "-", right);
    assert_eq!(expr.to_swift(), "a - (b - c)");
}

#[test]
fn test_conditional() {
    let expr = Expr::conditional(var("flag"), Expr::int(1), Expr::int(0));
    assert_eq!(expr.to_swift(), "flag ? 1 : 0");

    let expr = Expr::conditional(
        Expr::binary(var("x"), ">", Expr::int(0)),
        var("x"),
        Expr::conditional(var("y"), Expr::int(1), Expr::int(2)),
    );
    assert_eq!(expr.to_swift(), "(x > 0) ? x : (y ? 1 : 2)");
}

#[test]
fn test_loop_renders_as_for_each() {
    init_test_logging();
    let expr = Expr::for_each("item", var("items"), var("item"));
    assert_eq!(expr.to_swift(), "items.forEach { item in item }");
}

#[test]
fn test_loop_over_compound_collection() {
    let collection = Expr::binary(var("a"), "+", var("b"));
    let expr = Expr::for_each("x", collection, Expr::call("print", vec![var("x").into()]));
    assert_eq!(expr.to_swift(), "(a + b).forEach { x in print(x) }");
}

#[test]
fn test_function_call_arguments() {
    let expr = Expr::call(
        "max",
        vec![Argument::labeled("by", var("a")), Argument::new(Expr::int(3))],
    );
    assert_eq!(expr.to_swift(), "max(by: a, 3)");
    assert_eq!(Expr::<()>::call("reset", vec![]).to_swift(), "reset()");
}

#[test]
fn test_argument_separators() {
    let expr = Expr::call(
        "f",
        vec![var("a").into(), var("b").into(), var("c").into()],
    );
    let ExprSyntax::FunctionCall(call) = expr.render() else {
        panic!("Expected FunctionCall");
    };
    let commas: Vec<bool> = call.arguments.iter().map(|a| a.trailing_comma).collect();
    assert_eq!(commas, vec![true, true, false]);
}

#[test]
fn test_method_call() {
    let expr = var("list").method("append", vec![Argument::labeled("contentsOf", var("more"))]);
    assert_eq!(expr.to_swift(), "list.append(contentsOf: more)");
}

#[test]
fn test_method_chain() {
    let expr = var("names")
        .method("sorted", vec![])
        .property("first");
    assert_eq!(expr.to_swift(), "names.sorted().first");
}

#[test]
fn test_property_access_grouping() {
    assert_eq!(var("point").property("x").to_swift(), "point.x");
    assert_eq!(
        Expr::<()>::int(-1).property("magnitude").to_swift(),
        "(-1).magnitude"
    );
    assert_eq!(
        Expr::binary(var("a"), "+", var("b"))
            .property("description")
            .to_swift(),
        "(a + b).description"
    );
}

#[test]
fn test_inline_declaration_renders_initializer_only() {
    let expr: Expr<()> = Expr::inline_declaration("x", Some("Int".to_string()), Expr::int(5));
    assert_eq!(expr.to_swift(), "5");
}

#[test]
fn test_array_literal() {
    let expr: Expr<()> = Expr::array(vec![Expr::int(1), Expr::int(2), Expr::int(3)]);
    assert_eq!(expr.to_swift(), "[1, 2, 3]");
    assert_eq!(Expr::<()>::array(vec![]).to_swift(), "[]");
}

#[test]
fn test_payload_is_erased() {
    let a = Expr::binary(Expr::variable("x", 1_u32), "+", Expr::variable("y", 2_u32));
    let b = Expr::binary(Expr::variable("x", 99_u32), "+", Expr::variable("y", 0_u32));
    assert_ne!(a, b);
    assert_eq!(a.render(), b.render());
}

#[test]
fn test_bindings() {
    let stmt = Stmt::let_binding("x", Some("Int".to_string()), Expr::<()>::int(1));
    assert_eq!(stmt.to_swift(), "let x: Int = 1");
    let stmt = Stmt::var_binding("total", None, var("x"));
    assert_eq!(stmt.to_swift(), "var total = x");
    assert!(matches!(
        stmt.render(),
        CodeBlockItemSyntax::Decl(DeclSyntax::Variable(_))
    ));
}

#[test]
fn test_guard() {
    let stmt = Stmt::guard(var("ok"), vec![Stmt::Return(None)]);
    assert_eq!(
        stmt.to_swift(),
        indoc! {"
            guard ok else {
                return
            }"}
    );
}

#[test]
fn test_if_with_and_without_else() {
    let call = || Stmt::Expression(Expr::call("run", vec![]));
    assert_eq!(
        Stmt::if_then(var("flag"), vec![call()]).to_swift(),
        indoc! {"
            if flag {
                run()
            }"}
    );
    assert_eq!(
        Stmt::if_else(var("flag"), vec![call()], vec![]).to_swift(),
        indoc! {"
            if flag {
                run()
            } else {
            }"}
    );
}

#[test]
fn test_loop_condition_is_grouped() {
    let each = || Expr::for_each("x", var("xs"), var("x"));
    assert_eq!(
        Stmt::if_then(each(), vec![]).to_swift(),
        indoc! {"
            if (xs.forEach { x in x }) {
            }"}
    );
    assert_eq!(
        Stmt::guard(each().property("isEmpty"), vec![Stmt::Return(None)]).to_swift(),
        indoc! {"
            guard (xs.forEach { x in x }.isEmpty) else {
                return
            }"}
    );
    assert_eq!(
        Stmt::if_then(var("ready").method("check", vec![]), vec![]).to_swift(),
        indoc! {"
            if ready.check() {
            }"}
    );
}

#[test]
fn test_return_throw_defer() {
    assert_eq!(Stmt::return_value(var("x")).to_swift(), "return x");
    assert_eq!(Stmt::<()>::Return(None).to_swift(), "return");
    assert_eq!(
        Stmt::<()>::Throw(Expr::call("Failure", vec![])).to_swift(),
        "throw Failure()"
    );
    assert_eq!(
        Stmt::Defer(vec![Stmt::Expression(var("cleanup").method("close", vec![]))]).to_swift(),
        indoc! {"
            defer {
                cleanup.close()
            }"}
    );
}

#[test]
fn test_expression_statement_is_bare() {
    let stmt = Stmt::Expression(var("x"));
    assert_eq!(stmt.render(), CodeBlockItemSyntax::Expr(ExprSyntax::reference("x")));
}

#[test]
fn test_statement_sequence() {
    let stmts = vec![
        Stmt::let_binding("x", None, Expr::int(1)),
        Stmt::return_value(var("x")),
    ];
    assert_eq!(stmts.render().items.len(), 2);
    assert_eq!(
        stmts.to_swift(),
        indoc! {"
            let x = 1
            return x"}
    );
}

#[test]
fn test_function_access_levels() {
    init_test_logging();
    let internal: Decl<()> = FunctionSignature::new("run").into();
    let public: Decl<()> = FunctionSignature::new("run")
        .with_access(AccessLevel::Public)
        .into();
    assert_eq!(internal.to_swift(), "func run() {\n}");
    assert_eq!(public.to_swift(), "public func run() {\n}");
}

#[test]
fn test_function_full_signature() {
    let decl: Decl<()> = FunctionSignature::new("load")
        .with_access(AccessLevel::FilePrivate)
        .with_parameter(ParameterSignature::new("url", "URL").with_label("from"))
        .with_parameter(
            ParameterSignature::new("retries", "Int")
                .with_label("_")
                .with_default("3"),
        )
        .with_parameter(ParameterSignature::new("log", "[String]").inout())
        .with_async()
        .with_throws()
        .with_return_type("Data")
        .with_body(vec![Stmt::return_value(var("data"))])
        .into();
    assert_eq!(
        decl.to_swift(),
        indoc! {"
            fileprivate func load(from url: URL, _ retries: Int = 3, log: inout [String]) async throws -> Data {
                return data
            }"}
    );
}

#[test]
fn test_effects_only_when_set() {
    let throwing: Decl<()> = FunctionSignature::new("f").with_throws().into();
    let DeclSyntax::Function(function) = throwing.render() else {
        panic!("Expected Function");
    };
    assert_eq!(function.effects.tokens().collect::<Vec<_>>(), vec!["throws"]);
}

#[test]
fn test_stored_properties() {
    let decl: Decl<()> = PropertySignature::variable("count", "Int")
        .with_access(AccessLevel::Private)
        .with_static()
        .with_initializer(Expr::int(0))
        .into();
    assert_eq!(decl.to_swift(), "private static var count: Int = 0");

    let decl: Decl<()> = PropertySignature::constant("name", "String")
        .with_initializer(Expr::string("x"))
        .inferred()
        .into();
    assert_eq!(decl.to_swift(), r#"let name = "x""#);
}

#[test]
fn test_untyped_property_still_renders() {
    let decl: Decl<()> = Decl::Property(PropertySignature {
        access_level: AccessLevel::Internal,
        name: "x".to_string(),
        ty: None,
        is_static: false,
        is_let: false,
        initializer: None,
    });
    assert_eq!(decl.to_swift(), "var x");
}

#[test]
fn test_computed_property() {
    let getter_only: Decl<()> =
        ComputedPropertySignature::new("area", "Double", vec![Stmt::return_value(
            Expr::binary(var("width"), "*", var("height")),
        )])
        .into();
    assert_eq!(
        getter_only.to_swift(),
        indoc! {"
            var area: Double {
                get {
                    return width * height
                }
            }"}
    );

    let with_setter: Decl<()> =
        ComputedPropertySignature::new("value", "Int", vec![Stmt::return_value(var("storage"))])
            .with_static()
            .with_setter(
                "newValue",
                vec![Stmt::Expression(Expr::binary(
                    var("storage"),
                    "=",
                    var("newValue"),
                ))],
            )
            .into();
    assert_eq!(
        with_setter.to_swift(),
        indoc! {"
            static var value: Int {
                get {
                    return storage
                }
                set(newValue) {
                    storage = newValue
                }
            }"}
    );
}

#[test]
fn test_struct_point() {
    let decl: Decl<()> = StructSignature::new("Point")
        .conforming_to("Equatable")
        .with_member(PropertySignature::constant("x", "Double"))
        .with_member(PropertySignature::constant("y", "Double"))
        .into();
    assert_eq!(
        decl.to_swift(),
        indoc! {"
            struct Point: Equatable {
                let x: Double
                let y: Double
            }"}
    );
}

#[test]
fn test_conformance_clause_omitted_when_empty() {
    let decl: Decl<()> = StructSignature::new("Empty")
        .with_access(AccessLevel::Public)
        .into();
    let DeclSyntax::Struct(structure) = decl.render() else {
        panic!("Expected Struct");
    };
    assert!(structure.inheritance_clause.is_none());
    assert_eq!(structure.modifiers, Modifiers::PUBLIC);
    assert_eq!(decl.to_swift(), "public struct Empty {\n}");
}

#[test]
fn test_extension_with_nested_members() {
    let decl: Decl<()> = ExtensionSignature::new("Point")
        .conforming_to("CustomStringConvertible")
        .conforming_to("Sendable")
        .with_member(
            ComputedPropertySignature::new("description", "String", vec![Stmt::return_value(
                Expr::string("point"),
            )]),
        )
        .with_member(
            StructSignature::new("Delta")
                .with_member(PropertySignature::variable("dx", "Double")),
        )
        .into();
    assert_eq!(
        decl.to_swift(),
        indoc! {r#"
            extension Point: CustomStringConvertible, Sendable {
                var description: String {
                    get {
                        return "point"
                    }
                }
                struct Delta {
                    var dx: Double
                }
            }"#}
    );
}

#[test]
fn test_initializer() {
    let decl: Decl<()> = InitializerSignature::new(vec![Stmt::Expression(Expr::binary(
        var("self").property("x"),
        "=",
        var("x"),
    ))])
    .with_access(AccessLevel::Public)
    .with_parameter(ParameterSignature::new("x", "Double"))
    .with_throws()
    .into();
    assert_eq!(
        decl.to_swift(),
        indoc! {"
            public init(x: Double) throws {
                self.x = x
            }"}
    );
}

#[test]
fn test_declaration_sequence() {
    let decls: Vec<Decl<()>> = vec![
        PropertySignature::constant("a", "Int").into(),
        PropertySignature::constant("b", "Int").into(),
    ];
    assert_eq!(decls.to_swift(), "let a: Int\nlet b: Int");
}

#[test]
fn test_format_options() {
    let decl: Decl<()> = StructSignature::new("S")
        .with_member(PropertySignature::constant("x", "Int"))
        .into();
    let tabs = FormatOptions {
        indent_width: 4,
        use_tabs: true,
    };
    let two = FormatOptions {
        indent_width: 2,
        use_tabs: false,
    };
    assert_eq!(decl.to_swift_with(&tabs), "struct S {\n\tlet x: Int\n}");
    assert_eq!(decl.to_swift_with(&two), "struct S {\n  let x: Int\n}");
}

#[test]
fn test_rendering_is_deterministic() {
    let decl: Decl<()> = FunctionSignature::new("f")
        .with_body(vec![Stmt::return_value(Expr::for_each(
            "x",
            var("xs"),
            var("x"),
        ))])
        .into();
    assert_eq!(decl.to_swift(), decl.to_swift());
    assert_eq!(decl.render(), decl.clone().render());
}
