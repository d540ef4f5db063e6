use once_cell::sync::Lazy;
use synthkit::*;

/// A tree of any tier, so one table can hold them all.
pub enum Tree {
    Expr(Expr<i32>),
    Stmt(Stmt<i32>),
    Decl(Decl<i32>),
}

impl Tree {
    pub fn to_swift(&self) -> String {
        match self {
            Tree::Expr(expr) => expr.to_swift(),
            Tree::Stmt(stmt) => stmt.to_swift(),
            Tree::Decl(decl) => decl.to_swift(),
        }
    }
}

pub struct TestCase {
    pub name: &'static str,
    pub tree: Tree,
    pub swift: &'static str,
}

pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "integer_literal",
            tree: Tree::Expr(Expr::Literal(Literal::Integer(42))),
            swift: "42",
        },
        TestCase {
            name: "binary_operation",
            tree: Tree::Expr(Expr::binary(Expr::int(1), "+", Expr::int(2))),
            swift: "1 + 2",
        },
        TestCase {
            name: "loop_as_for_each",
            tree: Tree::Expr(Expr::for_each(
                "item",
                Expr::variable("items", 0),
                Expr::variable("item", 1),
            )),
            swift: "items.forEach { item in item }",
        },
        TestCase {
            name: "variable",
            tree: Tree::Expr(Expr::variable("x", 5)),
            swift: "x",
        },
        TestCase {
            name: "point_struct",
            tree: Tree::Decl(
                StructSignature::new("Point")
                    .conforming_to("Equatable")
                    .with_member(PropertySignature::constant("x", "Double"))
                    .with_member(PropertySignature::constant("y", "Double"))
                    .into(),
            ),
            swift: "struct Point: Equatable {\n    let x: Double\n    let y: Double\n}",
        },
        TestCase {
            name: "internal_function",
            tree: Tree::Decl(FunctionSignature::new("run").into()),
            swift: "func run() {\n}",
        },
        TestCase {
            name: "public_function",
            tree: Tree::Decl(
                FunctionSignature::new("run")
                    .with_access(AccessLevel::Public)
                    .into(),
            ),
            swift: "public func run() {\n}",
        },
        TestCase {
            name: "inline_declaration",
            tree: Tree::Expr(Expr::inline_declaration(
                "n",
                Some("Int".to_string()),
                Expr::variable("seed", 2),
            )),
            swift: "seed",
        },
        TestCase {
            name: "let_binding",
            tree: Tree::Stmt(Stmt::let_binding(
                "total",
                Some("Int".to_string()),
                Expr::call("sum", vec![Expr::variable("xs", 3).into()]),
            )),
            swift: "let total: Int = sum(xs)",
        },
        TestCase {
            name: "guard_return",
            tree: Tree::Stmt(Stmt::guard(
                Expr::variable("ready", 4),
                vec![Stmt::Return(None)],
            )),
            swift: "guard ready else {\n    return\n}",
        },
    ]
});
