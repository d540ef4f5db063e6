use clap::Parser;
use miette::{Result, bail};
use synthkit::{
    AccessLevel, Argument, ComputedPropertySignature, Decl, Expr, ExtensionSignature,
    FormatOptions, FunctionSignature, InitializerSignature, ParameterSignature, PropertySignature,
    Render, Stmt, StructSignature, validate_decls,
};

/// Render sample syntax trees as Swift source
#[derive(Parser, Debug)]
#[command(name = "render-demo")]
#[command(about = "Render sample synthkit trees as Swift", long_about = None)]
struct Args {
    /// Spaces per indentation level
    #[arg(long, default_value_t = 4)]
    indent: usize,

    /// Indent with tabs instead of spaces
    #[arg(long)]
    tabs: bool,

    /// Check declarations before rendering
    #[arg(long)]
    validate: bool,

    /// Show renderer logs on stderr
    #[arg(long)]
    verbose: bool,
}

/// Binding ids attached to every variable reference.
type BindingId = u32;

fn var(name: &str, id: BindingId) -> Expr<BindingId> {
    Expr::variable(name, id)
}

fn point() -> Decl<BindingId> {
    let init = InitializerSignature::new(vec![
        Stmt::Expression(Expr::binary(var("self", 0).property("x"), "=", var("x", 1))),
        Stmt::Expression(Expr::binary(var("self", 0).property("y"), "=", var("y", 2))),
    ])
    .with_access(AccessLevel::Public)
    .with_parameter(ParameterSignature::new("x", "Double"))
    .with_parameter(ParameterSignature::new("y", "Double"));

    let length = ComputedPropertySignature::new(
        "length",
        "Double",
        vec![Stmt::return_value(
            Expr::binary(
                Expr::binary(var("x", 3), "*", var("x", 3)),
                "+",
                Expr::binary(var("y", 4), "*", var("y", 4)),
            )
            .method("squareRoot", vec![]),
        )],
    );

    StructSignature::new("Point")
        .with_access(AccessLevel::Public)
        .conforming_to("Equatable")
        .with_member(PropertySignature::constant("x", "Double").with_access(AccessLevel::Public))
        .with_member(PropertySignature::constant("y", "Double").with_access(AccessLevel::Public))
        .with_member(
            PropertySignature::constant("origin", "Point")
                .with_static()
                .with_initializer(Expr::call(
                    "Point",
                    vec![
                        Argument::labeled("x", Expr::double(0.0)),
                        Argument::labeled("y", Expr::double(0.0)),
                    ],
                )),
        )
        .with_member(init)
        .with_member(length)
        .into()
}

fn description() -> Decl<BindingId> {
    ExtensionSignature::new("Point")
        .conforming_to("CustomStringConvertible")
        .with_member(ComputedPropertySignature::new(
            "description",
            "String",
            vec![Stmt::return_value(Expr::call(
                "String",
                vec![Argument::labeled(
                    "describing",
                    Expr::array(vec![var("x", 5), var("y", 6)]),
                )],
            ))],
        ))
        .into()
}

fn print_all() -> Decl<BindingId> {
    FunctionSignature::new("printAll")
        .with_parameter(ParameterSignature::new("points", "[Point]").with_label("_"))
        .with_throws()
        .with_body(vec![
            Stmt::guard(
                Expr::binary(var("points", 7).property("count"), ">", Expr::int(0)),
                vec![Stmt::Return(None)],
            ),
            Stmt::Expression(Expr::for_each(
                "point",
                var("points", 7),
                Expr::call("print", vec![var("point", 8).into()]),
            )),
        ])
        .into()
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = if args.verbose { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let decls = vec![point(), description(), print_all()];

    if args.validate {
        if let Err(errors) = validate_decls(&decls) {
            for error in &errors {
                tracing::error!(%error, "invalid declaration");
            }
            bail!("{} declaration(s) failed validation", errors.len());
        }
    }

    let options = FormatOptions {
        indent_width: args.indent,
        use_tabs: args.tabs,
    };
    for decl in &decls {
        println!("{}", decl.to_swift_with(&options));
        println!();
    }

    Ok(())
}
