//! Text serialization of syntax nodes.

use crate::String;

/// Configuration options for printing syntax trees.
///
/// # Example
///
/// ```
/// use synthkit_syntax::FormatOptions;
///
/// let options = FormatOptions {
///     indent_width: 2,
///     use_tabs: false,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Number of spaces per indentation level (ignored when `use_tabs` is set).
    ///
    /// Default: 4
    pub indent_width: usize,

    /// Indent with one tab per level instead of spaces.
    ///
    /// Default: false
    pub use_tabs: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            use_tabs: false,
        }
    }
}

/// Accumulates printed text and tracks indentation.
///
/// Indentation is applied lazily: it is written in front of the first
/// non-empty fragment of each line, so blank lines never carry trailing
/// whitespace.
pub struct Printer<'o> {
    output: String,
    indent: usize,
    at_line_start: bool,
    options: &'o FormatOptions,
}

impl<'o> Printer<'o> {
    pub fn new(options: &'o FormatOptions) -> Self {
        Self {
            output: String::new(),
            indent: 0,
            at_line_start: true,
            options,
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            self.write_indent();
            self.at_line_start = false;
        }
        self.output.push_str(text);
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Runs `f` one indentation level deeper.
    pub fn indented(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent += 1;
        f(self);
        self.indent -= 1;
    }

    /// Prints `{`, each item on its own line one level deeper, then `}`.
    pub fn block<T: Syntax>(&mut self, items: &[T]) {
        self.write("{");
        self.indented(|p| {
            for item in items {
                p.newline();
                item.print(p);
            }
        });
        self.newline();
        self.write("}");
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            if self.options.use_tabs {
                self.output.push('\t');
            } else {
                for _ in 0..self.options.indent_width {
                    self.output.push(' ');
                }
            }
        }
    }
}

/// A node that can be serialized to Swift source text.
pub trait Syntax {
    fn print(&self, printer: &mut Printer<'_>);

    /// Serializes with [`FormatOptions::default`].
    fn formatted(&self) -> String {
        self.formatted_with(&FormatOptions::default())
    }

    fn formatted_with(&self, options: &FormatOptions) -> String {
        let mut printer = Printer::new(options);
        self.print(&mut printer);
        printer.finish()
    }
}

impl<T: Syntax + ?Sized> Syntax for &T {
    fn print(&self, printer: &mut Printer<'_>) {
        (**self).print(printer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Word(&'static str);

    impl Syntax for Word {
        fn print(&self, printer: &mut Printer<'_>) {
            printer.write(self.0);
        }
    }

    struct Block(Vec<Word>);

    impl Syntax for Block {
        fn print(&self, printer: &mut Printer<'_>) {
            printer.block(&self.0);
        }
    }

    #[test]
    fn test_block_indents_items() {
        let block = Block(vec![Word("a"), Word("b")]);
        assert_eq!(block.formatted(), "{\n    a\n    b\n}");
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(Block(vec![]).formatted(), "{\n}");
    }

    #[test]
    fn test_tabs_option() {
        let options = FormatOptions {
            indent_width: 4,
            use_tabs: true,
        };
        let block = Block(vec![Word("a")]);
        assert_eq!(block.formatted_with(&options), "{\n\ta\n}");
    }

    #[test]
    fn test_custom_indent_width() {
        let options = FormatOptions {
            indent_width: 2,
            use_tabs: false,
        };
        let block = Block(vec![Word("a")]);
        assert_eq!(block.formatted_with(&options), "{\n  a\n}");
    }
}
