//! Keyword sets attached to declarations.

use crate::printer::Printer;
use bitflags::bitflags;

bitflags! {
    /// Declaration modifiers.
    ///
    /// Printed in a fixed order (access level first, then `static`) no matter
    /// how the set was assembled, so the same set always yields the same text.
    /// There is no `internal` flag: it is Swift's default and never spelled.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Modifiers: u8 {
        const PUBLIC = 1;
        const FILEPRIVATE = 1 << 1;
        const PRIVATE = 1 << 2;
        const STATIC = 1 << 3;
    }
}

bitflags! {
    /// Effect specifiers on functions and initializers (`async`, `throws`).
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct EffectSpecifiers: u8 {
        const ASYNC = 1;
        const THROWS = 1 << 1;
    }
}

const MODIFIER_TOKENS: [(Modifiers, &str); 4] = [
    (Modifiers::PUBLIC, "public"),
    (Modifiers::FILEPRIVATE, "fileprivate"),
    (Modifiers::PRIVATE, "private"),
    (Modifiers::STATIC, "static"),
];

const EFFECT_TOKENS: [(EffectSpecifiers, &str); 2] = [
    (EffectSpecifiers::ASYNC, "async"),
    (EffectSpecifiers::THROWS, "throws"),
];

impl Modifiers {
    /// Keyword tokens in canonical order.
    pub fn tokens(self) -> impl Iterator<Item = &'static str> {
        MODIFIER_TOKENS
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, token)| token)
    }

    /// Prints each modifier followed by a space.
    pub(crate) fn print(self, printer: &mut Printer<'_>) {
        for token in self.tokens() {
            printer.write(token);
            printer.write(" ");
        }
    }
}

impl EffectSpecifiers {
    /// Keyword tokens in the order Swift requires (`async` before `throws`).
    pub fn tokens(self) -> impl Iterator<Item = &'static str> {
        EFFECT_TOKENS
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, token)| token)
    }

    /// Prints each specifier preceded by a space.
    pub(crate) fn print(self, printer: &mut Printer<'_>) {
        for token in self.tokens() {
            printer.write(" ");
            printer.write(token);
        }
    }
}
