//! Binary operators understood by the calculator.

use std::fmt;

/// A pending binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Look up an operator by its display symbol.
    ///
    /// Only the calculator's own symbols are accepted here; keyboard aliases
    /// like `*` and `/` are resolved by the key mapping.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" => Some(Self::Multiply),
            "÷" => Some(Self::Divide),
            "^" => Some(Self::Power),
            _ => None,
        }
    }

    /// The symbol shown on the display.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_resolve() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
            Operator::Power,
        ] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_keyboard_aliases_rejected() {
        assert_eq!(Operator::from_symbol("*"), None);
        assert_eq!(Operator::from_symbol("/"), None);
        assert_eq!(Operator::from_symbol(""), None);
    }
}
