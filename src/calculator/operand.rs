//! Operand text buffer.
//!
//! An operand keeps the text the user typed (so `"0."` or `"-5."` survive
//! on the display) and derives its numeric value from that text on demand.

/// One operand of the running expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Operand {
    text: String,
    /// Set when the operand was seeded from an evaluation.
    from_result: bool,
}

impl Operand {
    /// An operand holding a literal zero.
    pub fn zero() -> Self {
        Self::typed("0")
    }

    /// An operand started by a single digit.
    pub fn from_digit(digit: char) -> Self {
        Self {
            text: digit.to_string(),
            from_result: false,
        }
    }

    /// Seed an operand from a formatted evaluation result.
    pub fn from_result(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            from_result: true,
        }
    }

    fn typed(text: &str) -> Self {
        Self {
            text: text.to_string(),
            from_result: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this operand came out of an evaluation and is untouched since.
    pub fn is_result(&self) -> bool {
        self.from_result
    }

    /// Numeric value of the operand.
    ///
    /// A dangling decimal point or exponent marker left over from editing is
    /// ignored, so `"5."` is 5 and `"1.2e+"` is 1.2. Text that still does not
    /// parse counts as zero.
    pub fn value(&self) -> f64 {
        let trimmed = self
            .text
            .trim_end_matches(['+', '-'])
            .trim_end_matches(['e', 'E'])
            .trim_end_matches('.');
        trimmed.parse().unwrap_or(0.0)
    }

    /// Exactly the literal `"0"`, i.e. no significant digit typed yet.
    pub fn is_zero_literal(&self) -> bool {
        self.text == "0"
    }

    /// Exactly `"-0"`, a negated zero with no significant digit.
    pub fn is_signed_zero_literal(&self) -> bool {
        self.text == "-0"
    }

    pub fn is_negative(&self) -> bool {
        self.text.starts_with('-')
    }

    pub fn has_decimal_point(&self) -> bool {
        self.text.contains('.')
    }

    pub fn push_digit(&mut self, digit: char) {
        self.text.push(digit);
        self.from_result = false;
    }

    pub fn push_decimal_point(&mut self) {
        self.text.push('.');
        self.from_result = false;
    }

    /// Flip the sign, keeping the rest of the text as typed.
    pub fn negate(&mut self) {
        if let Some(rest) = self.text.strip_prefix('-') {
            self.text = rest.to_string();
        } else {
            self.text.insert(0, '-');
        }
    }

    /// Remove the last character.
    ///
    /// Returns `false` when nothing meaningful is left (empty text or a bare
    /// sign), in which case the caller drops the operand.
    pub fn pop_char(&mut self) -> bool {
        self.text.pop();
        self.from_result = false;
        !(self.text.is_empty() || self.text == "-")
    }
}
