//! Input processor: folds one input event at a time into the expression.

use super::evaluation::{ArithmeticError, DEFAULT_MAX_CHARS, format_result, operate};
use super::{ExpressionState, Operand, Operator};
use crate::frame::Frame;
use std::mem;
use tracing::debug;

/// Display text shown when an evaluation fails.
pub const DEFAULT_ERROR_TEXT: &str = "error";

/// One input event understood by the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// An ASCII digit `0`-`9`.
    Digit(char),
    Decimal,
    ToggleSign,
    Operator(Operator),
    Backspace,
    Evaluate,
    Clear,
}

/// How results and errors are shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Maximum width of a formatted result.
    pub max_chars: usize,
    /// Sentinel shown after a failed evaluation.
    pub error_text: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            error_text: DEFAULT_ERROR_TEXT.to_string(),
        }
    }
}

/// A calculator instance. Each handler mutates the expression and the
/// display is re-rendered from it afterwards.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: ExpressionState,
    pending_negation: bool,
    settings: DisplaySettings,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: DisplaySettings) -> Self {
        Self {
            state: ExpressionState::Empty,
            pending_negation: false,
            settings,
        }
    }

    /// Process one input and return the frame to render.
    pub fn apply(&mut self, input: Input) -> Frame {
        match input {
            Input::Digit(digit) => self.input_digit(digit),
            Input::Decimal => self.input_decimal(),
            Input::ToggleSign => self.toggle_sign(),
            Input::Operator(operator) => self.input_operator(operator),
            Input::Backspace => self.backspace(),
            Input::Evaluate => self.evaluate(),
            Input::Clear => self.clear(),
        }

        let frame = self.frame();
        debug!(
            ?input,
            display = %frame.display,
            negation_armed = frame.negation_armed,
            "processed input"
        );
        frame
    }

    pub fn frame(&self) -> Frame {
        Frame {
            display: self.display(),
            negation_armed: self.pending_negation,
            is_error: self.state.is_error(),
        }
    }

    pub fn display(&self) -> String {
        self.state.display(&self.settings.error_text)
    }

    pub fn state(&self) -> &ExpressionState {
        &self.state
    }

    pub fn current_operand(&self) -> Option<&Operand> {
        self.state.current_operand()
    }

    pub fn previous_operand(&self) -> Option<&Operand> {
        self.state.previous_operand()
    }

    pub fn operator(&self) -> Option<Operator> {
        self.state.operator()
    }

    pub fn operands(&self) -> Vec<&Operand> {
        self.state.operands()
    }

    /// Whether the next operand will be negated once a digit arrives.
    pub fn negation_armed(&self) -> bool {
        self.pending_negation
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    /// Enter a digit. Non-digit characters are ignored.
    pub fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            debug!(%digit, "ignoring non-digit input");
            return;
        }
        self.recover();

        self.state = match mem::take(&mut self.state) {
            ExpressionState::Empty | ExpressionState::Error => ExpressionState::EnteringFirst {
                current: Operand::from_digit(digit),
            },
            ExpressionState::OperatorPending { previous, operator } => {
                ExpressionState::EnteringSecond {
                    previous,
                    operator,
                    current: Operand::from_digit(digit),
                }
            }
            ExpressionState::EnteringFirst { current } => ExpressionState::EnteringFirst {
                current: append_digit(current, digit),
            },
            ExpressionState::EnteringSecond {
                previous,
                operator,
                current,
            } => ExpressionState::EnteringSecond {
                previous,
                operator,
                current: append_digit(current, digit),
            },
        };

        self.apply_pending_negation();
    }

    /// Enter a decimal point. A second point in the same operand is ignored.
    pub fn input_decimal(&mut self) {
        self.recover();

        self.state = match mem::take(&mut self.state) {
            ExpressionState::Empty | ExpressionState::Error => ExpressionState::EnteringFirst {
                current: with_decimal_point(Operand::zero()),
            },
            ExpressionState::OperatorPending { previous, operator } => {
                ExpressionState::EnteringSecond {
                    previous,
                    operator,
                    current: with_decimal_point(Operand::zero()),
                }
            }
            ExpressionState::EnteringFirst { current } => ExpressionState::EnteringFirst {
                current: with_decimal_point(current),
            },
            ExpressionState::EnteringSecond {
                previous,
                operator,
                current,
            } => ExpressionState::EnteringSecond {
                previous,
                operator,
                current: with_decimal_point(current),
            },
        };
    }

    /// Flip the sign of the current operand, or arm/disarm the negation of
    /// the next one when no significant digit has been typed yet.
    pub fn toggle_sign(&mut self) {
        self.recover();

        match self.state.current_operand_mut() {
            Some(current) if !current.is_zero_literal() => {
                current.negate();
                self.pending_negation = false;
            }
            _ => {
                self.pending_negation = !self.pending_negation;
                debug!(armed = self.pending_negation, "toggled pending negation");
            }
        }
    }

    /// Choose an operator, evaluating a complete pending operation first.
    pub fn input_operator(&mut self, operator: Operator) {
        self.recover();

        self.state = match mem::take(&mut self.state) {
            ExpressionState::Empty | ExpressionState::Error => ExpressionState::OperatorPending {
                previous: Operand::zero(),
                operator,
            },
            ExpressionState::EnteringFirst { current } => ExpressionState::OperatorPending {
                previous: current,
                operator,
            },
            // Consecutive operators replace the pending one.
            ExpressionState::OperatorPending { previous, .. } => {
                ExpressionState::OperatorPending { previous, operator }
            }
            ExpressionState::EnteringSecond {
                previous,
                operator: pending,
                current,
            } => match self.compute(pending, &previous, &current) {
                Ok(result) => ExpressionState::OperatorPending {
                    previous: result,
                    operator,
                },
                Err(_) => ExpressionState::Error,
            },
        };
    }

    /// Evaluate the pending operation. Without both operands and an
    /// operator this does nothing.
    pub fn evaluate(&mut self) {
        self.recover();

        self.state = match mem::take(&mut self.state) {
            ExpressionState::EnteringSecond {
                previous,
                operator,
                current,
            } => match self.compute(operator, &previous, &current) {
                Ok(result) => ExpressionState::EnteringFirst { current: result },
                Err(_) => ExpressionState::Error,
            },
            other => other,
        };
    }

    /// Delete the most recently entered character.
    ///
    /// Deleting a pending operator makes the left-hand operand editable
    /// again. Deleting the last digit of a negative operand drops the operand
    /// together with its sign (and parentheses), so the display shrinks by
    /// more than one character. Any armed negation is dropped.
    pub fn backspace(&mut self) {
        self.recover();
        self.pending_negation = false;

        self.state = match mem::take(&mut self.state) {
            ExpressionState::Empty | ExpressionState::Error => ExpressionState::Empty,
            ExpressionState::OperatorPending { previous, .. } => {
                ExpressionState::EnteringFirst { current: previous }
            }
            ExpressionState::EnteringFirst { mut current } => {
                if current.pop_char() {
                    ExpressionState::EnteringFirst { current }
                } else {
                    ExpressionState::Empty
                }
            }
            ExpressionState::EnteringSecond {
                previous,
                operator,
                mut current,
            } => {
                if current.pop_char() {
                    ExpressionState::EnteringSecond {
                        previous,
                        operator,
                        current,
                    }
                } else {
                    ExpressionState::OperatorPending { previous, operator }
                }
            }
        };
    }

    /// Reset to a fresh calculator, keeping only the display settings.
    pub fn clear(&mut self) {
        let settings = mem::take(&mut self.settings);
        *self = Self::with_settings(settings);
    }

    /// Run the operation and seed its formatted result as a new operand.
    ///
    /// Evaluation resets the expression, so any armed negation is dropped.
    fn compute(
        &mut self,
        operator: Operator,
        previous: &Operand,
        current: &Operand,
    ) -> Result<Operand, ArithmeticError> {
        self.pending_negation = false;

        match operate(operator, previous.value(), current.value()) {
            Ok(value) => {
                let text = format_result(value, self.settings.max_chars);
                debug!(
                    %operator,
                    lhs = previous.text(),
                    rhs = current.text(),
                    result = %text,
                    "evaluated"
                );
                Ok(Operand::from_result(text))
            }
            Err(err) => {
                debug!(
                    %operator,
                    lhs = previous.text(),
                    rhs = current.text(),
                    error = %err,
                    "evaluation failed"
                );
                Err(err)
            }
        }
    }

    fn apply_pending_negation(&mut self) {
        if !self.pending_negation {
            return;
        }
        if let Some(current) = self.state.current_operand_mut()
            && !current.is_zero_literal()
        {
            current.negate();
            self.pending_negation = false;
        }
    }

    /// Leave the error state before handling new input.
    fn recover(&mut self) {
        if self.state.is_error() {
            debug!("resetting after error");
            self.clear();
        }
    }
}

/// Leading zeros are suppressed: another `0` is ignored and any other
/// digit replaces the lone zero, keeping a minus sign if there is one.
fn append_digit(mut operand: Operand, digit: char) -> Operand {
    if operand.is_zero_literal() || operand.is_signed_zero_literal() {
        if digit == '0' {
            return operand;
        }
        let negative = operand.is_negative();
        let mut replaced = Operand::from_digit(digit);
        if negative {
            replaced.negate();
        }
        return replaced;
    }
    operand.push_digit(digit);
    operand
}

fn with_decimal_point(mut operand: Operand) -> Operand {
    if !operand.has_decimal_point() {
        operand.push_decimal_point();
    }
    operand
}
