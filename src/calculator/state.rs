//! Expression state and its display projection.

use super::{Operand, Operator};

/// Where the running expression currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ExpressionState {
    /// Nothing typed; the display shows `0`.
    #[default]
    Empty,
    /// Typing the left-hand operand (or holding a seeded result).
    EnteringFirst { current: Operand },
    /// Operator chosen, right-hand operand not started.
    OperatorPending {
        previous: Operand,
        operator: Operator,
    },
    /// Typing the right-hand operand.
    EnteringSecond {
        previous: Operand,
        operator: Operator,
        current: Operand,
    },
    /// The last evaluation failed; the next input starts over.
    Error,
}

impl ExpressionState {
    pub fn current_operand(&self) -> Option<&Operand> {
        match self {
            Self::EnteringFirst { current } | Self::EnteringSecond { current, .. } => Some(current),
            _ => None,
        }
    }

    pub(crate) fn current_operand_mut(&mut self) -> Option<&mut Operand> {
        match self {
            Self::EnteringFirst { current } | Self::EnteringSecond { current, .. } => Some(current),
            _ => None,
        }
    }

    pub fn previous_operand(&self) -> Option<&Operand> {
        match self {
            Self::OperatorPending { previous, .. } | Self::EnteringSecond { previous, .. } => {
                Some(previous)
            }
            _ => None,
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Self::OperatorPending { operator, .. } | Self::EnteringSecond { operator, .. } => {
                Some(*operator)
            }
            _ => None,
        }
    }

    /// Operands committed to the expression so far.
    ///
    /// This is the left-hand operand of a pending operation, or the seeded
    /// result right after an evaluation.
    pub fn operands(&self) -> Vec<&Operand> {
        match self {
            Self::EnteringFirst { current } if current.is_result() => vec![current],
            Self::OperatorPending { previous, .. } | Self::EnteringSecond { previous, .. } => {
                vec![previous]
            }
            _ => Vec::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Render the display text for this state.
    pub fn display(&self, error_text: &str) -> String {
        match self {
            Self::Empty => "0".to_string(),
            Self::EnteringFirst { current } => current.text().to_string(),
            Self::OperatorPending { previous, operator } => {
                format!("{} {} ", previous.text(), operator)
            }
            Self::EnteringSecond {
                previous,
                operator,
                current,
            } => {
                if current.is_negative() {
                    format!("{} {} ({})", previous.text(), operator, current.text())
                } else {
                    format!("{} {} {}", previous.text(), operator, current.text())
                }
            }
            Self::Error => error_text.to_string(),
        }
    }
}
