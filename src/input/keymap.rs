//! Key mapping for the calculator front-end.
//!
//! Translates key names and button labels into calculator inputs or
//! front-end actions.

use crate::calculator::{Input, Operator};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

lazy_static! {
    /// Keys that read as a number are treated as digits.
    static ref NUMERIC_KEY: Regex = Regex::new(r"^[0-9]$").unwrap();
}

/// Something a key press can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Feed an input to the calculator.
    Input(Input),
    /// Copy the display to the clipboard.
    Copy,
    /// Leave the front-end.
    Quit,
}

impl Action {
    /// Resolve an action name as used in the `[keys]` config table.
    pub fn from_name(name: &str) -> Option<Self> {
        let action = match name {
            "clear" => Self::Input(Input::Clear),
            "sign" => Self::Input(Input::ToggleSign),
            "backspace" => Self::Input(Input::Backspace),
            "evaluate" => Self::Input(Input::Evaluate),
            "decimal" => Self::Input(Input::Decimal),
            "add" => Self::Input(Input::Operator(Operator::Add)),
            "subtract" => Self::Input(Input::Operator(Operator::Subtract)),
            "multiply" => Self::Input(Input::Operator(Operator::Multiply)),
            "divide" => Self::Input(Input::Operator(Operator::Divide)),
            "power" => Self::Input(Input::Operator(Operator::Power)),
            "copy" => Self::Copy,
            "quit" => Self::Quit,
            _ => return None,
        };
        Some(action)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeymapError {
    #[error("unknown action `{0}` in key bindings")]
    UnknownAction(String),
}

/// Map a key name or button label to a calculator input.
///
/// Covers digits, operator symbols and their keyboard aliases (`*`, `/`),
/// the decimal point, `Backspace`/`⌫`, `Enter`/`=`, the `+/-` sign button
/// and the `C`/`AC` clear buttons.
pub fn input_for_key(key: &str) -> Option<Input> {
    if NUMERIC_KEY.is_match(key) {
        return key.chars().next().map(Input::Digit);
    }

    let symbol = match key {
        "*" => "×",
        "/" => "÷",
        other => other,
    };
    if let Some(operator) = Operator::from_symbol(symbol) {
        return Some(Input::Operator(operator));
    }

    match key {
        "." => Some(Input::Decimal),
        "Backspace" | "⌫" => Some(Input::Backspace),
        "Enter" | "=" => Some(Input::Evaluate),
        "+/-" => Some(Input::ToggleSign),
        "C" | "AC" => Some(Input::Clear),
        _ => None,
    }
}

/// Key bindings for the terminal front-end.
#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        let bindings = [
            ("Escape", Action::Input(Input::Clear)),
            ("~", Action::Input(Input::ToggleSign)),
            ("y", Action::Copy),
            ("q", Action::Quit),
        ]
        .into_iter()
        .map(|(key, action)| (key.to_string(), action))
        .collect();

        Self { bindings }
    }
}

impl Keymap {
    /// Build a keymap from the defaults plus `action name -> keys` overrides.
    pub fn with_overrides(overrides: &HashMap<String, Vec<String>>) -> Result<Self, KeymapError> {
        let mut keymap = Self::default();
        for (name, keys) in overrides {
            let action =
                Action::from_name(name).ok_or_else(|| KeymapError::UnknownAction(name.clone()))?;
            for key in keys {
                keymap.bind(key, action);
            }
        }
        Ok(keymap)
    }

    pub fn bind(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    /// Resolve a key. Custom bindings win over the built-in mapping.
    pub fn resolve(&self, key: &str) -> Option<Action> {
        self.bindings
            .get(key)
            .copied()
            .or_else(|| input_for_key(key).map(Action::Input))
    }
}
