use zcalc::calculator::{ArithmeticError, Operand, operate};
use zcalc::input::{Keymap, parse_keys};
use zcalc::ui::Session;
use zcalc::{Calculator, Frame, Operator};

fn type_keys(session: &mut Session, keys: &str) -> Frame {
    session.feed(&parse_keys(keys));
    session.frame()
}

fn new_session() -> Session {
    Session::new(Calculator::new(), Keymap::default())
}

#[test]
fn digits_typed_fresh_match_current_operand() {
    for (keys, expected) in [("005", "5"), ("0", "0"), ("907", "907"), ("000", "0")] {
        let mut session = new_session();
        type_keys(&mut session, keys);
        assert_eq!(
            session.calculator().current_operand().map(Operand::text),
            Some(expected),
            "keys {keys}"
        );
    }
}

#[test]
fn division_by_zero_always_errors() {
    for a in [0.0, 1.0, -3.5, 1e300] {
        assert_eq!(
            operate(Operator::Divide, a, 0.0),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    let mut session = new_session();
    assert!(type_keys(&mut session, "8/0=").is_error);
    let frame = type_keys(&mut session, "2");
    assert_eq!(frame.display, "2");
    assert!(session.calculator().operator().is_none());
}

#[test]
fn clear_then_add_then_evaluate() {
    let mut session = new_session();
    let frame = type_keys(&mut session, "9C5+3<Enter>");
    assert_eq!(frame.display, "8");

    let calc = session.calculator();
    assert_eq!(calc.current_operand().map(Operand::value), Some(8.0));
    assert!(calc.operator().is_none());
    assert!(calc.previous_operand().is_none());
}

#[test]
fn backspace_shrinks_display_by_one_character() {
    let mut session = new_session();
    type_keys(&mut session, "123+45");

    let mut lengths = vec![session.frame().display.chars().count()];
    for _ in 0..7 {
        lengths.push(type_keys(&mut session, "<Backspace>").display.chars().count());
    }

    // "123 + 45" -> "123 + 4" -> "123 + " -> "123" -> "12" -> "1" -> "0" -> "0"
    assert_eq!(lengths, vec![8, 7, 6, 3, 2, 1, 1, 1]);
    assert_eq!(session.frame().display, "0");
}

#[test]
fn sign_toggle_before_digit_arms_then_applies() {
    let mut session = new_session();
    let armed = type_keys(&mut session, "~");
    assert!(armed.negation_armed);
    assert_eq!(armed.display, "0");

    let frame = type_keys(&mut session, "7");
    assert!(!frame.negation_armed);
    assert_eq!(session.calculator().current_operand().map(Operand::value), Some(-7.0));
}

#[test]
fn consecutive_operators_replace() {
    let mut session = new_session();
    let frame = type_keys(&mut session, "5+-");
    assert_eq!(frame.display, "5 - ");
    assert_eq!(session.calculator().operator(), Some(Operator::Subtract));
}

#[test]
fn wide_results_are_reformatted() {
    let mut session = new_session();
    assert_eq!(type_keys(&mut session, "999999×999999=").display, "9.999980e+11");

    let mut session = new_session();
    assert_eq!(type_keys(&mut session, "2/3=").display, "0.666666667");
}
