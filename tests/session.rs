use std::io::Cursor;

use menucalc::{config, Console, MenuError};

fn drive(input: &str) -> (Result<(), MenuError>, String) {
    let menu = config::default_menu();
    let mut out = Vec::new();
    let result = {
        let mut console = Console::new(Cursor::new(input.to_string()), &mut out);
        menu.run(&mut console)
    };
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn add_then_abort() {
    let (result, out) = drive("1\n2\n3\n0\n");
    assert!(result.is_ok());
    assert!(out.starts_with("Main menu\n1) Add two numbers\n2) Multiply or divide?\n"));
    assert!(out.contains("You chose 'Add two numbers' (1)"));
    assert!(out.contains("Enter a: Enter b: 2 + 3 = 5\n"));
}

#[test]
fn nested_multiply_and_divide() {
    let (result, out) = drive("2\n1\n4\n5\n2\n10\n2\n0\n0\n");
    assert!(result.is_ok());
    assert!(out.contains("You chose 'Multiply or divide?' (2)"));
    assert!(out.contains("4 * 5 = 20\n"));
    assert!(out.contains("10 / 2 = 5\n"));
    assert_eq!(out.matches("Main menu").count(), 2);
}

#[test]
fn divide_by_zero_returns_to_submenu() {
    let (result, out) = drive("2\n2\n1\n0\n0\n0\n");
    assert!(result.is_ok());
    assert!(out.contains("Error: Division by zero"));
    assert!(!out.contains("1 / 0 ="));
    assert_eq!(out.matches("1) Multiply two numbers").count(), 2);
}

#[test]
fn bad_input_is_reported_and_menu_stays() {
    let (result, out) = drive("7\nfoo\n0\n");
    assert!(result.is_ok());
    assert!(out.contains("Error: Invalid choice 7, expected 0 to 2"));
    assert!(out.contains("Error: Not a number: 'foo'"));
    assert_eq!(out.matches("Main menu").count(), 3);
}

#[test]
fn closed_input_ends_session() {
    let (result, _) = drive("2\n");
    assert!(matches!(result, Err(MenuError::InputClosed)));
}
