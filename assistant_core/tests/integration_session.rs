//! Integration tests for a full assistant session.
//!
//! These tests verify that:
//! - Responses follow the dispatch table line by line
//! - Recovered errors never end the session or corrupt the contact book
//! - Listing preserves insertion order

use assistant_core::{CommandInterpreter, SessionState};

fn replay(lines: &[&str]) -> (CommandInterpreter, Vec<String>) {
    let mut interpreter = CommandInterpreter::new();
    let responses = lines
        .iter()
        .map_while(|line| interpreter.execute(line))
        .collect();
    (interpreter, responses)
}

#[test]
fn test_scripted_session() {
    let (interpreter, responses) = replay(&[
        "hello",
        "add Alice 123",
        "add Bob 456",
        "phone Alice",
        "change Alice 789",
        "all",
        "exit",
        "hello",
    ]);

    assert_eq!(
        responses,
        vec![
            "How can I help you?",
            "Contact added.",
            "Contact added.",
            "123",
            "Contact updated.",
            "Alice: 789\nBob: 456",
            "Good bye!",
        ]
    );
    assert_eq!(interpreter.state(), SessionState::Terminated);
}

#[test]
fn test_errors_do_not_end_session() {
    let (interpreter, responses) = replay(&[
        "phone",
        "add OnlyName",
        "change Bob 555",
        "phone Bob",
        "frobnicate",
        "",
        "all",
    ]);

    assert_eq!(
        responses,
        vec![
            "Enter user name.",
            "Give me name and phone please.",
            "Contact not found.",
            "Contact not found.",
            "Invalid command.",
            "Invalid command.",
            "",
        ]
    );
    assert!(interpreter.is_running());
    assert!(interpreter.store().is_empty());
}

#[test]
fn test_add_overwrites_existing_contact() {
    let (interpreter, responses) = replay(&["add A 1", "add B 2", "add A 3", "all"]);

    assert_eq!(responses.last().map(String::as_str), Some("A: 3\nB: 2"));
    assert_eq!(interpreter.store().len(), 2);
}

#[test]
fn test_failed_add_does_not_mutate() {
    let (interpreter, _) = replay(&["add A 1", "add A 2 3"]);
    assert_eq!(interpreter.store().get("A"), Ok("1"));
}
