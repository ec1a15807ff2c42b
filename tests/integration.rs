use std::{cell::RefCell, rc::Rc, str::from_utf8};

use tiny_bank::bin_utils::Service;

const TEST_FILE: &str = include_str!("operations.csv");

/// Runs a script through the service, returning the collected rejection
/// messages with their line numbers.
fn run_service(input: &str, output: &mut Vec<u8>) -> Vec<(u64, String)> {
    let collected = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&collected);
    let service = Service {
        input: input.as_bytes(),
        output,
        error_printer: Box::new(move |line, err| {
            sink.borrow_mut().push((line, err.to_string()));
        }),
    };
    service.run().unwrap();
    // the service (and with it the printer closure) is gone by now
    Rc::try_unwrap(collected).unwrap().into_inner()
}

#[test]
fn replays_the_demo_scenario() {
    let mut output = Vec::new();
    let errors = run_service(TEST_FILE, &mut output);

    assert!(errors.is_empty(), "unexpected rejections: {errors:?}");
    // statement rows are printed in creation order
    let lines: Vec<&str> = from_utf8(&output).unwrap().lines().collect();
    assert_eq!(
        lines,
        [
            "account,balance,transactions",
            "John Doe,1000,3",
            "Jane Doe,800,1",
        ]
    );
}

#[test]
fn rejected_operations_are_reported_and_change_nothing() {
    const SCRIPT: &str = "\
op,account,to,amount
open,John Doe,,1000
open,John Doe,,9999
withdrawal,John Doe,,2000
deposit,John Doe,,-50
transfer,John Doe,Jane Doe,300
deposit,John Doe,
";

    let mut output = Vec::new();
    let errors = run_service(SCRIPT, &mut output);

    let messages: Vec<&str> = errors.iter().map(|(_, msg)| msg.as_str()).collect();
    assert_eq!(
        messages,
        [
            "Account `John Doe` already exists",
            "Insufficient funds",
            "Deposit amount must not be negative",
            "Unknown account `Jane Doe`",
            "Amount is required for Deposit",
        ]
    );
    // line numbers follow the input rows
    assert_eq!(
        errors.iter().map(|(line, _)| *line).collect::<Vec<_>>(),
        [3, 4, 5, 6, 7]
    );

    // every rejection was a no-op: one account, untouched
    let lines: Vec<&str> = from_utf8(&output).unwrap().lines().collect();
    assert_eq!(lines, ["account,balance,transactions", "John Doe,1000,0"]);
}
