use std::str::from_utf8;

use bank_teller::{ErrorKind, bin_utils::Service};

const TEST_FILE: &str = include_str!("transactions.txt");

#[test]
fn process_transactions() {
    let mut output = Vec::new();
    let service = Service {
        input: TEST_FILE.as_bytes(),
        output: &mut output,
        account_id: "A1".to_string(),
        opening_balance: 20,
    };
    let summary = service.run().unwrap();
    assert_eq!(summary.applied, 4);
    assert_eq!(summary.skipped, 4);

    let lines: Vec<&str> = from_utf8(&output).unwrap().lines().collect();
    assert_eq!(
        lines,
        [
            "id,balance,transactions,recent",
            "A1,70,5,1 35;1 5;0 10;1 20;1 20",
        ]
    );
}

#[test]
fn opening_balance_below_minimum() {
    let mut output = Vec::new();
    let service = Service {
        input: TEST_FILE.as_bytes(),
        output: &mut output,
        account_id: "A1".to_string(),
        opening_balance: 5,
    };
    let err = service.run().unwrap_err();
    let account_err = err.downcast_ref::<bank_teller::AccountError>().unwrap();
    assert_eq!(account_err.kind(), ErrorKind::InvalidArgument);
    assert!(output.is_empty());
}
