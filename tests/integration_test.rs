use std::io::Write;

use assert_cmd::Command;
use predicates as pred;
use tempfile::NamedTempFile;

#[test]
fn end_to_end_outputs_expected_balances() {
    // client 1: 10.5 - 3 - 2 = 5.5; the 300 withdrawal and the 200
    // transfer are rejected without touching any balance. Client 3 is
    // created by the failed transfer and stays at zero.
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        "type, client, to, tx, amount\n\
         deposit, 1, , 1, 10.5\n\
         withdrawal, 1, , 2, 3.0\n\
         withdrawal, 1, , 3, 300.0\n\
         transfer, 1, 2, 4, 2.0\n\
         transfer, 1, 3, 5, 200.0\n\
         not-a-command, 1, , 6,"
    )
    .unwrap();

    let exe = env!("CARGO_BIN_EXE_ledger_engine");
    let mut cmd = Command::new(exe);
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(pred::str::contains("client,balance"))
        .stdout(pred::str::contains("1,5.5000"))
        .stdout(pred::str::contains("2,2.0000"))
        .stdout(pred::str::contains("3,0.0000"));
}

#[test]
fn missing_input_file_argument_fails() {
    let exe = env!("CARGO_BIN_EXE_ledger_engine");
    Command::new(exe).assert().failure();
}
