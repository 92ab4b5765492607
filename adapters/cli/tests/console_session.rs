use std::{
    io::Write,
    process::{Command, Stdio},
};

fn run_console(args: &[&str], script: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mars-rovers"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to launch the mars-rovers binary");

    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(script.as_bytes())
        .expect("failed to feed the session script");

    let output = child.wait_with_output().expect("failed to collect output");
    assert!(output.status.success(), "console session should exit cleanly");
    String::from_utf8(output.stdout).expect("transcript should be valid utf-8")
}

#[test]
fn scripted_session_surveys_the_plateau() {
    let transcript = run_console(&[], "P\n16\n10\nA\nAres\n6 5 N\nAres\nC\nLMLMM\nL\n\n\n\n\n");

    assert!(transcript.starts_with("Welcome to Mars Rovers."));
    assert!(transcript.contains("Created a plateau"));
    assert!(transcript.contains("Added the rover Ares"));
    assert!(transcript.contains("\n5 3 S\n"));
}

#[test]
fn dimension_flags_pre_create_the_first_plateau() {
    let transcript = run_console(
        &["--width", "16", "--height", "10"],
        "A\nScout\n0 0 E\nScout\nC\nMM\n\n\n\n",
    );

    assert!(transcript.contains("Created a plateau"));
    assert!(transcript.contains("16 units wide (West to East) and 10 units deep (South to North)"));
    assert!(transcript.contains("Added the rover Scout"));
    assert!(transcript.contains("\n2 0 E\n"));
}
