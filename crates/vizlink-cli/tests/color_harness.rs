// crates/vizlink-cli/tests/color_harness.rs

use std::process::{Command, Output};

fn run_color(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vizlink-cli"));
    cmd.arg("color").args(args);
    let out = cmd.output().expect("spawn vizlink-cli");
    assert!(
        out.status.success(),
        "color {:?} failed: status={:?}\nstderr:\n{}",
        args,
        out.status.code(),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

#[test]
fn one_value_decodes_a_code() {
    let out = run_color(&["48"]);
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "> ColorCode: 48\n\
         <      Red: 1.000000\n\
         <    Green: 0.000000\n\
         <     Blue: 0.000000\n"
    );
}

#[test]
fn three_values_quantize_and_print_the_code() {
    let out = run_color(&["1.0", "0.0", "0.0"]);
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        ">      Red: 1.000000\n\
         >    Green: 0.000000\n\
         >     Blue: 0.000000\n\
         < ColorCode: 48\n"
    );
}

#[test]
fn preview_shows_the_quantized_triple_not_the_input() {
    let out = run_color(&["0.4", "0.4", "0.4"]);
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        ">      Red: 0.333333\n\
         >    Green: 0.333333\n\
         >     Blue: 0.333333\n\
         < ColorCode: 21\n"
    );
}

#[test]
fn high_bits_are_ignored_on_decode() {
    let out = run_color(&["128"]);
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "> ColorCode: 128\n\
         <      Red: 0.000000\n\
         <    Green: 0.000000\n\
         <     Blue: 0.000000\n"
    );
}

#[test]
fn other_argument_counts_are_a_silent_noop() {
    for args in [&[][..], &["1", "2"][..], &["1", "2", "3", "4"][..]] {
        let out = run_color(args);
        assert!(out.stdout.is_empty(), "args {:?} produced output", args);
    }
}
