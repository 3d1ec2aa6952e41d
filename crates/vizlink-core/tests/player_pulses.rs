// crates/vizlink-core/tests/player_pulses.rs

use vizlink_core::proto::limits::MAX_INSTANT_CHAIN;
use vizlink_core::proto::wire::parse;
use vizlink_core::{Player, Sequencer};

fn player(line: &str) -> Player {
    Player::new(Sequencer::new(parse(line).expect("parse ok")))
}

#[test]
fn durations_hold_commands_across_pulses() {
    // BPM holds for 2 pulses, then mode switches
    let mut p = player("vizlink24379;BPM:120:2;MOD:3:0;SCL:1.2:0");

    p.pulse();
    assert_eq!(p.state().bpm, 120.0);
    assert_eq!(p.state().mode.index(), 0); // still holding
    assert_eq!(p.countdown(), 2);

    p.pulse();
    assert_eq!(p.state().mode.index(), 0);
    assert_eq!(p.countdown(), 1);

    p.pulse();
    assert_eq!(p.state().mode.index(), 0);
    assert_eq!(p.countdown(), 0);

    // countdown spent: MOD and the instant SCL chain on this pulse
    p.pulse();
    assert_eq!(p.state().mode.index(), 3);
    assert_eq!(p.state().pulse_scale, 1.2);
}

#[test]
fn zero_duration_commands_chain_on_one_pulse() {
    let mut p = player("vizlink24379;MOD:3:0;SPD:1.5:0;COL:48:0;SCL:1.2:1");

    let executed = p.pulse();
    assert_eq!(p.state().mode.index(), 3);
    assert_eq!(p.state().speed, 1.5);
    assert_eq!(p.state().color, 48);
    assert_eq!(p.state().pulse_scale, 1.2);
    assert_eq!(executed, 4);
    assert_eq!(p.countdown(), 1);
}

#[test]
fn instant_chain_is_capped_per_pulse() {
    // the terminal command is an instant, so it would chain forever
    let mut p = player("vizlink24379;MOD:3:0;SPD:1.5:0");

    let executed = p.pulse();
    assert_eq!(executed, 1 + MAX_INSTANT_CHAIN);
}

#[test]
fn looped_sequence_cycles_state() {
    // color alternates 48 / 63, one pulse each
    let mut p = player("vizlink24379;COL:48:1;COL:63:1;LOP:1:0");

    let mut seen = Vec::new();
    for _ in 0..8 {
        p.pulse();
        seen.push(p.state().color);
    }
    assert_eq!(seen, vec![48, 48, 63, 63, 48, 48, 63, 63]);
}

#[test]
fn rewind_restarts_the_sequence() {
    let mut p = player("vizlink24379;MOD:3:1;MOD:1:1");
    p.pulse();
    assert_eq!(p.state().mode.index(), 3);

    p.rewind();
    p.pulse();
    assert_eq!(p.state().mode.index(), 3);
    assert_eq!(p.countdown(), 1);
}
