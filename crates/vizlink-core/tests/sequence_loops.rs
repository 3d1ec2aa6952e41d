// crates/vizlink-core/tests/sequence_loops.rs

use vizlink_core::proto::command::{Command, CommandKind};
use vizlink_core::proto::sequence::Sequencer;
use vizlink_core::proto::wire::{parse, CommandSequence};

fn kinds(seq: &mut Sequencer, n: usize) -> Vec<CommandKind> {
    (0..n).map(|_| seq.next_command().kind).collect()
}

#[test]
fn straight_sequence_holds_on_terminal() {
    let seq = parse("vizlink24379;BPM:120:0;SPD:1.5:0;SCL:1.0:0").expect("parse ok");
    let mut s = Sequencer::new(seq);

    assert_eq!(
        kinds(&mut s, 5),
        vec![
            CommandKind::Bpm,
            CommandKind::Speed,
            CommandKind::Scale,
            CommandKind::Scale,
            CommandKind::Scale,
        ]
    );
}

#[test]
fn bounded_loop_replays_then_falls_through() {
    // LOP target 1 = first sub-command, two iterations
    let seq = parse("vizlink24379;SPD:1:0;LOP:1:2;SCL:1.0:0").expect("parse ok");
    let mut s = Sequencer::new(seq);

    assert_eq!(
        kinds(&mut s, 6),
        vec![
            CommandKind::Speed, // cursor 0
            CommandKind::Speed, // LOP jump 1
            CommandKind::Speed, // LOP jump 2
            CommandKind::Loop,  // budget spent: LOP yielded inert
            CommandKind::Scale, // terminal
            CommandKind::Scale,
        ]
    );
    assert_eq!(s.loop_count(), 2);
}

#[test]
fn unbounded_loop_keeps_jumping() {
    let seq = parse("vizlink24379;COL:48:0;LOP:1:0;SCL:1.0:0").expect("parse ok");
    let mut s = Sequencer::new(seq);

    for i in 0..200 {
        assert_eq!(s.next_command().kind, CommandKind::Color, "i={i}");
    }
    assert_eq!(s.loop_count(), 199);
}

#[test]
fn invalid_targets_do_not_jump() {
    // target 0 (the header slot on the wire) and targets at/after
    // the terminal command fall through as inert commands
    for line in [
        "vizlink24379;SPD:1:0;LOP:0:2;SCL:1.0:0",
        "vizlink24379;SPD:1:0;LOP:3:2;SCL:1.0:0",
        "vizlink24379;SPD:1:0;LOP:7:2;SCL:1.0:0",
    ] {
        let mut s = Sequencer::new(parse(line).expect("parse ok"));
        assert_eq!(
            kinds(&mut s, 3),
            vec![CommandKind::Speed, CommandKind::Loop, CommandKind::Scale],
            "line={line}"
        );
        assert_eq!(s.loop_count(), 0, "line={line}");
    }
}

#[test]
fn over_limit_iteration_count_disables_the_loop() {
    let seq = CommandSequence::new(vec![
        Command::new(CommandKind::Speed, 1.0, 0),
        Command::new(CommandKind::Loop, 1.0, u32::MAX),
        Command::new(CommandKind::Scale, 1.0, 0),
    ]);
    let mut s = Sequencer::new(seq);

    assert_eq!(
        kinds(&mut s, 3),
        vec![CommandKind::Speed, CommandKind::Loop, CommandKind::Scale]
    );
}

#[test]
fn rewind_resets_cursor_and_budget() {
    let seq = parse("vizlink24379;SPD:1:0;LOP:1:1;SCL:1.0:0").expect("parse ok");
    let mut s = Sequencer::new(seq);

    assert_eq!(
        kinds(&mut s, 4),
        vec![
            CommandKind::Speed,
            CommandKind::Speed,
            CommandKind::Loop,
            CommandKind::Scale,
        ]
    );

    s.rewind();
    assert_eq!(
        kinds(&mut s, 4),
        vec![
            CommandKind::Speed,
            CommandKind::Speed,
            CommandKind::Loop,
            CommandKind::Scale,
        ]
    );
}

#[test]
fn empty_sequence_yields_none_forever() {
    let mut s = Sequencer::new(CommandSequence::new(vec![]));
    assert_eq!(s.next_command(), Command::none());
    assert_eq!(s.next_command(), Command::none());
}
