// crates/vizlink-core/src/node/player.rs

use crate::node::state::NodeState;
use crate::proto::command::Command;
use crate::proto::limits::MAX_INSTANT_CHAIN;
use crate::proto::sequence::Sequencer;

/// Drives a `Sequencer` against a `NodeState`, one `pulse` per beat.
///
/// While the current command's countdown is positive, a pulse only
/// decrements it. At zero the next command executes; a command the
/// state recognizes reloads the countdown from its own duration.
/// Zero-duration commands chain within one pulse, capped at
/// `MAX_INSTANT_CHAIN` executions so a sequence of instants cannot
/// starve the render loop.
pub struct Player {
    seq: Sequencer,
    state: NodeState,
    current: Command,
    countdown: u32,
}

impl Player {
    pub fn new(seq: Sequencer) -> Self {
        Self::with_state(seq, NodeState::default())
    }

    pub fn with_state(seq: Sequencer, state: NodeState) -> Self {
        Self {
            seq,
            state,
            current: Command::none(),
            countdown: 0,
        }
    }

    pub fn state(&self) -> &NodeState {
        &self.state
    }

    pub fn current(&self) -> &Command {
        &self.current
    }

    /// Pulses remaining before the current command releases.
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// One beat pulse. Returns the number of commands executed.
    pub fn pulse(&mut self) -> u32 {
        let mut executed = 0;

        if self.countdown > 0 {
            self.countdown -= 1;
        } else {
            self.step();
            executed += 1;
        }

        let mut chain = 0;
        while self.countdown == 0 && self.current.duration == 0 && chain < MAX_INSTANT_CHAIN {
            chain += 1;
            self.step();
            executed += 1;
        }

        executed
    }

    /// Restart the sequence with a fresh countdown; node state holds.
    pub fn rewind(&mut self) {
        self.seq.rewind();
        self.current = Command::none();
        self.countdown = 0;
    }

    fn step(&mut self) {
        self.current = self.seq.next_command();
        if self.state.apply(&self.current) {
            self.countdown = self.current.duration;
        }
    }
}
