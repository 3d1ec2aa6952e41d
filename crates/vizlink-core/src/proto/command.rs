// crates/vizlink-core/src/proto/command.rs

/// The command kinds a control datagram can carry. `None` is the
/// placeholder yielded for malformed or unrecognized sub-commands;
/// nodes ignore it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandKind {
    None,
    Bpm,
    Loop,
    Mode,
    Speed,
    Scale,
    Color,
}

impl CommandKind {
    /// Three-letter tag used by the text wire format.
    pub fn tag(self) -> &'static str {
        match self {
            CommandKind::None => "NON",
            CommandKind::Bpm => "BPM",
            CommandKind::Loop => "LOP",
            CommandKind::Mode => "MOD",
            CommandKind::Speed => "SPD",
            CommandKind::Scale => "SCL",
            CommandKind::Color => "COL",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "NON" => Some(CommandKind::None),
            "BPM" => Some(CommandKind::Bpm),
            "LOP" => Some(CommandKind::Loop),
            "MOD" => Some(CommandKind::Mode),
            "SPD" => Some(CommandKind::Speed),
            "SCL" => Some(CommandKind::Scale),
            "COL" => Some(CommandKind::Color),
            _ => None,
        }
    }

    /// Stable one-byte id used by the binary sequence format.
    pub fn wire_id(self) -> u8 {
        match self {
            CommandKind::None => 0,
            CommandKind::Bpm => 1,
            CommandKind::Loop => 2,
            CommandKind::Mode => 3,
            CommandKind::Speed => 4,
            CommandKind::Scale => 5,
            CommandKind::Color => 6,
        }
    }

    pub fn from_wire_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(CommandKind::None),
            1 => Some(CommandKind::Bpm),
            2 => Some(CommandKind::Loop),
            3 => Some(CommandKind::Mode),
            4 => Some(CommandKind::Speed),
            5 => Some(CommandKind::Scale),
            6 => Some(CommandKind::Color),
            _ => None,
        }
    }
}

/// One sub-command of a control sequence.
///
/// `duration` counts beat pulses the command's effect holds before the
/// sequencer advances; 0 means the next command runs on the same pulse.
/// For `Loop`, `arg` is the jump target and `duration` the iteration
/// bound (0 = unbounded).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Command {
    pub kind: CommandKind,
    pub arg: f64,
    pub duration: u32,
}

impl Command {
    pub const fn new(kind: CommandKind, arg: f64, duration: u32) -> Self {
        Self {
            kind,
            arg,
            duration,
        }
    }

    /// The inert placeholder command.
    pub const fn none() -> Self {
        Self::new(CommandKind::None, 0.0, 0)
    }
}
