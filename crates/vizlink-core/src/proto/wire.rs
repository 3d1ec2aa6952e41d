// crates/vizlink-core/src/proto/wire.rs
//
// Text datagram format:
//
//   vizlink24379;TAG:ARG:DURATION;TAG:ARG:DURATION;...
//
// The header part must match exactly or the whole datagram is
// rejected. Individual sub-commands degrade instead of failing: a
// part without exactly three fields, or with an unknown tag, becomes
// `Command::none()`; unparsable numeric fields become 0.

use crate::error::{Result, VizError};
use crate::proto::command::{Command, CommandKind};

/// Numeric wire magic shared by every node on the control channel.
pub const WIRE_MAGIC: &str = "24379";

/// Full header part of a datagram: project name + magic.
pub const WIRE_HEADER: &str = "vizlink24379";

/// A parsed datagram: the ordered sub-commands, header stripped.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandSequence {
    pub commands: Vec<Command>,
}

impl CommandSequence {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Parse one datagram line. Empty parts (stray `;;`) are skipped.
pub fn parse(line: &str) -> Result<CommandSequence> {
    let mut parts = line.split(';').filter(|p| !p.is_empty());

    let header = parts
        .next()
        .ok_or_else(|| VizError::Wire("empty datagram".into()))?;
    if header != WIRE_HEADER {
        return Err(VizError::Wire(format!("bad header: {:?}", header)));
    }

    let commands: Vec<Command> = parts.map(parse_sub).collect();
    if commands.is_empty() {
        return Err(VizError::Wire("datagram has no sub-commands".into()));
    }

    Ok(CommandSequence::new(commands))
}

fn parse_sub(part: &str) -> Command {
    let mut fields = part.split(':');
    let (Some(tag), Some(arg), Some(duration), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Command::none();
    };

    let Some(kind) = CommandKind::from_tag(tag) else {
        return Command::none();
    };

    Command {
        kind,
        arg: arg.parse().unwrap_or(0.0),
        duration: duration.parse().unwrap_or(0),
    }
}

/// Render a sequence back to its datagram line. Inverse of `parse`
/// for sequences whose args print losslessly (f64 display round-trips).
pub fn render(seq: &CommandSequence) -> String {
    let mut out = String::from(WIRE_HEADER);
    for cmd in &seq.commands {
        out.push(';');
        out.push_str(cmd.kind.tag());
        out.push(':');
        out.push_str(&cmd.arg.to_string());
        out.push(':');
        out.push_str(&cmd.duration.to_string());
    }
    out
}
