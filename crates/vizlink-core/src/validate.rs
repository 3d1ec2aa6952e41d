use crate::error::{Result, VizError};
use crate::node::state::PlayMode;
use crate::proto::command::{Command, CommandKind};
use crate::proto::limits::{
    BPM_MAX, BPM_MIN, COLOR_MAX, COLOR_MIN, MAX_LOOPS, SCALE_MAX, SCALE_MIN, SPEED_MAX, SPEED_MIN,
};
use crate::proto::wire::CommandSequence;

/// Sender-side fail-fast check: every sub-command argument must be in
/// its command's range. Receiving nodes stay permissive and drop
/// out-of-range values at apply time; validating before transmit turns
/// silent downstream degradation into an error at the source.
pub fn validate_sequence(seq: &CommandSequence) -> Result<()> {
    for cmd in &seq.commands {
        validate_command(cmd)?;
    }
    Ok(())
}

pub fn validate_command(cmd: &Command) -> Result<()> {
    match cmd.kind {
        CommandKind::Bpm => {
            if !(BPM_MIN..=BPM_MAX).contains(&cmd.arg) {
                return Err(VizError::Validation(format!(
                    "BPM arg {} outside {}..={}",
                    cmd.arg, BPM_MIN, BPM_MAX
                )));
            }
        }
        CommandKind::Speed => {
            let v = cmd.arg as f32;
            if !(SPEED_MIN..=SPEED_MAX).contains(&v) {
                return Err(VizError::Validation(format!(
                    "SPD arg {} outside {}..={}",
                    cmd.arg, SPEED_MIN, SPEED_MAX
                )));
            }
        }
        CommandKind::Scale => {
            let v = cmd.arg as f32;
            if !(SCALE_MIN..=SCALE_MAX).contains(&v) {
                return Err(VizError::Validation(format!(
                    "SCL arg {} outside {}..={}",
                    cmd.arg, SCALE_MIN, SCALE_MAX
                )));
            }
        }
        CommandKind::Mode => {
            if cmd.arg < 0.0 || PlayMode::from_index(cmd.arg as u32).is_none() {
                return Err(VizError::Validation(format!(
                    "MOD arg {} outside {}..={}",
                    cmd.arg,
                    PlayMode::FIRST,
                    PlayMode::LAST
                )));
            }
        }
        CommandKind::Color => {
            if cmd.arg < COLOR_MIN as f64 || cmd.arg > COLOR_MAX as f64 {
                return Err(VizError::Validation(format!(
                    "COL arg {} outside {}..={}",
                    cmd.arg, COLOR_MIN, COLOR_MAX
                )));
            }
        }
        CommandKind::Loop => {
            if cmd.arg < 1.0 {
                return Err(VizError::Validation(format!(
                    "LOP target {} must be >= 1",
                    cmd.arg
                )));
            }
            if cmd.duration > MAX_LOOPS {
                return Err(VizError::Validation(format!(
                    "LOP count {} exceeds {}",
                    cmd.duration, MAX_LOOPS
                )));
            }
        }
        CommandKind::None => {}
    }
    Ok(())
}
