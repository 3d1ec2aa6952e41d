// crates/vizlink-core/src/node/state.rs

use crate::palette::codec::{self, ColorCode, Rgb, COLOR_RED, COLOR_WHITE};
use crate::proto::command::{Command, CommandKind};
use crate::proto::limits::{
    BPM_MAX, BPM_MIN, COLOR_MAX, COLOR_MIN, COLOR_SWITCH_DEBOUNCE_SECS, DEFAULT_PULSE_SCALE,
    DEFAULT_SPEED, PULSE_SPACING, SCALE_MAX, SCALE_MIN, SPEED_MAX, SPEED_MIN, SPEED_STEP,
};

/// The eight playback modes, wire indices 0..=7.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayMode {
    Off,
    Step,
    Linear,
    Full,
    Source,
    Spread,
    Shimmer,
    Pump,
}

impl PlayMode {
    pub const FIRST: u32 = 0;
    pub const LAST: u32 = 7;

    pub fn from_index(v: u32) -> Option<Self> {
        match v {
            0 => Some(PlayMode::Off),
            1 => Some(PlayMode::Step),
            2 => Some(PlayMode::Linear),
            3 => Some(PlayMode::Full),
            4 => Some(PlayMode::Source),
            5 => Some(PlayMode::Spread),
            6 => Some(PlayMode::Shimmer),
            7 => Some(PlayMode::Pump),
            _ => None,
        }
    }

    pub fn index(self) -> u32 {
        match self {
            PlayMode::Off => 0,
            PlayMode::Step => 1,
            PlayMode::Linear => 2,
            PlayMode::Full => 3,
            PlayMode::Source => 4,
            PlayMode::Spread => 5,
            PlayMode::Shimmer => 6,
            PlayMode::Pump => 7,
        }
    }
}

/// A display node's control state.
///
/// `apply` is permissive: an out-of-range argument is dropped, never
/// an error, so a bad datagram cannot wedge a running node. Senders that want fail-fast behavior validate before
/// transmitting (see `crate::validate`).
#[derive(Clone, Debug)]
pub struct NodeState {
    pub bpm: f64,
    /// Seconds per beat pulse; 0.0 = no remote tempo.
    pub pulse_period: f64,
    pub speed: f32,
    pub pulse_scale: f32,
    pub mode: PlayMode,
    pub color: ColorCode,
    last_color_switch: f64,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            bpm: 0.0,
            pulse_period: 0.0,
            speed: DEFAULT_SPEED,
            pulse_scale: DEFAULT_PULSE_SCALE,
            mode: PlayMode::Off,
            color: COLOR_RED,
            last_color_switch: -COLOR_SWITCH_DEBOUNCE_SECS,
        }
    }
}

impl NodeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one command. Returns true iff the kind consumes a
    /// duration slot (i.e. the player should reload its countdown).
    ///
    /// An in-range BPM derives both the pulse period and the travel
    /// speed; an out-of-range BPM zeroes the pulse period, stopping
    /// remote-tempo pulsing entirely.
    pub fn apply(&mut self, cmd: &Command) -> bool {
        match cmd.kind {
            CommandKind::Bpm => {
                if (BPM_MIN..=BPM_MAX).contains(&cmd.arg) {
                    self.bpm = cmd.arg;
                    self.pulse_period = 60.0 / cmd.arg;
                    self.speed = (PULSE_SPACING / self.pulse_period) as f32;
                } else {
                    self.pulse_period = 0.0;
                }
                true
            }
            CommandKind::Speed => {
                let v = cmd.arg as f32;
                if (SPEED_MIN..=SPEED_MAX).contains(&v) {
                    self.speed = v;
                }
                true
            }
            CommandKind::Scale => {
                let v = cmd.arg as f32;
                if (SCALE_MIN..=SCALE_MAX).contains(&v) {
                    self.pulse_scale = v;
                }
                true
            }
            CommandKind::Mode => {
                if cmd.arg >= 0.0 {
                    if let Some(mode) = PlayMode::from_index(cmd.arg as u32) {
                        self.mode = mode;
                    }
                }
                true
            }
            CommandKind::Color => {
                if cmd.arg >= COLOR_MIN as f64 && cmd.arg <= COLOR_MAX as f64 {
                    self.color = cmd.arg as u8;
                }
                true
            }
            CommandKind::Loop | CommandKind::None => false,
        }
    }

    /// Decoded display color for the current code.
    pub fn rgb(&self) -> Rgb {
        codec::decode(self.color)
    }

    /// Toggle between the red and white reference colors. Debounced:
    /// a toggle within `COLOR_SWITCH_DEBOUNCE_SECS` of the previous
    /// one is ignored. Returns whether the toggle happened.
    pub fn switch_color(&mut self, now: f64) -> bool {
        if now > self.last_color_switch + COLOR_SWITCH_DEBOUNCE_SECS {
            self.color = if self.color == COLOR_RED {
                COLOR_WHITE
            } else {
                COLOR_RED
            };
            self.last_color_switch = now;
            true
        } else {
            false
        }
    }

    /// Step to the next mode, saturating at the last.
    pub fn next_mode(&mut self) {
        if self.mode.index() < PlayMode::LAST {
            self.mode = PlayMode::from_index(self.mode.index() + 1).unwrap_or(self.mode);
        }
    }

    /// Step to the previous mode, saturating at the first.
    pub fn prev_mode(&mut self) {
        if self.mode.index() > PlayMode::FIRST {
            self.mode = PlayMode::from_index(self.mode.index() - 1).unwrap_or(self.mode);
        }
    }

    /// Step the travel speed up by `SPEED_STEP`, clamped to its range.
    /// Inert in the off/step modes, where speed is not user-driven.
    pub fn speed_up(&mut self) {
        if self.mode.index() > PlayMode::Step.index() {
            self.speed = (self.speed + SPEED_STEP).min(SPEED_MAX);
        }
    }

    /// Step the travel speed down by `SPEED_STEP`, clamped to its range.
    pub fn speed_down(&mut self) {
        if self.mode.index() > PlayMode::Step.index() {
            self.speed = (self.speed - SPEED_STEP).max(SPEED_MIN);
        }
    }
}
