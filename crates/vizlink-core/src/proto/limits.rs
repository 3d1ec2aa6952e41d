// crates/vizlink-core/src/proto/limits.rs
//
// Shared bounds for control-command arguments. Senders validate
// against these before transmitting; nodes silently drop anything
// outside them at apply time.

pub const BPM_MIN: f64 = 20.0;
pub const BPM_MAX: f64 = 480.0;

pub const SPEED_MIN: f32 = 0.3;
pub const SPEED_MAX: f32 = 6.3;
pub const SPEED_STEP: f32 = 0.5;
pub const DEFAULT_SPEED: f32 = 1.0;

pub const SCALE_MIN: f32 = 0.7;
pub const SCALE_MAX: f32 = 1.3;
pub const DEFAULT_PULSE_SCALE: f32 = 1.13;

pub const COLOR_MIN: u8 = 0;
pub const COLOR_MAX: u8 = 63;

/// World-space distance between consecutive pulse markers; with the
/// pulse period this derives the node's travel speed from a BPM.
pub const PULSE_SPACING: f64 = 0.5;

/// Minimum seconds between manual color toggles.
pub const COLOR_SWITCH_DEBOUNCE_SECS: f64 = 2.0;

/// Hard cap on the iteration count of a bounded LOP command.
pub const MAX_LOOPS: u32 = 2_000_000_000;

/// Max zero-duration commands executed back-to-back on one pulse.
pub const MAX_INSTANT_CHAIN: u32 = 10;
