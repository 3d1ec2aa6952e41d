// crates/vizlink-cli/src/cmd/sim.rs

use anyhow::bail;
use clap::Args;
use vizlink_core::proto::wire;
use vizlink_core::{Player, Sequencer};

use crate::io::seq_file;

#[derive(Args)]
pub struct SimArgs {
    /// Wire datagram to replay
    #[arg(long)]
    pub line: Option<String>,

    /// Or a packed .vsq sequence file
    #[arg(long)]
    pub seq: Option<String>,

    /// Beat pulses to simulate
    #[arg(long, default_value_t = 16)]
    pub pulses: u64,
}

pub fn run(args: SimArgs) -> anyhow::Result<()> {
    let seq = match (args.line.as_deref(), args.seq.as_deref()) {
        (Some(line), None) => wire::parse(line)?,
        (None, Some(path)) => seq_file::load_vsq(path)?,
        _ => bail!("pass exactly one of --line or --seq"),
    };

    let mut player = Player::new(Sequencer::new(seq));
    let mut executed: u64 = 0;

    for pulse in 1..=args.pulses {
        executed += player.pulse() as u64;
        let s = player.state();
        let rgb = s.rgb();
        println!(
            "pulse={:>3} mode={:?} bpm={} speed={} scale={} color={} rgb=({:.3},{:.3},{:.3})",
            pulse, s.mode, s.bpm, s.speed, s.pulse_scale, s.color, rgb.r, rgb.g, rgb.b
        );
    }

    eprintln!(
        "sim ok: pulses={} executed={} final_color={}",
        args.pulses,
        executed,
        player.state().color
    );

    Ok(())
}
