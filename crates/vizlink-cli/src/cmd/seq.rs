// crates/vizlink-cli/src/cmd/seq.rs

use clap::{Args, Subcommand};
use vizlink_core::proto::{format as seq_format, wire};
use vizlink_core::validate;

use crate::io::seq_file;

#[derive(Args)]
pub struct SeqArgs {
    #[command(subcommand)]
    pub cmd: SeqCmd,
}

#[derive(Subcommand)]
pub enum SeqCmd {
    /// Pack a wire datagram into a .vsq file
    Pack(PackArgs),

    /// Print a .vsq file (id + sub-commands)
    Inspect(InspectArgs),

    /// Print the wire datagram for a .vsq file
    Render(RenderArgs),
}

#[derive(Args)]
pub struct PackArgs {
    /// Wire datagram to pack
    #[arg(long)]
    pub line: String,

    /// Output .vsq path
    #[arg(long)]
    pub out: String,

    /// Reject out-of-range command arguments instead of packing them
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Sequence path (.vsq)
    #[arg(long)]
    pub seq: String,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Sequence path (.vsq)
    #[arg(long)]
    pub seq: String,
}

pub fn run(args: SeqArgs) -> anyhow::Result<()> {
    match args.cmd {
        SeqCmd::Pack(a) => cmd_pack(a),
        SeqCmd::Inspect(a) => cmd_inspect(a),
        SeqCmd::Render(a) => cmd_render(a),
    }
}

fn cmd_pack(a: PackArgs) -> anyhow::Result<()> {
    let seq = wire::parse(&a.line)?;
    if a.strict {
        validate::validate_sequence(&seq)?;
    }
    seq_file::save_vsq(&a.out, &seq)?;

    eprintln!(
        "pack ok: out={} commands={} sequence_id={}",
        a.out,
        seq.len(),
        seq_format::sequence_id_hex(&seq)
    );
    Ok(())
}

fn cmd_inspect(a: InspectArgs) -> anyhow::Result<()> {
    let seq = seq_file::load_vsq(&a.seq)?;

    println!("seq_path    = {}", a.seq);
    println!("sequence_id = {}", seq_format::sequence_id_hex(&seq));
    println!("commands    = {}", seq.len());
    for (i, cmd) in seq.commands.iter().enumerate() {
        println!(
            "[{}] {} arg={} duration={}",
            i + 1,
            cmd.kind.tag(),
            cmd.arg,
            cmd.duration
        );
    }

    Ok(())
}

fn cmd_render(a: RenderArgs) -> anyhow::Result<()> {
    let seq = seq_file::load_vsq(&a.seq)?;
    println!("{}", wire::render(&seq));
    Ok(())
}
