// crates/vizlink-cli/src/cmd/parse.rs

use clap::Args;
use vizlink_core::proto::{format as seq_format, wire};
use vizlink_core::validate;

#[derive(Args)]
pub struct ParseArgs {
    /// Wire datagram, e.g. "vizlink24379;BPM:120:4;COL:48:0"
    #[arg(long)]
    pub line: String,

    /// Also check every argument against its command range
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    let seq = wire::parse(&args.line)?;
    if args.strict {
        validate::validate_sequence(&seq)?;
    }

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
