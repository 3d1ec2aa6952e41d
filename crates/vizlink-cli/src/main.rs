// crates/vizlink-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "vizlink-cli")]
#[command(about = "VizLink display-node control CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Palette codec scratchpad (decode a code / quantize a triple)
    Color(cmd::color::ColorArgs),

    /// Parse a wire datagram and print its sub-commands
    Parse(cmd::parse::ParseArgs),

    /// Replay a command sequence against a simulated node
    Sim(cmd::sim::SimArgs),

    /// Sequence file tools (.vsq)
    Seq(cmd::seq::SeqArgs),

    /// Compute the CRC-8 identity byte for a node UUID
    NodeId(cmd::node_id::NodeIdArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Color(args) => cmd::color::run(args),
        Commands::Parse(args) => cmd::parse::run(args),
        Commands::Sim(args) => cmd::sim::run(args),
        Commands::Seq(args) => cmd::seq::run(args),
        Commands::NodeId(args) => cmd::node_id::run(args),
    }
}
