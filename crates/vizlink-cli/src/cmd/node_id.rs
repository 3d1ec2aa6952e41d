// crates/vizlink-cli/src/cmd/node_id.rs

use clap::Args;
use vizlink_core::ident;

#[derive(Args)]
pub struct NodeIdArgs {
    /// Node UUID string
    #[arg(long)]
    pub uuid: String,
}

pub fn run(args: NodeIdArgs) -> anyhow::Result<()> {
    println!("uuid    = {}", args.uuid);
    println!("node_id = {}", ident::node_id(&args.uuid));
    Ok(())
}
