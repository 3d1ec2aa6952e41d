// crates/vizlink-cli/src/io/seq_file.rs

use anyhow::{Context, Result};
use vizlink_core::proto::format as seq_format;
use vizlink_core::CommandSequence;

/// Load a .vsq sequence file and decode it.
pub fn load_vsq(path: &str) -> Result<CommandSequence> {
    let bytes = std::fs::read(path).with_context(|| format!("read sequence {path}"))?;
    let seq = seq_format::decode(&bytes).with_context(|| format!("decode sequence {path}"))?;
    Ok(seq)
}

/// Save a sequence as a .vsq file.
pub fn save_vsq(path: &str, seq: &CommandSequence) -> Result<()> {
    let bytes = seq_format::encode(seq);
    std::fs::write(path, bytes).with_context(|| format!("write sequence {path}"))?;
    Ok(())
}
