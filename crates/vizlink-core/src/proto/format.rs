// crates/vizlink-core/src/proto/format.rs

use crate::error::{Result, VizError};
use crate::proto::command::{Command, CommandKind};
use crate::proto::wire::CommandSequence;

const MAGIC: &[u8; 4] = b"VSQ1";

pub const FORMAT_VERSION: u16 = 1;

/// Binary-stable `.vsq` sequence format (owned).
/// Layout (little-endian):
/// MAGIC[4]
/// version:u16
/// count:u16
/// commands: repeated { kind_id:u8, arg:f64, duration:u32 }
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3)
pub fn encode(seq: &CommandSequence) -> Vec<u8> {
    let mut b = Vec::with_capacity(16 + seq.len() * 13 + 20);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&FORMAT_VERSION.to_le_bytes());

    let count: u16 = seq.len().min(u16::MAX as usize) as u16;
    b.extend_from_slice(&count.to_le_bytes());

    for cmd in seq.commands.iter().take(count as usize) {
        b.push(cmd.kind.wire_id());
        b.extend_from_slice(&cmd.arg.to_le_bytes());
        b.extend_from_slice(&cmd.duration.to_le_bytes());
    }

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());

    let h = blake3_16(&b);
    b.extend_from_slice(&h);

    b
}

pub fn decode(bytes: &[u8]) -> Result<CommandSequence> {
    let mut i = 0usize;
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(VizError::SequenceFormat("bad magic".into()));
    }
    i += 4;

    let version = read_u16(bytes, &mut i)?;
    if version != FORMAT_VERSION {
        return Err(VizError::SequenceFormat(format!(
            "unsupported version {}",
            version
        )));
    }

    let count = read_u16(bytes, &mut i)?;
    let mut commands = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let id = read_u8(bytes, &mut i)?;
        let kind = CommandKind::from_wire_id(id)
            .ok_or_else(|| VizError::SequenceFormat(format!("unknown command id {}", id)))?;
        let arg = f64::from_le_bytes(read_arr::<8>(bytes, &mut i)?);
        let duration = read_u32(bytes, &mut i)?;
        commands.push(Command::new(kind, arg, duration));
    }

    // Integrity trailer: crc32 then blake3_16, each over all prior bytes.
    let body_end = i;
    let want_crc = read_u32(bytes, &mut i)?;
    if crc32(&bytes[..body_end]) != want_crc {
        return Err(VizError::SequenceFormat("crc mismatch".into()));
    }

    let hash_start = i;
    let want_hash = read_arr::<16>(bytes, &mut i)?;
    if blake3_16(&bytes[..hash_start]) != want_hash {
        return Err(VizError::SequenceFormat("hash mismatch".into()));
    }

    if i != bytes.len() {
        return Err(VizError::SequenceFormat(format!(
            "trailing bytes after sequence: {}",
            bytes.len() - i
        )));
    }

    Ok(CommandSequence::new(commands))
}

/// Stable sequence identity: the trailing blake3 digest of the encoded
/// form. Two sequences share an id iff they encode identically.
pub fn sequence_id_16(seq: &CommandSequence) -> [u8; 16] {
    let encoded = encode(seq);
    let mut out = [0u8; 16];
    out.copy_from_slice(&encoded[encoded.len() - 16..]);
    out
}

pub fn sequence_id_hex(seq: &CommandSequence) -> String {
    hex16(&sequence_id_16(seq))
}

fn hex16(id: &[u8; 16]) -> String {
    let mut s = String::with_capacity(32);
    for b in id {
        s.push_str(&format!("{:02x}", b));
    }
    s
}

fn crc32(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

fn read_u8(bytes: &[u8], i: &mut usize) -> Result<u8> {
    let [b] = read_arr::<1>(bytes, i)?;
    Ok(b)
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    Ok(u16::from_le_bytes(read_arr::<2>(bytes, i)?))
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    Ok(u32::from_le_bytes(read_arr::<4>(bytes, i)?))
}

fn read_arr<const N: usize>(bytes: &[u8], i: &mut usize) -> Result<[u8; N]> {
    let end = i
        .checked_add(N)
        .filter(|&end| end <= bytes.len())
        .ok_or_else(|| VizError::SequenceFormat("truncated sequence".into()))?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[*i..end]);
    *i = end;
    Ok(out)
}
