// crates/vizlink-core/tests/ident_checksum.rs

use vizlink_core::ident::{checksum, node_id};

#[test]
fn known_vectors() {
    assert_eq!(checksum(b""), 0);
    assert_eq!(checksum(&[0x00]), 0);
    assert_eq!(checksum(b"A"), 14);
}

#[test]
fn pairing_tool_uuid_vector() {
    assert_eq!(node_id("ABC31337-A123-B456-789E-DEADBEEFCAFE"), 199);
    assert_eq!(node_id("00000000-0000-0000-0000-000000000000"), 213);
}

#[test]
fn order_sensitive() {
    assert_ne!(checksum(b"AB"), checksum(b"BA"));
}
