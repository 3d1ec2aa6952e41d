pub mod error;
pub mod validate;

pub mod ident;
pub mod node;
pub mod palette;
pub mod proto;

pub use crate::node::player::Player;
pub use crate::node::state::{NodeState, PlayMode};
pub use crate::palette::codec::{decode, encode, ColorCode, Rgb};
pub use crate::proto::command::{Command, CommandKind};
pub use crate::proto::sequence::Sequencer;
pub use crate::proto::wire::CommandSequence;
