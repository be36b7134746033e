pub mod key_hash;
pub mod key_index;
pub mod node_arena;
pub mod recency_list;

pub use key_index::KeyIndex;
pub use node_arena::{NodeArena, NodeId};
pub use recency_list::RecencyList;
