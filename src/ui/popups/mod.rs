//! Modal popup rendering (network selector, messages).

pub mod message;
pub mod network;
