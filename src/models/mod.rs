//! Typed records used across layers.

pub mod contact;
pub mod outbound;
pub mod response;
