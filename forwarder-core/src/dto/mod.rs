//! Data Transfer Objects for backend communication
//!
//! Request and response bodies for the two backend endpoints. Decoding into
//! these typed structs is the schema check: a missing field or a field of the
//! wrong type fails deserialization instead of being trusted implicitly.

pub mod logs;
pub mod start;
