//! Message authentication codes built from the hashes in [`hash`](crate::hash).

mod hmac;

pub use hmac::{hmac, Hmac};
