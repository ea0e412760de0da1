//! Key derivation functions: stretch a low-entropy password into key
//! material, using the MACs in [`mac`](crate::mac).

mod pbkdf2;

pub use pbkdf2::pbkdf2;
