//! Reversible obfuscation of non-negative integers, typically database primary keys,
//! using Knuth's multiplicative hashing over a power-of-two domain.
//!
//! ```no_run
//! use optimus_core::crypto::Optimus;
//!
//! let optimus = Optimus::new(1580030173, 59260789, 1163945558)?;
//! assert_eq!(optimus.encode(15), 1103647397);
//! assert_eq!(optimus.decode(1103647397), 15);
//! # Ok::<(), optimus_core::crypto::OptimusError>(())
//! ```

pub mod consts;
pub mod crypto;
pub mod id_encoders;
pub mod seed;
pub mod settings;
pub mod utils;
