//! Pure identifier math: the seed-advance recurrence and the printable
//! rendering of seed values.
//!
//! Nothing in this crate touches storage or the clock. Every function is a
//! total function of its inputs, which is what makes the minting service
//! reproducible and recoverable from seed state alone.

pub mod encoder;
pub mod format;
pub mod radix;
pub mod seed;

pub use encoder::{Encoder, EncoderSettings};
pub use format::PidFormat;
pub use seed::next_seed;
