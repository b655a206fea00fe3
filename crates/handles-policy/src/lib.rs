//! Content policy for handle claims
//!
//! Two independent checks: an explicit-slur detector applied to every
//! candidate local name, and per-domain reserved-name lists supplied as
//! configuration.

mod reserved;
mod slurs;

pub use reserved::ReservedHandles;
pub use slurs::has_explicit_slur;
