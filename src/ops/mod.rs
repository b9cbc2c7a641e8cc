//! Ops Module
//!
//! The four processing routines the dispatcher can apply to a payload,
//! plus the shared string coercion helpers.

mod aggregate;
mod coerce;
mod filter;
mod normalize;
mod transform;


// Re-export public operations
pub use aggregate::aggregate;
pub use filter::filter;
pub use normalize::normalize;
pub use transform::transform;

// == Public Constants ==
/// Maximum payload nesting depth the recursive routines accept
pub const MAX_DEPTH: usize = 128;
