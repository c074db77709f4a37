//! Public library API for walking and validating FRD track geometry files.

/// FRD record grammar, byte cursor, and walker.
pub mod frd;
