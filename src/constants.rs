//! Wire-format constants shared across the codec, traversal and
//! extensibility modules.

/// True for widths that never need the variable-width signed
/// sign-extension post-pass, because the host integer type already
/// carries the correct sign through normal two's-complement storage.
pub const fn is_standard_width(nbits: u32) -> bool {
    matches!(nbits, 8 | 16 | 32 | 64)
}

/// Length-prefix width, in bits, for an extensible message or array.
pub const COMPOSITE_PREFIX_BITS: u32 = 16;

/// Length-prefix width, in bits, for an extensible enum.
pub const ENUM_PREFIX_BITS: u32 = 8;
