//! Length-prefix encode/decode for extensible composites.
//!
//! Mirrors `PrefixedRecord`'s "write a length ahead, skip whatever the
//! writer declared beyond what we understood" shape, generalized to the
//! three composite kinds that can be marked extensible.

use crate::codec::{decode_base, encode_base, Context};
use crate::constants::{COMPOSITE_PREFIX_BITS, ENUM_PREFIX_BITS};
use crate::descriptor::{ArrayDescriptor, EnumDescriptor, MessageDescriptor};

pub(crate) fn encode_message_ahead(desc: &MessageDescriptor, ctx: &mut Context) {
    encode_base(COMPOSITE_PREFIX_BITS, ctx, &(desc.nbits as u16).to_le_bytes());
}

/// Returns the writer's declared `nbits`, to be compared against what this
/// reader's own schema actually consumed.
pub(crate) fn decode_message_ahead(ctx: &mut Context) -> u16 {
    let mut buf = [0u8; 2];
    decode_base(COMPOSITE_PREFIX_BITS, ctx, &mut buf);
    u16::from_le_bytes(buf)
}

pub(crate) fn encode_array_ahead(desc: &ArrayDescriptor, ctx: &mut Context) {
    encode_base(COMPOSITE_PREFIX_BITS, ctx, &desc.cap.to_le_bytes());
}

pub(crate) fn decode_array_ahead(ctx: &mut Context) -> u16 {
    let mut buf = [0u8; 2];
    decode_base(COMPOSITE_PREFIX_BITS, ctx, &mut buf);
    u16::from_le_bytes(buf)
}

/// Enums have no variable-length trailing content to skip past: their
/// backing uint width is fixed by the type. The prefix is still written and
/// read symmetrically for wire-format parity with message/array, but the
/// decoded value is discarded rather than driving a cursor skip.
pub(crate) fn encode_enum_ahead(desc: &EnumDescriptor, ctx: &mut Context) {
    encode_base(ENUM_PREFIX_BITS, ctx, &(desc.uint_nbits as u8).to_le_bytes());
}

pub(crate) fn decode_enum_ahead(ctx: &mut Context) {
    let mut buf = [0u8; 1];
    decode_base(ENUM_PREFIX_BITS, ctx, &mut buf);
}
