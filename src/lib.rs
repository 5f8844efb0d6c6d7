//! Runtime encoding core for a bit-level serialization framework: packs a
//! structured value into a tightly bit-packed byte buffer and decodes that
//! buffer back, byte-for-bit compatible across implementations.
//!
//! A schema compiler is out of scope for this crate; callers build
//! `'static` [`MessageDescriptor`] trees by hand (or generate them) and
//! drive them through [`encode`]/[`decode`]/[`to_json`].

mod bitcopy;
mod codec;
mod codecs;
mod constants;
pub mod descriptor;
mod extensible;
pub mod json;
pub mod result;
mod traversal;
mod utils;

use descriptor::MessageDescriptor;
use result::{Error, Result};

pub use codec::Context;
pub use json::to_json;

/// Encodes `value` (a message's flat host-byte-layout view, see
/// [`MessageDescriptor::host_size`]) into `buf`, zeroing `buf` first so the
/// bit-copy fast path may assign rather than merge. Panics if `buf` is
/// shorter than [`MessageDescriptor::bytes_length`] or `value` is shorter
/// than [`MessageDescriptor::host_size`] — see [`try_encode`] for a checked
/// variant.
pub fn encode(desc: &MessageDescriptor, value: &[u8], buf: &mut [u8]) {
    for b in buf.iter_mut() {
        *b = 0;
    }
    let mut ctx = Context::new_encode(buf);
    traversal::encode_message(desc, &mut ctx, value);
}

/// Decodes `buf` into `value`, zeroing `value` first so any bits the
/// traversal never touches (e.g. an older reader's extra fields faced with
/// a narrowing writer) come out as zero. Panics on undersized buffers; see
/// [`try_decode`].
pub fn decode(desc: &MessageDescriptor, buf: &[u8], value: &mut [u8]) {
    for b in value.iter_mut() {
        *b = 0;
    }
    let mut ctx = Context::new_decode(buf);
    traversal::decode_message(desc, &mut ctx, value);
}

/// Checked counterpart of [`encode`]: validates buffer sizes up front and
/// reports a violation as [`Error`] instead of panicking.
pub fn try_encode(desc: &MessageDescriptor, value: &[u8], buf: &mut [u8]) -> Result<()> {
    let need = desc.bytes_length();
    if buf.len() < need {
        return Err(Error::BufferTooSmall { need, got: buf.len() });
    }
    let need_value = desc.host_size();
    if value.len() < need_value {
        return Err(Error::ValueTooSmall { need: need_value, got: value.len() });
    }
    encode(desc, value, buf);
    Ok(())
}

/// Checked counterpart of [`decode`].
pub fn try_decode(desc: &MessageDescriptor, buf: &[u8], value: &mut [u8]) -> Result<()> {
    let need = desc.bytes_length();
    if buf.len() < need {
        return Err(Error::BufferTooSmall { need, got: buf.len() });
    }
    let need_value = desc.host_size();
    if value.len() < need_value {
        return Err(Error::ValueTooSmall { need: need_value, got: value.len() });
    }
    decode(desc, buf, value);
    Ok(())
}
