//! Recursive descriptor-graph traversal: dispatch by kind, advance the
//! cursor, and honor extensibility at the message and array level.

use crate::codec::{decode_base, decode_int, encode_base, encode_int, Context};
use crate::codecs::{integer_family_kind, is_fast_path};
use crate::constants::COMPOSITE_PREFIX_BITS;
use crate::descriptor::{ArrayDescriptor, Kind, MessageDescriptor, TypeDescriptor};
use crate::extensible;

pub(crate) fn encode_message(desc: &MessageDescriptor, ctx: &mut Context, data: &[u8]) {
    if desc.extensible {
        extensible::encode_message_ahead(desc, ctx);
    }
    for f in desc.fields {
        let field_data = &data[f.offset..f.offset + f.ty.size() as usize];
        encode_field(&f.ty, ctx, field_data);
    }
}

pub(crate) fn decode_message(desc: &MessageDescriptor, ctx: &mut Context, data: &mut [u8]) {
    let i_start = ctx.i;
    let ahead = if desc.extensible {
        extensible::decode_message_ahead(ctx) as usize
    } else {
        0
    };
    for f in desc.fields {
        let size = f.ty.size() as usize;
        let field_data = &mut data[f.offset..f.offset + size];
        decode_field(&f.ty, ctx, field_data);
    }
    if desc.extensible {
        let ito = i_start + COMPOSITE_PREFIX_BITS as usize + ahead;
        if ito >= ctx.i {
            ctx.i = ito;
        }
    }
}

fn encode_field(ty: &TypeDescriptor, ctx: &mut Context, data: &[u8]) {
    match ty {
        TypeDescriptor::Bool | TypeDescriptor::Uint { .. } | TypeDescriptor::Byte => {
            encode_base(ty.nbits(), ctx, data)
        }
        TypeDescriptor::Int { nbits } => encode_int(*nbits, ctx, data),
        TypeDescriptor::Enum(e) => {
            if e.extensible {
                extensible::encode_enum_ahead(e, ctx);
            }
            encode_base(e.uint_nbits, ctx, data)
        }
        TypeDescriptor::Alias(to) => encode_field(to, ctx, data),
        TypeDescriptor::Array(a) => encode_array(a, ctx, data),
        TypeDescriptor::Message(m) => encode_message(m, ctx, data),
    }
}

fn decode_field(ty: &TypeDescriptor, ctx: &mut Context, data: &mut [u8]) {
    match ty {
        TypeDescriptor::Bool | TypeDescriptor::Uint { .. } | TypeDescriptor::Byte => {
            decode_base(ty.nbits(), ctx, data)
        }
        TypeDescriptor::Int { nbits } => decode_int(*nbits, ctx, data),
        TypeDescriptor::Enum(e) => {
            if e.extensible {
                extensible::decode_enum_ahead(ctx);
            }
            decode_base(e.uint_nbits, ctx, data)
        }
        TypeDescriptor::Alias(to) => decode_field(to, ctx, data),
        TypeDescriptor::Array(a) => decode_array(a, ctx, data),
        TypeDescriptor::Message(m) => decode_message(m, ctx, data),
    }
}

fn encode_array(desc: &ArrayDescriptor, ctx: &mut Context, data: &[u8]) {
    if desc.extensible {
        extensible::encode_array_ahead(desc, ctx);
    }
    let elem = &desc.element;
    let elem_size = elem.size() as usize;
    if is_fast_path(elem) {
        let total_nbits = elem.nbits() * desc.cap as u32;
        encode_base(total_nbits, ctx, &data[..elem_size * desc.cap as usize]);
    } else {
        for k in 0..desc.cap as usize {
            let slice = &data[k * elem_size..k * elem_size + elem_size];
            encode_field(elem, ctx, slice);
        }
    }
}

fn decode_array(desc: &ArrayDescriptor, ctx: &mut Context, data: &mut [u8]) {
    let i_start = ctx.i;
    let ahead = if desc.extensible {
        extensible::decode_array_ahead(ctx) as usize
    } else {
        0
    };
    let elem = &desc.element;
    let elem_size = elem.size() as usize;
    if is_fast_path(elem) {
        let total_nbits = elem.nbits() * desc.cap as u32;
        decode_base(total_nbits, ctx, &mut data[..elem_size * desc.cap as usize]);
        if matches!(integer_family_kind(elem), Some(Kind::Int)) {
            for k in 0..desc.cap as usize {
                crate::codec::sign_extend(
                    &mut data[k * elem_size..k * elem_size + elem_size],
                    elem.nbits(),
                );
            }
        }
    } else {
        for k in 0..desc.cap as usize {
            let slice = &mut data[k * elem_size..k * elem_size + elem_size];
            decode_field(elem, ctx, slice);
        }
    }
    if desc.extensible {
        let ito = i_start + COMPOSITE_PREFIX_BITS as usize + ahead * desc.cap as usize;
        if ito >= ctx.i {
            ctx.i = ito;
        }
    }
}
