//! Parallel, read-only traversal over a decoded value producing JSON.
//! Shares the descriptor graph with the codec but carries no cursor and no
//! extensibility behavior.

use std::fmt::Write as _;

use crate::descriptor::{ArrayDescriptor, MessageDescriptor, TypeDescriptor};

pub fn to_json(desc: &MessageDescriptor, data: &[u8]) -> String {
    let mut out = String::new();
    write_message(desc, data, &mut out);
    out
}

fn write_message(desc: &MessageDescriptor, data: &[u8], out: &mut String) {
    out.push('{');
    for (idx, f) in desc.fields.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        write!(out, "\"{}\":", f.name).unwrap();
        let size = f.ty.size() as usize;
        write_value(&f.ty, &data[f.offset..f.offset + size], out);
    }
    out.push('}');
}

fn write_array(desc: &ArrayDescriptor, data: &[u8], out: &mut String) {
    out.push('[');
    let elem_size = desc.element.size() as usize;
    for k in 0..desc.cap as usize {
        if k > 0 {
            out.push(',');
        }
        write_value(&desc.element, &data[k * elem_size..k * elem_size + elem_size], out);
    }
    out.push(']');
}

fn write_value(ty: &TypeDescriptor, data: &[u8], out: &mut String) {
    match ty {
        TypeDescriptor::Bool => out.push_str(if data[0] != 0 { "true" } else { "false" }),
        TypeDescriptor::Byte => write!(out, "{}", data[0]).unwrap(),
        TypeDescriptor::Uint { .. } => write!(out, "{}", read_uint(data)).unwrap(),
        TypeDescriptor::Int { .. } => write!(out, "{}", read_int(data)).unwrap(),
        TypeDescriptor::Enum(e) => {
            write!(out, "{}", read_uint(&data[..crate::utils::round_up_size(e.uint_nbits) as usize])).unwrap()
        }
        TypeDescriptor::Alias(to) => write_value(to, data, out),
        TypeDescriptor::Array(a) => write_array(a, data, out),
        TypeDescriptor::Message(m) => write_message(m, data, out),
    }
}

fn read_uint(data: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf[..data.len()].copy_from_slice(data);
    u64::from_le_bytes(buf)
}

fn read_int(data: &[u8]) -> i64 {
    match data.len() {
        1 => data[0] as i8 as i64,
        2 => i16::from_le_bytes(data.try_into().unwrap()) as i64,
        4 => i32::from_le_bytes(data.try_into().unwrap()) as i64,
        8 => i64::from_le_bytes(data.try_into().unwrap()),
        n => unreachable!("unsupported integer storage size {n}"),
    }
}
