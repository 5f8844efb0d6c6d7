//! Demonstrates the array fast path: a `uint32[7]` field encodes as a
//! straight little-endian concatenation of its elements, since uint32 is a
//! standard width and qualifies for the batched bit-copy path instead of
//! the per-element slow path.

use anyhow::{ensure, Result};
use bitwire::descriptor::{ArrayDescriptor, FieldDescriptor, MessageDescriptor, TypeDescriptor};

static FIELDS: &[FieldDescriptor] = &[FieldDescriptor {
    name: "xs",
    offset: 0,
    ty: TypeDescriptor::Array(&ArrayDescriptor {
        extensible: false,
        cap: 7,
        element: TypeDescriptor::Uint { nbits: 32 },
    }),
}];
static SCHEMA: MessageDescriptor = MessageDescriptor {
    extensible: false,
    nbits: 32 * 7,
    fields: FIELDS,
};

fn main() -> Result<()> {
    let values: Vec<u32> = (118..125).collect();
    let mut value = vec![0u8; SCHEMA.host_size()];
    for (i, v) in values.iter().enumerate() {
        value[i * 4..i * 4 + 4].copy_from_slice(&v.to_le_bytes());
    }

    let mut buf = vec![0u8; SCHEMA.bytes_length()];
    bitwire::encode(&SCHEMA, &value, &mut buf);

    let expected: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
    ensure!(buf == expected, "fast path should match little-endian concatenation");
    println!("encoded {:?} as {buf:02x?}", values);

    let mut decoded = vec![0u8; SCHEMA.host_size()];
    bitwire::decode(&SCHEMA, &buf, &mut decoded);
    ensure!(decoded == value, "round trip should be exact");
    println!("{}", bitwire::to_json(&SCHEMA, &decoded));
    Ok(())
}
