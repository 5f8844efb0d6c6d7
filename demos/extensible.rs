//! Demonstrates forward compatibility: a newer, wider schema's encoded
//! bytes are decoded by an older, narrower reader schema. The reader keeps
//! the fields it knows about and the extensibility length prefix lets it
//! skip past the trailing field it doesn't.

use anyhow::{ensure, Result};
use bitwire::descriptor::{FieldDescriptor, MessageDescriptor, TypeDescriptor};

static WRITER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor { name: "a", offset: 0, ty: TypeDescriptor::Byte },
    FieldDescriptor { name: "b", offset: 1, ty: TypeDescriptor::Byte },
    FieldDescriptor { name: "c", offset: 2, ty: TypeDescriptor::Byte },
];
static WRITER: MessageDescriptor = MessageDescriptor {
    extensible: true,
    nbits: 24,
    fields: WRITER_FIELDS,
};

static READER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor { name: "a", offset: 0, ty: TypeDescriptor::Byte },
    FieldDescriptor { name: "b", offset: 1, ty: TypeDescriptor::Byte },
];
static READER: MessageDescriptor = MessageDescriptor {
    extensible: true,
    nbits: 16,
    fields: READER_FIELDS,
};

fn main() -> Result<()> {
    let mut buf = vec![0u8; WRITER.bytes_length()];
    bitwire::try_encode(&WRITER, &[1, 2, 3], &mut buf)?;
    println!("writer encoded {} bytes: {buf:02x?}", buf.len());

    let mut value = vec![0u8; READER.host_size()];
    bitwire::try_decode(&READER, &buf, &mut value)?;
    println!("reader decoded a={} b={} (skipped c via the extensibility prefix)", value[0], value[1]);

    ensure!(value == [1, 2], "reader's known fields should match the writer's first two fields");
    Ok(())
}
