//! Tagged-variant descriptor records. These are hand-authored `'static`
//! tables in this crate (there is no schema compiler) but are shaped the
//! way one would emit them: field offsets and widths are already-computed
//! constants, not derived at runtime.

use derive_getters::Getters;

use crate::utils::round_up_size;

/// The kind of a [`TypeDescriptor`], used by the fast-path eligibility
/// check in `src/codecs.rs` and by callers inspecting a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Int,
    Uint,
    Byte,
    Enum,
    Alias,
    Array,
    Message,
}

/// A type occupying some number of wire bits and host storage bytes.
/// Composite variants carry the next descriptor to recurse into directly,
/// standing in for the function-pointer "processor" of the source design.
#[derive(Debug, Clone, Copy)]
pub enum TypeDescriptor {
    Bool,
    Int { nbits: u32 },
    Uint { nbits: u32 },
    Byte,
    Enum(&'static EnumDescriptor),
    Alias(&'static TypeDescriptor),
    Array(&'static ArrayDescriptor),
    Message(&'static MessageDescriptor),
}

impl TypeDescriptor {
    pub const fn kind(&self) -> Kind {
        match self {
            TypeDescriptor::Bool => Kind::Bool,
            TypeDescriptor::Int { .. } => Kind::Int,
            TypeDescriptor::Uint { .. } => Kind::Uint,
            TypeDescriptor::Byte => Kind::Byte,
            TypeDescriptor::Enum(_) => Kind::Enum,
            TypeDescriptor::Alias(_) => Kind::Alias,
            TypeDescriptor::Array(_) => Kind::Array,
            TypeDescriptor::Message(_) => Kind::Message,
        }
    }

    /// Wire bit width, per Invariant 1: the total bits written/read for a
    /// value of this type, not counting any extensibility prefix.
    pub const fn nbits(&self) -> u32 {
        match self {
            TypeDescriptor::Bool => 1,
            TypeDescriptor::Int { nbits } | TypeDescriptor::Uint { nbits } => *nbits,
            TypeDescriptor::Byte => 8,
            TypeDescriptor::Enum(e) => e.uint_nbits,
            TypeDescriptor::Alias(to) => to.nbits(),
            TypeDescriptor::Array(a) => a.nbits(),
            TypeDescriptor::Message(m) => m.nbits,
        }
    }

    /// Host storage size in bytes.
    pub const fn size(&self) -> usize {
        match self {
            TypeDescriptor::Bool => 1,
            TypeDescriptor::Byte => 1,
            TypeDescriptor::Int { nbits } | TypeDescriptor::Uint { nbits } => {
                round_up_size(*nbits) as usize
            }
            TypeDescriptor::Enum(e) => round_up_size(e.uint_nbits) as usize,
            TypeDescriptor::Alias(to) => to.size(),
            TypeDescriptor::Array(a) => a.element.size() * a.cap as usize,
            TypeDescriptor::Message(m) => m.host_size(),
        }
    }
}

#[derive(Debug, Getters)]
pub struct EnumDescriptor {
    pub extensible: bool,
    pub uint_nbits: u32,
}

#[derive(Debug, Getters)]
pub struct ArrayDescriptor {
    pub extensible: bool,
    pub cap: u16,
    pub element: TypeDescriptor,
}

impl ArrayDescriptor {
    pub const fn nbits(&self) -> u32 {
        self.element.nbits() * self.cap as u32
    }
}

#[derive(Debug, Getters)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub offset: usize,
    pub ty: TypeDescriptor,
}

#[derive(Debug, Getters)]
pub struct MessageDescriptor {
    pub extensible: bool,
    pub nbits: u32,
    pub fields: &'static [FieldDescriptor],
}

impl MessageDescriptor {
    /// Wire byte length, `ceil(nbits/8)`, not counting an extensibility
    /// prefix this message might carry when itself embedded as a field.
    pub const fn bytes_length(&self) -> usize {
        crate::utils::div_ceil(self.nbits, 8) as usize
    }

    /// Host storage size in bytes: the sum of each field's storage size,
    /// packed with no padding.
    pub const fn host_size(&self) -> usize {
        let mut total = 0usize;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].ty.size() as usize;
            i += 1;
        }
        total
    }
}
