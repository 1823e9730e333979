use crate::directive::{Directive, Kind};
use crate::endian::{ByteOrder, NATIVE_ORDER};

/// Per-call state carried across directives.
///
/// Every pack/unpack call starts from [`Context::default`] (native byte
/// order, alignment ceiling 1) and only the call that owns it sees its
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub order: ByteOrder,
    /// Maximum alignment any field may request. Always a power of two.
    pub align: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            order: NATIVE_ORDER,
            align: 1,
        }
    }
}

impl Context {
    /// Apply a byte order or alignment directive. Returns `false` for any
    /// other directive, leaving the context untouched.
    pub fn apply(&mut self, directive: &Directive) -> bool {
        match directive.kind {
            Kind::BigEndian => self.order = ByteOrder::Big,
            Kind::LittleEndian => self.order = ByteOrder::Little,
            Kind::Align(n) => self.align = n,
            _ => return false,
        }
        true
    }
}
