//! Padding placed in front of a field.

use crate::context::Context;
use crate::directive::{Directive, Kind};

/// Number of zero bytes needed before `directive` when the cursor is at
/// `position`.
///
/// A field aligns to its own size, capped by the context's alignment
/// ceiling. Fixed byte blocks and zero-sized directives are never aligned.
pub fn padding(position: usize, ctx: &Context, directive: &Directive) -> usize {
    if directive.size == 0 || directive.kind == Kind::Fixed {
        return 0;
    }
    // Both operands are powers of two, so the mask arithmetic below is the
    // same as `(a - position % a) % a`.
    let align = directive.size.min(ctx.align);
    (align - (position & (align - 1))) & (align - 1)
}
