pub mod cursor;
mod directive;
mod scanner;

pub use directive::{Directive, DirectiveKind};
pub use scanner::{RawSpan, scan};
