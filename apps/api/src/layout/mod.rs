// Layout engine: run segmentation, line wrapping, page pagination.
// Pure and synchronous; no I/O, no shared mutable state. Safe to call from any thread.

pub mod charset;
pub mod error;
pub mod handlers;
pub mod paginator;
pub mod segmenter;
pub mod wrapper;

#[cfg(test)]
mod proptests;

// Re-export the public API consumed by the document assembler and handlers.
pub use charset::{url_breaks, word_breaks, BreakRule, SpecialSet};
pub use error::LayoutError;
pub use paginator::{paginate, Page, PartitionPlan};
pub use segmenter::{segment, CharacterClass, Run};
pub use wrapper::{wrap, WrappedLine};
