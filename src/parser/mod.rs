//! Blog post parsing: editor detection, block classification and extraction.
//!
//! A post body goes through four stages:
//!
//! 1. **Segmentation** ([`segment`]): detect the editor version and list the
//!    body's blocks in document order
//! 2. **Inspection** ([`inspect`]): collect the tag names and `id`/`class`
//!    tokens inside each block
//! 3. **Classification** ([`classify`]): map each block to a [`ContentKind`]
//!    with an ordered rule table
//! 4. **Extraction** ([`extract`]): turn each block into zero or more
//!    [`ContentRecord`]s
//!
//! [`metadata`] reads auxiliary page fields independently of the blocks.
//!
//! Nothing in this module fails. Unknown layouts and empty blocks produce
//! empty results, which callers treat as valid output.
//!
//! [`ContentKind`]: crate::models::ContentKind
//! [`ContentRecord`]: crate::models::ContentRecord

pub mod classify;
pub mod extract;
pub mod inspect;
pub mod metadata;
pub mod node;
pub mod segment;

pub use classify::classify;
pub use extract::extract;
pub use inspect::{inspect, TagProfile};
pub use metadata::extract_metadata;
pub use node::HtmlNode;
pub use segment::{segment_body, Segment};
