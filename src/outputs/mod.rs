//! Batch input and output.
//!
//! # Submodules
//!
//! - [`json`]: Reads raw article dumps and writes parsed article batches
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── cafe latte.json    # one parsed batch per search keyword
//! └── brunch.json
//! ```

pub mod json;
