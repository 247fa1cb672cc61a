//! # Blog Review Extract
//!
//! Turns scraped blog posts into a normalized, typed representation for
//! downstream fake-review analysis.
//!
//! ## Pipeline
//!
//! 1. **Segmentation**: Detect the blog editor layout and split the post body
//!    into blocks ([`parser::segment`])
//! 2. **Classification**: Assign each block one content kind with an ordered
//!    rule table ([`parser::classify`])
//! 3. **Extraction**: Turn each block into image, link, gif, map, video or
//!    text records ([`parser::extract`])
//! 4. **Metadata**: Read profile and engagement fields ([`parser::metadata`])
//!
//! [`pipeline`] runs these stages over whole posts and batches of posts;
//! [`outputs`] reads raw dumps and writes parsed batches.
//!
//! ## Usage
//!
//! ```
//! use blog_review_extract::pipeline::extract_contents;
//! use scraper::Html;
//!
//! let document = Html::parse_document(r#"<div class="view"><p>Hello</p></div>"#);
//! let (version, records) = extract_contents(&document);
//! assert!(version.is_some());
//! assert_eq!(records[0].payload, "Hello");
//! ```

pub mod cli;
pub mod config;
pub mod models;
pub mod outputs;
pub mod parser;
pub mod pipeline;
pub mod utils;
