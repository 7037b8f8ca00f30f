//! Markdown to HTML filters.
//!
//! [`pipeline::Pipeline`] drives a document through the steps:
//! [`frontmatter`] stripping, [`render::markdown`] conversion and
//! [`render::inline_style`] injection, using the user [`config::Config`].

pub mod config;
pub mod frontmatter;
pub mod logging;
pub mod pipeline;
pub mod render;
