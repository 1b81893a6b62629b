//! cdnify - point asset URLs in generated sites at a CDN.
//!
//! The library side is a set of [`core::DocumentRewriter`]s that a site
//! generator attaches to its output hooks with [`rewrite::register`]. The
//! `cdnify` binary drives the same registry over single files or a whole
//! built site.

pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod rewrite;

pub use config::{CdnConfig, CdnifyConfig};
pub use core::{DocumentRewriter, HookPoint, HookRegistry, Mode, Priority, RenderContext};
