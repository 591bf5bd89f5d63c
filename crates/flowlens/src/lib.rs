#![warn(missing_docs)]
//! `flowlens` - diagnostic payload schema and error-group resolution for the
//! Flow type checker's `--json` output.
//!
//! This crate is the pure half of the integration: it decodes one checker
//! payload through a strict schema and decides which error group (and which
//! message within it) is relevant to the file the developer is viewing. It
//! has no notion of views, regions, or panels.
//!
//! # Module Description
//!
//! - [`payload`] - strict serde schema for the checker payload + parse boundary
//! - [`resolver`] - error-group selection relative to the triggering file
//!
//! Editor binding, load-readiness, and presentation live in `flowlens-editor`.

pub mod payload;
pub mod resolver;

pub use payload::{CheckPayload, ErrorGroup, PayloadError, RawMessage, parse_payload};
pub use resolver::{Resolution, relevant_messages};
