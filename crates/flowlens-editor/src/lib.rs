#![warn(missing_docs)]
//! `flowlens-editor` - editor binding and presentation for `flowlens`.
//!
//! This crate turns a resolved message list into editor actions: highlight
//! regions in every view an error chain touches, and a single-selection
//! report panel that jumps to any message's location. It is host-agnostic in
//! the same way the kernel it plugs into is: every editor primitive it needs
//! (views, loading state, region sets, panels) is expressed through the
//! [`EditorHost`] trait, and the host decides how those actually work.
//!
//! # Module Description
//!
//! - [`host`] - the [`EditorHost`] capability trait and its value types
//! - [`marks`] - region key, mark scope/icon, draw-flag mapping, settings
//! - [`binder`] - message-to-view binding and load-readiness machinery
//! - [`controller`] - the single live highlight/report session
//!
//! # Concurrency
//!
//! Everything runs on one logical thread. The only suspension point is
//! "wait for a view to finish loading", modelled as host-pumped polling at a
//! fixed 50 ms interval ([`POLL_INTERVAL`]): the host calls
//! [`DiagnosticController::pump`] on a timer, and presentation happens in the
//! pump call in which the last bound view reports ready. There are no locks;
//! the one live [`Session`] is the only shared state and is swapped
//! synchronously when a new payload arrives.

pub mod binder;
pub mod controller;
pub mod host;
pub mod marks;

pub use binder::{MAX_POLL_ATTEMPTS, POLL_INTERVAL, PendingPoll, ReadyBarrier, ResolvedMessage};
pub use controller::{DiagnosticController, Session};
pub use host::{
    EditorHost, HighlightRegion, HighlightStyle, ReportRow, ViewId, is_checker_scope,
    selection_from_panel_index,
};
pub use marks::{
    ARROW_MARKER, CROSS_FILE_MARKER, GUTTER_ICON, HighlightSettings, MARK_SCOPE, MarkStyle,
    REGION_KEY,
};
