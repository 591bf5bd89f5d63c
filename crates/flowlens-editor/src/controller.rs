//! The presentation controller: one live highlight/report session.
//!
//! Each checker invocation produces at most one [`Session`]: the resolved
//! messages of the relevant error group, bound to views and waiting behind a
//! readiness barrier. The controller owns the single live session; accepting
//! a new payload clears the previous session's rendered regions (one erase
//! per distinct view) before anything else happens, so stale highlights never
//! survive a fresh check.
//!
//! The host drives the controller: feed payloads through
//! [`DiagnosticController::accept_raw`], pump readiness on a timer through
//! [`DiagnosticController::pump`], route panel outcomes through
//! [`DiagnosticController::handle_selection`], and route buffer-modified
//! signals (pre-filtered with [`crate::host::is_checker_scope`]) through
//! [`DiagnosticController::on_buffer_modified`].

use crate::binder::{PendingPoll, ReadyBarrier, ResolvedMessage};
use crate::host::{EditorHost, ReportRow, ViewId};
use crate::marks::{ARROW_MARKER, CROSS_FILE_MARKER, HighlightSettings, REGION_KEY};
use flowlens::{CheckPayload, parse_payload, relevant_messages};
use std::collections::BTreeSet;
use std::time::Instant;

/// The live highlight/report state for one checker invocation.
#[derive(Debug)]
pub struct Session {
    messages: Vec<ResolvedMessage>,
    default_index: Option<usize>,
    triggering_file: String,
    barrier: ReadyBarrier,
    polls: Vec<PendingPoll>,
    presented: bool,
}

impl Session {
    /// The messages of this session, in group order (origin first).
    pub fn messages(&self) -> &[ResolvedMessage] {
        &self.messages
    }

    /// Index of the report row pre-selected by default.
    pub fn default_index(&self) -> Option<usize> {
        self.default_index
    }

    /// The file whose check produced this session.
    pub fn triggering_file(&self) -> &str {
        &self.triggering_file
    }

    /// Whether highlights and the report have been shown.
    pub fn is_presented(&self) -> bool {
        self.presented
    }

    /// Distinct views this session's messages are bound to.
    fn views(&self) -> BTreeSet<ViewId> {
        self.messages.iter().map(|message| message.view).collect()
    }
}

/// Orchestrates highlight rendering and the report panel over resolved
/// messages. Owns the single live [`Session`].
#[derive(Debug, Default)]
pub struct DiagnosticController {
    settings: HighlightSettings,
    session: Option<Session>,
}

impl DiagnosticController {
    /// Create a controller with the given highlight settings.
    pub fn new(settings: HighlightSettings) -> Self {
        Self {
            settings,
            session: None,
        }
    }

    /// The current session, if one is live.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// `true` when nothing is pending: no live session, or the session has
    /// already presented. Hosts can stop their pump timer while this holds.
    pub fn is_idle(&self) -> bool {
        self.session
            .as_ref()
            .is_none_or(|session| session.presented)
    }

    /// Feed one raw checker payload for `triggering_file`.
    ///
    /// A payload that does not decode is a soft "no diagnostics": the
    /// previous session is cleared and no new one is created. The checker is
    /// the authority on whether real diagnostics exist, so nothing here is a
    /// user-facing error.
    pub fn accept_raw(
        &mut self,
        host: &mut dyn EditorHost,
        raw: &str,
        triggering_file: &str,
        now: Instant,
    ) {
        match parse_payload(raw) {
            Ok(payload) => self.accept(host, &payload, triggering_file, now),
            Err(err) => {
                tracing::debug!("discarding undecodable checker payload: {err}");
                self.clear_session(host);
            }
        }
    }

    /// Feed one decoded checker payload for `triggering_file`.
    ///
    /// Clears the previous session first, resolves the relevant error group,
    /// binds every message to a view, and arms the readiness barrier. An
    /// empty resolution (check passed, file not referenced) leaves no live
    /// session.
    pub fn accept(
        &mut self,
        host: &mut dyn EditorHost,
        payload: &CheckPayload,
        triggering_file: &str,
        now: Instant,
    ) {
        self.clear_session(host);

        let resolution = relevant_messages(payload, triggering_file);
        if resolution.is_empty() {
            return;
        }

        let messages: Vec<ResolvedMessage> = resolution
            .messages
            .iter()
            .map(|raw| ResolvedMessage::bind(host, raw))
            .collect();
        let polls = (0..messages.len())
            .map(|index| PendingPoll::immediate(index, now))
            .collect();

        self.session = Some(Session {
            barrier: ReadyBarrier::new(messages.len()),
            messages,
            default_index: resolution.default_index,
            triggering_file: triggering_file.to_string(),
            polls,
            presented: false,
        });
    }

    /// Drive readiness polling. Renders highlights and shows the report in
    /// the call where the last bound view reports ready.
    ///
    /// Due polls whose view is still loading are rescheduled
    /// [`crate::POLL_INTERVAL`] later; a view that exhausts its retry budget
    /// is counted as arrived so one unreadable file cannot hold the report
    /// back forever.
    pub fn pump(&mut self, host: &mut dyn EditorHost, now: Instant) {
        let fired = {
            let Some(session) = self.session.as_mut() else {
                return;
            };
            if session.presented {
                return;
            }

            let mut still_pending = Vec::with_capacity(session.polls.len());
            let mut fired = false;
            for poll in session.polls.drain(..) {
                if now < poll.due {
                    still_pending.push(poll);
                    continue;
                }
                let message = &session.messages[poll.message];
                if host.is_loading(message.view) {
                    if poll.exhausted() {
                        tracing::warn!(
                            path = %message.path,
                            "view never finished loading; presenting without waiting for it"
                        );
                        fired |= session.barrier.arrive();
                    } else {
                        still_pending.push(poll.rescheduled(now));
                    }
                } else {
                    fired |= session.barrier.arrive();
                }
            }
            session.polls = still_pending;

            if fired {
                session.presented = true;
            }
            fired
        };

        if fired {
            self.render_highlights(host);
            self.show_report(host);
        }
    }

    /// Outcome of the report panel: navigate to the chosen message's
    /// file/line/column (opening and focusing it), or do nothing on
    /// cancellation or an out-of-range row.
    pub fn handle_selection(&mut self, host: &mut dyn EditorHost, selection: Option<usize>) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let Some(index) = selection else {
            return;
        };
        let Some(message) = session.messages.get(index) else {
            return;
        };
        host.open_view(&message.path, message.line, message.col);
    }

    /// A developer edit landed in `view`: drop that view's rendered regions.
    ///
    /// The session's message list and every other view's regions are left
    /// untouched; only a fresh check replaces the session itself.
    pub fn on_buffer_modified(&mut self, host: &mut dyn EditorHost, view: ViewId) {
        host.erase_regions(view, REGION_KEY);
    }

    /// Clear the live session's rendered regions (one erase per distinct
    /// view) and drop it, together with any pending readiness polls.
    pub fn clear_session(&mut self, host: &mut dyn EditorHost) {
        if let Some(session) = self.session.take() {
            tracing::debug!(
                messages = session.messages.len(),
                "clearing diagnostic session"
            );
            for view in session.views() {
                host.erase_regions(view, REGION_KEY);
            }
        }
    }

    fn render_highlights(&self, host: &mut dyn EditorHost) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let style = self.settings.highlight_style();
        for message in session.messages() {
            // Append into the view's existing set: earlier messages of this
            // session bound to the same view must accumulate.
            let mut regions = host.regions(message.view, REGION_KEY);
            regions.push(message.region(host));
            host.set_regions(message.view, REGION_KEY, regions, &style);
        }
    }

    fn show_report(&self, host: &mut dyn EditorHost) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let rows = session
            .messages()
            .iter()
            .map(|message| report_row(host, message, &session.triggering_file))
            .collect();
        host.show_selection_list(rows, session.default_index());
    }
}

/// Build one report row for `message`.
///
/// The code preview is the source line up to the message's start column, the
/// arrow marker, then the highlighted text itself. The description carries
/// the cross-file marker when the message lives outside the triggering file.
fn report_row(
    host: &dyn EditorHost,
    message: &ResolvedMessage,
    triggering_file: &str,
) -> ReportRow {
    let point = host.text_point(message.view, message.line, message.col);
    let line_text = host.full_line_text(message.view, point);

    let mut code: String = line_text.chars().take(message.col).collect();
    code.push(ARROW_MARKER);
    code.push_str(&host.region_text(message.view, message.region(host)));

    let descr = if message.path == triggering_file {
        message.descr.clone()
    } else {
        format!("{CROSS_FILE_MARKER}{}", message.descr)
    };

    ReportRow { code, descr }
}
