//! Host editor capabilities required by the binder and controller.
//!
//! The integration never touches buffers, regions, or panels directly; it
//! asks the host through [`EditorHost`]. A real frontend implements this over
//! its window/view API; the tests implement it over in-memory strings.
//!
//! All coordinates crossing this trait are zero-based. Text positions are
//! `char` offsets from the start of the view's buffer.

/// Opaque identifier for an editor view (one open file in a window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(pub u64);

impl ViewId {
    /// Get the underlying numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A half-open character-offset span (`start..end`) within one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightRegion {
    /// Span start offset (inclusive).
    pub start: usize,
    /// Span end offset (exclusive).
    pub end: usize,
}

impl HighlightRegion {
    /// Create a new region.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// How a set of regions should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightStyle {
    /// Scope name used to color the regions.
    pub scope: &'static str,
    /// Gutter icon shown on highlighted lines.
    pub icon: &'static str,
    /// Draw flags (see [`crate::marks::region_flags`]).
    pub flags: u32,
}

/// One row of the diagnostic report panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Code preview: the source line up to the message's start column, the
    /// arrow marker, then the highlighted text itself.
    pub code: String,
    /// Message description, prefixed with the cross-file marker when the
    /// message lives outside the triggering file.
    pub descr: String,
}

/// Editor capabilities the integration needs from its host.
pub trait EditorHost {
    /// Find an already-open view for `path`.
    fn find_open_view(&mut self, path: &str) -> Option<ViewId>;

    /// Open `path` at the given zero-based line/column and return its view.
    ///
    /// Opening focuses the new view and may return before the buffer has
    /// finished loading; see [`EditorHost::is_loading`].
    fn open_view(&mut self, path: &str, line: usize, col: usize) -> ViewId;

    /// The currently focused view, if any.
    fn active_view(&mut self) -> Option<ViewId>;

    /// Give focus to `view`.
    fn focus_view(&mut self, view: ViewId);

    /// Whether `view` is still loading its buffer content.
    fn is_loading(&self, view: ViewId) -> bool;

    /// Convert a zero-based line/column into a char offset within `view`.
    fn text_point(&self, view: ViewId, line: usize, col: usize) -> usize;

    /// Full text of the line containing the char offset `point`, without the
    /// line terminator.
    fn full_line_text(&self, view: ViewId, point: usize) -> String;

    /// Text spanned by `region` in `view`.
    fn region_text(&self, view: ViewId, region: HighlightRegion) -> String;

    /// Current regions stored under `key` for `view` (empty if none).
    fn regions(&self, view: ViewId, key: &str) -> Vec<HighlightRegion>;

    /// Replace the regions stored under `key` for `view`, rendered with
    /// `style`. Region sets are segregated per view and per key.
    fn set_regions(
        &mut self,
        view: ViewId,
        key: &str,
        regions: Vec<HighlightRegion>,
        style: &HighlightStyle,
    );

    /// Remove all regions stored under `key` for `view`.
    fn erase_regions(&mut self, view: ViewId, key: &str);

    /// Show a single-selection list seeded at `default_index`.
    ///
    /// The host reports the outcome back through
    /// [`crate::DiagnosticController::handle_selection`] once the user picks
    /// a row or cancels.
    fn show_selection_list(&mut self, rows: Vec<ReportRow>, default_index: Option<usize>);
}

/// Map a host panel index to a selection.
///
/// Hosts report cancellation as a negative index; anything non-negative is
/// the chosen row.
pub fn selection_from_panel_index(index: i64) -> Option<usize> {
    usize::try_from(index).ok()
}

/// Whether a view's scope name marks content this integration targets.
///
/// Scope names are whitespace-separated lists, e.g.
/// `"source.js meta.function.js"`. Buffer-modified signals are only routed
/// for views carrying the `source.js` scope.
pub fn is_checker_scope(scope_name: &str) -> bool {
    scope_name.split(' ').any(|scope| scope == "source.js")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_from_panel_index() {
        assert_eq!(selection_from_panel_index(-1), None);
        assert_eq!(selection_from_panel_index(0), Some(0));
        assert_eq!(selection_from_panel_index(3), Some(3));
    }

    #[test]
    fn test_is_checker_scope() {
        assert!(is_checker_scope("source.js"));
        assert!(is_checker_scope("source.js meta.function.js"));
        assert!(is_checker_scope("text.html.basic source.js"));
        assert!(!is_checker_scope("source.python"));
        assert!(!is_checker_scope("source.js.embedded.html"));
    }
}
