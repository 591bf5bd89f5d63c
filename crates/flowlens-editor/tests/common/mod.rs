#![allow(dead_code)]
//! In-memory `EditorHost` used by the behavioral tests.

use flowlens_editor::{EditorHost, HighlightRegion, HighlightStyle, ReportRow, ViewId};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug)]
struct FakeView {
    path: String,
    text: String,
}

/// A fake editor: views over in-memory strings, per-view named region sets,
/// and recorded calls for everything the controller is expected to drive.
#[derive(Debug, Default)]
pub struct FakeHost {
    views: Vec<FakeView>,
    regions: HashMap<(u64, String), Vec<HighlightRegion>>,
    active: Option<ViewId>,
    /// Remaining "still loading" answers per view; each `is_loading` call
    /// consumes one.
    loading: RefCell<HashMap<u64, u32>>,
    /// Buffer contents served when `open_view` has to open a file.
    pub disk: HashMap<String, String>,
    /// Loading answers a freshly opened view gives before reporting ready.
    pub open_loading_polls: u32,
    /// Every `open_view` call: (path, line, col).
    pub opened: Vec<(String, usize, usize)>,
    /// Every `focus_view` call.
    pub focus_history: Vec<ViewId>,
    /// Every selection list shown: (rows, default index).
    pub reports: Vec<(Vec<ReportRow>, Option<usize>)>,
    /// Style passed to the most recent `set_regions` call.
    pub last_style: Option<HighlightStyle>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-open a loaded view and make it the active one.
    pub fn open_buffer(&mut self, path: &str, text: &str) -> ViewId {
        let view = ViewId(self.views.len() as u64);
        self.views.push(FakeView {
            path: path.to_string(),
            text: text.to_string(),
        });
        self.active = Some(view);
        view
    }

    /// Make `view` answer "still loading" for the next `polls` queries.
    pub fn set_loading(&mut self, view: ViewId, polls: u32) {
        self.loading.borrow_mut().insert(view.get(), polls);
    }

    /// The currently focused view (test inspection).
    pub fn focused(&self) -> Option<ViewId> {
        self.active
    }

    fn view(&self, view: ViewId) -> &FakeView {
        &self.views[view.get() as usize]
    }
}

impl EditorHost for FakeHost {
    fn find_open_view(&mut self, path: &str) -> Option<ViewId> {
        self.views
            .iter()
            .position(|view| view.path == path)
            .map(|index| ViewId(index as u64))
    }

    fn open_view(&mut self, path: &str, line: usize, col: usize) -> ViewId {
        self.opened.push((path.to_string(), line, col));
        let view = match self.find_open_view(path) {
            Some(view) => view,
            None => {
                let view = ViewId(self.views.len() as u64);
                let text = self.disk.get(path).cloned().unwrap_or_default();
                self.views.push(FakeView {
                    path: path.to_string(),
                    text,
                });
                if self.open_loading_polls > 0 {
                    self.loading
                        .borrow_mut()
                        .insert(view.get(), self.open_loading_polls);
                }
                view
            }
        };
        self.active = Some(view);
        view
    }

    fn active_view(&mut self) -> Option<ViewId> {
        self.active
    }

    fn focus_view(&mut self, view: ViewId) {
        self.focus_history.push(view);
        self.active = Some(view);
    }

    fn is_loading(&self, view: ViewId) -> bool {
        let mut loading = self.loading.borrow_mut();
        match loading.get_mut(&view.get()) {
            Some(0) | None => false,
            Some(remaining) => {
                *remaining -= 1;
                true
            }
        }
    }

    fn text_point(&self, view: ViewId, line: usize, col: usize) -> usize {
        let text = &self.view(view).text;
        let mut offset = 0;
        for (index, line_text) in text.split('\n').enumerate() {
            let chars = line_text.chars().count();
            if index == line {
                return offset + col.min(chars);
            }
            offset += chars + 1;
        }
        offset
    }

    fn full_line_text(&self, view: ViewId, point: usize) -> String {
        let text = &self.view(view).text;
        let mut offset = 0;
        for line_text in text.split('\n') {
            let chars = line_text.chars().count();
            if point <= offset + chars {
                return line_text.to_string();
            }
            offset += chars + 1;
        }
        String::new()
    }

    fn region_text(&self, view: ViewId, region: HighlightRegion) -> String {
        self.view(view)
            .text
            .chars()
            .skip(region.start)
            .take(region.end.saturating_sub(region.start))
            .collect()
    }

    fn regions(&self, view: ViewId, key: &str) -> Vec<HighlightRegion> {
        self.regions
            .get(&(view.get(), key.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    fn set_regions(
        &mut self,
        view: ViewId,
        key: &str,
        regions: Vec<HighlightRegion>,
        style: &HighlightStyle,
    ) {
        self.last_style = Some(*style);
        self.regions.insert((view.get(), key.to_string()), regions);
    }

    fn erase_regions(&mut self, view: ViewId, key: &str) {
        self.regions.remove(&(view.get(), key.to_string()));
    }

    fn show_selection_list(&mut self, rows: Vec<ReportRow>, default_index: Option<usize>) {
        self.reports.push((rows, default_index));
    }
}
