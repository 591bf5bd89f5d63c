//! Mark styling for rendered diagnostic regions.
//!
//! Every region this integration renders uses one fixed error style: a named
//! region set per view, an error scope for coloring, a gutter icon, and draw
//! flags derived from the user-configured [`MarkStyle`].

use crate::host::HighlightStyle;

/// Region-set key under which diagnostic regions are stored per view.
pub const REGION_KEY: &str = "flowlens-error-marks";

/// Scope name used to color rendered regions.
pub const MARK_SCOPE: &str = "markup.error.flowlens";

/// Gutter icon shown next to highlighted lines.
pub const GUTTER_ICON: &str = "dot";

/// Marker between the leading line text and the highlighted text in report
/// code previews.
pub const ARROW_MARKER: char = '➜';

/// Prefix flagging report rows whose message lives in another file.
pub const CROSS_FILE_MARKER: &str = "↯ ";

/// Draw flags understood by the host (Sublime-style bitfield).
pub mod region_flags {
    /// Do not fill the region background.
    pub const DRAW_NO_FILL: u32 = 32;
    /// Do not draw the region outline.
    pub const DRAW_NO_OUTLINE: u32 = 256;
    /// Draw a solid underline.
    pub const DRAW_SOLID_UNDERLINE: u32 = 512;
    /// Draw a stippled underline.
    pub const DRAW_STIPPLED_UNDERLINE: u32 = 1024;
    /// Draw a squiggly underline.
    pub const DRAW_SQUIGGLY_UNDERLINE: u32 = 2048;
}

/// User-configurable mark rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkStyle {
    /// Outline the region without filling it (the default).
    #[default]
    Outline,
    /// Fill the region background.
    Fill,
    /// Solid underline only.
    SolidUnderline,
    /// Squiggly underline only.
    SquigglyUnderline,
    /// Stippled underline only.
    StippledUnderline,
}

impl MarkStyle {
    /// Draw flags for this style.
    pub fn flags(self) -> u32 {
        use region_flags::{
            DRAW_NO_FILL, DRAW_NO_OUTLINE, DRAW_SOLID_UNDERLINE, DRAW_SQUIGGLY_UNDERLINE,
            DRAW_STIPPLED_UNDERLINE,
        };
        match self {
            MarkStyle::Outline => DRAW_NO_FILL,
            MarkStyle::Fill => 0,
            MarkStyle::SolidUnderline => DRAW_SOLID_UNDERLINE | DRAW_NO_FILL | DRAW_NO_OUTLINE,
            MarkStyle::SquigglyUnderline => {
                DRAW_SQUIGGLY_UNDERLINE | DRAW_NO_FILL | DRAW_NO_OUTLINE
            }
            MarkStyle::StippledUnderline => {
                DRAW_STIPPLED_UNDERLINE | DRAW_NO_FILL | DRAW_NO_OUTLINE
            }
        }
    }
}

/// Settings controlling highlight rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightSettings {
    /// Mark style for rendered regions.
    pub mark_style: MarkStyle,
}

impl HighlightSettings {
    /// The style applied to every rendered diagnostic region.
    pub fn highlight_style(&self) -> HighlightStyle {
        HighlightStyle {
            scope: MARK_SCOPE,
            icon: GUTTER_ICON,
            flags: self.mark_style.flags(),
        }
    }
}
