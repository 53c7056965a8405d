// File: crates/scatter-core/src/page.rs
// Summary: Standalone HTML page wrapping a rendered chart.

use crate::chart::{RenderedChart, TITLE_ID};
use crate::dom::escape_text;

impl RenderedChart {
    /// Full HTML document: inline stylesheet plus the mount markup.
    pub fn to_html_page(&self) -> String {
        let t = self.theme();
        let title = self
            .root()
            .find_by_id(TITLE_ID)
            .map(|e| e.text_content())
            .unwrap_or_default();
        let css = format!(
            "body {{ margin: 0; font-family: sans-serif; background: {bg}; color: {fg}; }}\n\
             main {{ display: flex; justify-content: center; padding: 24px; }}\n\
             #tooltip {{ position: absolute; pointer-events: none; padding: 6px 8px; \
             border-radius: 4px; font-size: 12px; line-height: 1.4; \
             background: {tip_bg}; color: {tip_fg}; }}\n\
             .dot {{ cursor: pointer; }}\n",
            bg = t.background.to_css(),
            fg = t.axis_label.to_css(),
            tip_bg = t.tooltip_background.to_css(),
            tip_fg = t.tooltip_text.to_css(),
        );
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{}</title>\n<style>\n{css}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            escape_text(&title),
            self.root().to_markup(),
        )
    }
}
