//! Terminal markdown rendering for assistant replies.
//!
//! Assistant messages arrive as markdown text; `ChatRenderer` formats them
//! for the terminal via `termimad`.

use termimad::MadSkin;

/// Terminal markdown renderer for assistant messages.
pub struct ChatRenderer {
    skin: MadSkin,
}

impl ChatRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();

        // Style inline code
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);

        Self { skin }
    }

    /// Render a markdown message as styled terminal text.
    pub fn render(&self, markdown: &str) -> String {
        let mut output = String::new();
        for line in markdown.lines() {
            let rendered = self.skin.term_text(line);
            output.push_str(&format!("{rendered}"));
        }
        output
    }
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_text_preserved() {
        let renderer = ChatRenderer::new();
        let out = renderer.render("hello world");
        assert!(out.contains("hello world"));
    }

    #[test]
    fn test_render_multiline() {
        let renderer = ChatRenderer::new();
        let out = renderer.render("first line\nsecond line");
        assert!(out.contains("first line"));
        assert!(out.contains("second line"));
    }
}
