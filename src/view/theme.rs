//! Day/night color palettes
//!
//! The palettes mirror the site's two presentation modes: night is the
//! default, day is the light variant toggled by the `mode` command.

use ratatui::style::{Color, Modifier, Style};

use crate::line::LineKind;

/// Colors for every rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub banner: Color,
    pub response: Color,
    pub error: Color,
    pub link: Color,
    pub prompt: Color,
    pub header_fg: Color,
    pub header_accent: Color,
}

impl Theme {
    pub fn night() -> Self {
        Self {
            background: Color::Rgb(0x03, 0x07, 0x12),
            foreground: Color::Rgb(0xd1, 0xd5, 0xdb),
            banner: Color::Rgb(0x58, 0xa6, 0xff),
            response: Color::Rgb(0xa8, 0xb5, 0xd1),
            error: Color::Rgb(0xf8, 0x51, 0x49),
            link: Color::Rgb(0xce, 0x91, 0x78),
            prompt: Color::Rgb(0xef, 0x44, 0x44),
            header_fg: Color::Rgb(0x9c, 0xa3, 0xaf),
            header_accent: Color::Rgb(0x34, 0xd3, 0x99),
        }
    }

    pub fn day() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Rgb(0x1f, 0x29, 0x37),
            banner: Color::Rgb(0x25, 0x63, 0xeb),
            response: Color::Rgb(0x26, 0x4f, 0x78),
            error: Color::Rgb(0xb9, 0x1c, 0x1c),
            link: Color::Rgb(0xaf, 0x5b, 0x29),
            prompt: Color::Rgb(0xef, 0x44, 0x44),
            header_fg: Color::Rgb(0x4b, 0x55, 0x63),
            header_accent: Color::Rgb(0x05, 0x96, 0x69),
        }
    }

    /// Style for the text segments of a transcript line.
    pub fn line_style(&self, kind: LineKind) -> Style {
        match kind {
            LineKind::Banner => Style::new().fg(self.banner),
            LineKind::PromptEcho => Style::new().fg(self.foreground),
            LineKind::Response => Style::new().fg(self.response),
            LineKind::Error => Style::new().fg(self.error),
        }
    }

    /// Style for link labels, whatever line they appear in.
    pub fn link_style(&self) -> Style {
        Style::new()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn prompt_style(&self) -> Style {
        Style::new().fg(self.prompt)
    }
}
