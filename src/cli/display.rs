// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the emosearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `EMOSEARCH_THEME` ("dark" or "light"), then the `COLORFGBG` background
//! hint, then defaults to dark. `NO_COLOR` and non-TTY stdout turn colors off.
//!
//! Widths are terminal columns, not chars: result rows are mostly emoji and
//! Hangul, which take two columns each.

use emosearch::{MatchTier, TierSet};
use std::sync::OnceLock;

/// Columns between the two `│` borders.
pub const BOX_WIDTH: usize = 64;

const RESET: &str = "\x1b[0m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "light" | "l" => Some(Theme::Light),
            "dark" | "d" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// `COLORFGBG` is "fg;bg"; background 7 and up (except 8) is light.
    fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
        (bg >= 7 && bg != 8).then_some(Theme::Light)
    }

    fn detect() -> Self {
        let env = |name: &str| std::env::var(name).ok();
        env("EMOSEARCH_THEME")
            .and_then(|v| Theme::parse(&v))
            .or_else(|| env("COLORFGBG").and_then(|v| Theme::from_colorfgbg(&v)))
            .unwrap_or(Theme::Dark)
    }

    pub fn current() -> Self {
        static THEME: OnceLock<Theme> = OnceLock::new();
        *THEME.get_or_init(Theme::detect)
    }
}

/// Palette entries. OneDark and One Light hex values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    Lime,
}

impl Color {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        use Color::*;
        match (theme, self) {
            (Theme::Dark, Red) => (0xe0, 0x6c, 0x75),
            (Theme::Dark, Green) => (0x98, 0xc3, 0x79),
            (Theme::Dark, Yellow) => (0xe5, 0xc0, 0x7b),
            (Theme::Dark, Blue) => (0x61, 0xaf, 0xef),
            (Theme::Dark, Magenta) => (0xc6, 0x78, 0xdd),
            (Theme::Dark, Cyan) => (0x56, 0xb6, 0xc2),
            (Theme::Dark, Gray) => (0x5c, 0x63, 0x70),
            (Theme::Dark, Lime) => (0xa6, 0xe2, 0x2e),
            (Theme::Light, Red) => (0xe4, 0x56, 0x49),
            (Theme::Light, Green) => (0x50, 0xa1, 0x4f),
            (Theme::Light, Yellow) => (0xc1, 0x84, 0x01),
            (Theme::Light, Blue) => (0x40, 0x78, 0xf2),
            (Theme::Light, Magenta) => (0xa6, 0x26, 0xa4),
            (Theme::Light, Cyan) => (0x01, 0x84, 0xbc),
            (Theme::Light, Gray) => (0xa0, 0xa1, 0xa7),
            (Theme::Light, Lime) => (0x44, 0x8c, 0x27),
        }
    }

    fn escape(self, theme: Theme) -> String {
        let (r, g, b) = self.rgb(theme);
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal,
    Bold,
    Dim,
}

impl Weight {
    fn escape(self) -> &'static str {
        match self {
            Weight::Normal => "",
            Weight::Bold => "\x1b[1m",
            Weight::Dim => "\x1b[2m",
        }
    }
}

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// `text` in `color`, or plain when colors are off.
pub fn paint(color: Color, weight: Weight, text: &str) -> String {
    if colors_enabled() {
        format!("{}{}{}{}", weight.escape(), color.escape(Theme::current()), text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLUMNS
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal columns a string occupies, ignoring ANSI codes.
///
/// Emoji and CJK take two columns; joiners and variation selectors none.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            in_escape = c != 'm';
        } else {
            len += char_columns(c);
        }
    }
    len
}

fn char_columns(c: char) -> usize {
    match c as u32 {
        // ZWJ, variation selectors, skin tone modifiers, tag characters
        0x200D | 0xFE00..=0xFE0F | 0x1F3FB..=0x1F3FF | 0xE0020..=0xE007F => 0,
        // Hangul, CJK, fullwidth forms, emoji planes
        0x1100..=0x115F
        | 0x2E80..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFF00..=0xFF60
        | 0x1F000..=0x1FAFF => 2,
        _ => 1,
    }
}

/// Pad to `width` columns on the right.
pub fn left(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible_len(s))))
}

/// Pad to `width` columns on the left.
pub fn right(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(visible_len(s))), s)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOXES
// ═══════════════════════════════════════════════════════════════════════════

/// Wrap `inner` in gray `open`/`close` border characters.
fn framed(open: char, inner: &str, fill: usize, close: char) {
    let (border, reset) = if colors_enabled() {
        (Color::Gray.escape(Theme::current()), RESET)
    } else {
        (String::new(), "")
    };
    println!(
        "{border}{open}{reset}{inner}{border}{}{close}{reset}",
        "─".repeat(fill)
    );
}

fn labelled(open: char, label: &str, close: char) {
    let label = format!("─ {} ", paint(Color::Cyan, Weight::Bold, label));
    framed(open, &label, BOX_WIDTH.saturating_sub(visible_len(&label)), close);
}

/// `│ content          │`
pub fn row(content: &str) {
    let pad = " ".repeat(BOX_WIDTH.saturating_sub(visible_len(content)));
    framed('│', &format!("{content}{pad}"), 0, '│');
}

/// `┌─ LABEL ──────────┐`
pub fn section_top(label: &str) {
    labelled('┌', label, '┐');
}

/// `├─ LABEL ──────────┤`
pub fn section_mid(label: &str) {
    labelled('├', label, '┤');
}

/// `└──────────────────┘`
pub fn section_bot() {
    framed('└', "", BOX_WIDTH, '┘');
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

pub fn tier_badge(tier: MatchTier) -> String {
    let color = match tier {
        MatchTier::Exact => Color::Green,
        MatchTier::Prefix => Color::Blue,
        MatchTier::Substring => Color::Magenta,
    };
    paint(color, Weight::Normal, &format!("[{}]", tier.label()))
}

/// All badges for a tier set, strongest first.
pub fn tier_badges(tiers: TierSet) -> String {
    tiers.iter().map(tier_badge).collect::<Vec<_>>().join(" ")
}

/// Right-aligned score. Curated pins land far above organic scores.
pub fn score_value(score: i64) -> String {
    let color = match score {
        100_000.. => Color::Yellow,
        200.. => Color::Lime,
        100.. => Color::Green,
        _ => Color::Gray,
    };
    paint(color, Weight::Normal, &format!("{:>9}", score))
}

pub fn error_line(message: &str) -> String {
    paint(Color::Red, Weight::Bold, message)
}

pub fn hint(message: &str) -> String {
    paint(Color::Gray, Weight::Dim, message)
}
