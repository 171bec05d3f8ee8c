//! Terminal output utilities.
//!
//! Box drawing, number formatting, styled messages.

use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print an error message to stderr, red when stderr is a terminal.
pub fn print_error(msg: &str) {
    if io::stderr().is_tty() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{msg}");
    }
}

/// Print a warning to stderr, yellow when stderr is a terminal.
pub fn print_warning(msg: &str) {
    if io::stderr().is_tty() {
        eprintln!("{}", msg.yellow());
    } else {
        eprintln!("{msg}");
    }
}

// ============================================================================
// Number Formatting
// ============================================================================

pub fn format_number(num: usize) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Lines of a box, rendered in one go to stdout or stderr.
#[derive(Debug, Default)]
pub struct Panel {
    lines: Vec<String>,
}

impl Panel {
    /// Start a box with optional title: ┌─ Title ─────────────┐
    pub fn new(title: &str) -> Self {
        let top = if title.is_empty() {
            format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
            format!("┌{}{}┐", title_part, "─".repeat(remaining))
        };
        Panel { lines: vec![top] }
    }

    /// Content line: │ content              │
    pub fn line(mut self, content: &str) -> Self {
        let inner_width = BOX_WIDTH - 4;
        let padding = inner_width.saturating_sub(console_width(content));
        self.lines
            .push(format!("│ {}{} │", content, " ".repeat(padding)));
        self
    }

    /// Centered content line: │      content       │
    pub fn center(mut self, content: &str) -> Self {
        let inner_width = BOX_WIDTH - 4;
        let total_padding = inner_width.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.lines.push(format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ));
        self
    }

    /// Flag and description, wrapping the description if needed.
    pub fn opt(mut self, flag: &str, desc: &str) -> Self {
        let inner_width = BOX_WIDTH - 4;
        let flag_col = 27;
        let desc_col = inner_width - flag_col;

        let flag_padded = if flag.len() < flag_col {
            format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
        } else {
            flag[..flag_col].to_string()
        };

        let mut wrapped: Vec<String> = Vec::new();
        let mut current = String::new();
        for word in desc.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.len() + 1 + word.len() <= desc_col {
                current.push(' ');
                current.push_str(word);
            } else {
                wrapped.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            wrapped.push(current);
        }

        let first = wrapped.first().map(String::as_str).unwrap_or("");
        let padding = desc_col.saturating_sub(first.len());
        self.lines
            .push(format!("│ {}{}{} │", flag_padded, first, " ".repeat(padding)));

        let indent = " ".repeat(flag_col);
        for line in wrapped.iter().skip(1) {
            let padding = desc_col.saturating_sub(line.len());
            self.lines
                .push(format!("│ {}{}{} │", indent, line, " ".repeat(padding)));
        }
        self
    }

    /// Close the box: └──────────────────────┘
    pub fn bottom(mut self) -> Self {
        self.lines.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    pub fn print(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = out.write_all(self.render().as_bytes());
        let _ = out.flush();
    }

    pub fn eprint(&self) {
        let _ = io::stderr().write_all(self.render().as_bytes());
    }
}

/// Display width ignoring ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
