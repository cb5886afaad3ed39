//! Terminal rendering: badges, key-value lines, hints and tables.
//!
//! Pretty output (colors, unicode badges) is only used on a TTY. Everything
//! else gets stable `key=value` lines.

use std::io::IsTerminal;

use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::{ContentArrangement, Table};
use owo_colors::OwoColorize;

/// Terminal context for rendering decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Pretty (human) output instead of plain `key=value`
    pub pretty: bool,
}

impl UiContext {
    /// Detect context for stdout.
    pub fn for_stdout() -> Self {
        Self::detect(std::io::stdout().is_terminal())
    }

    /// Detect context for stderr.
    pub fn for_stderr() -> Self {
        Self::detect(std::io::stderr().is_terminal())
    }

    fn detect(is_tty: bool) -> Self {
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();
        Self {
            color: is_tty && !no_color_env && !term_is_dumb,
            pretty: is_tty && !term_is_dumb,
        }
    }
}

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Err => "[ERR]",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warn => "warn",
            Self::Err => "error",
        }
    }
}

/// Render a badge with a message.
///
/// Pretty mode: "[OK] message" with colored badge
/// Plain mode: "ok=message"
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    if !ctx.pretty {
        return format!("{}={}", kind.label(), message);
    }
    let text = kind.text();
    let styled = if ctx.color {
        match kind {
            Badge::Ok => text.green().to_string(),
            Badge::Warn => text.yellow().to_string(),
            Badge::Err => text.red().to_string(),
        }
    } else {
        text.to_string()
    };
    format!("{} {}", styled, message)
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.pretty {
        let label = format!("{}:", key);
        if ctx.color {
            format!("{} {}", label.dimmed(), value)
        } else {
            format!("{} {}", label, value)
        }
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    let text = text.strip_prefix("Hint: ").unwrap_or(text);
    if ctx.pretty {
        if ctx.color {
            format!("{} {}", "Hint:".dimmed(), text)
        } else {
            format!("Hint: {}", text)
        }
    } else {
        format!("hint={}", text)
    }
}

/// Render rows as a table.
///
/// Pretty mode draws borders; plain mode is one space-separated row per line.
pub fn table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    if !ctx.pretty {
        return rows
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n");
    }
    let mut table = Table::new();
    table
        .load_preset(if ctx.color { UTF8_FULL } else { NOTHING })
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.to_vec());
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

/// Print an error to stderr with an optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", badge(ctx, Badge::Err, message));
    if let Some(h) = error_hint {
        eprintln!("{}", hint(ctx, h));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            pretty: false,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            pretty: true,
        }
    }

    #[test]
    fn test_badge_plain() {
        assert_eq!(badge(&plain_ctx(), Badge::Ok, "valid"), "ok=valid");
        assert_eq!(badge(&plain_ctx(), Badge::Err, "bad"), "error=bad");
    }

    #[test]
    fn test_badge_pretty_without_color() {
        assert_eq!(badge(&pretty_ctx(), Badge::Warn, "careful"), "[WARN] careful");
    }

    #[test]
    fn test_kv() {
        assert_eq!(kv(&plain_ctx(), "Envelope bytes", "96"), "envelope_bytes=96");
        assert_eq!(kv(&pretty_ctx(), "Kind", "read"), "Kind: read");
    }

    #[test]
    fn test_hint_strips_prefix() {
        assert_eq!(hint(&plain_ctx(), "Hint: run it"), "hint=run it");
        assert_eq!(hint(&pretty_ctx(), "run it"), "Hint: run it");
    }

    #[test]
    fn test_plain_table() {
        let rows = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        ];
        assert_eq!(table(&plain_ctx(), &["X", "Y"], &rows), "a b\nc d");
    }

    #[test]
    fn test_pretty_table_has_headers() {
        let rows = vec![vec!["a".to_string(), "b".to_string()]];
        let out = table(&pretty_ctx(), &["Left", "Right"], &rows);
        assert!(out.contains("Left"));
        assert!(out.contains("Right"));
    }
}
