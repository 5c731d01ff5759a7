//! Terminal drawing for the `play` command.
//!
//! Three rows at the bottom of the screen: the floating time tooltip, the
//! bar itself with its time readout, and the accessible values.

use std::io::{self, Write};

use anyhow::Result;

use seekbar::control::{CssLength, StyleProperty, TooltipBar};
use seekbar::{format_time, DraggableRange, HorizontalRange, MediaPlayer, SeekBar};

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const WHITE: &str = "\x1b[97m";
const DARK_GREY: &str = "\x1b[90m";
const GREY: &str = "\x1b[37m";
const BAR_BG: &str = "\x1b[48;5;236m";
const RESET: &str = "\x1b[0m";

/// Build the bar characters for a fill fraction.
///
/// # Returns
/// A tuple of (bar_chars, filled_count). The playhead sits on the first
/// unfilled cell and disappears once the bar is full.
pub fn build_bar_chars(bar_width: usize, progress: f64, scrubbing: bool) -> (Vec<char>, usize) {
    let progress = progress.clamp(0.0, 1.0);
    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];
    for c in bar.iter_mut().take(filled) {
        *c = '━';
    }
    if filled < bar_width {
        bar[filled] = if scrubbing { '◉' } else { '⏺' };
    }

    (bar, filled)
}

/// Fill fraction drawn by the slider.
pub fn fill_fraction(fill: CssLength) -> f64 {
    match fill {
        CssLength::Percent(pct) => pct / 100.0,
        CssLength::Px(_) => 0.0,
    }
}

/// First column of the tooltip label.
///
/// The label is centered on the end of the fill, then clamped so that its
/// center stays between the tooltip's min and max widths (measured from
/// the bar start).
pub fn tooltip_column(bar: &HorizontalRange, fill: f64, tooltip: &TooltipBar) -> u16 {
    let el = tooltip_element_px(tooltip);
    let mut center = bar.width() * fill;
    if let Some(max) = el.max_width {
        center = center.min(max);
    }
    if let Some(min) = el.min_width {
        center = center.max(min);
    }
    let start = bar.left() + center - tooltip.tooltip_width() / 2.0;
    start.max(0.0).round() as u16
}

struct TooltipPx {
    max_width: Option<f64>,
    min_width: Option<f64>,
}

fn tooltip_element_px(tooltip: &TooltipBar) -> TooltipPx {
    use seekbar::control::Component;

    let px = |property| match tooltip.element().style(property) {
        Some(CssLength::Px(v)) => Some(v),
        _ => None,
    };
    TooltipPx {
        max_width: px(StyleProperty::MaxWidth),
        min_width: px(StyleProperty::MinWidth),
    }
}

/// Draw the tooltip, bar and accessibility rows.
///
/// `row` is the bar row (0-indexed); the tooltip goes above it and the
/// accessible values below.
pub fn render_rows<P: MediaPlayer + ?Sized>(
    stdout: &mut io::Stdout,
    bar: &SeekBar,
    player: &P,
    width: u16,
    row: u16,
) -> Result<()> {
    let range = bar.range();
    let bar_width = range.width() as usize;
    let fill = fill_fraction(range.fill_width());
    let (chars, filled) = build_bar_chars(bar_width, fill, bar.is_scrubbing());

    let mut output = String::with_capacity(width as usize * 8);

    // Tooltip row
    output.push_str(&format!("\x1b[{};1H\x1b[2K", row));
    if let Some(tooltip) = bar.tooltip() {
        let col = tooltip_column(range, fill, tooltip);
        output.push_str(&format!("\x1b[{};{}H", row, col + 1));
        output.push_str(YELLOW);
        output.push_str(tooltip.label().text());
        output.push_str(RESET);
    }

    // Bar row
    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push_str(BAR_BG);
    output.push(' ');
    for (i, &c) in chars.iter().enumerate() {
        if i < filled {
            output.push_str(GREEN);
        } else if i == filled {
            output.push_str(WHITE);
        } else {
            output.push_str(DARK_GREY);
        }
        output.push(c);
    }
    let readout = format!(
        " {}/{}",
        bar.element().attribute("aria-valuetext").unwrap_or("-:-"),
        format_time(player.duration(), player.duration())
    );
    output.push_str(GREY);
    output.push_str(&readout);
    let used_width = 1 + bar_width + readout.chars().count();
    output.push_str(&" ".repeat((width as usize).saturating_sub(used_width)));
    output.push_str(RESET);

    // Accessibility row
    output.push_str(&format!("\x1b[{};1H\x1b[2K", row + 2));
    output.push_str(DARK_GREY);
    output.push_str(&status_line(bar, player));
    output.push_str(RESET);

    write!(stdout, "{}", output)?;
    stdout.flush()?;
    Ok(())
}

/// Accessible state of the control as one line of text.
pub fn status_line<P: MediaPlayer + ?Sized>(bar: &SeekBar, player: &P) -> String {
    let el = bar.element();
    let mode = if bar.is_scrubbing() {
        "scrubbing"
    } else if player.paused() {
        "paused"
    } else {
        "playing"
    };
    format!(
        "{} {}% ({}) [{}]  ←/→ ±5s  space play/pause  q quit",
        el.attribute("aria-label").unwrap_or_default(),
        el.attribute("aria-valuenow").unwrap_or("0.00"),
        el.attribute("aria-valuetext").unwrap_or("-:-"),
        mode
    )
}
