//! Aligned plain-text tables for planner rows.
//!
//! Each cell is styled by the field it came from: hour fields print as clock
//! labels, `color` fields get a swatch of the subject color, and priorities,
//! statuses and due labels are tinted by how pressing they are. Padding is
//! computed on the plain text, so escape codes never skew the columns.

use ontime_core::hours::format_hour;

/// Narrowest a text column may be squeezed to.
const MIN_TEXT_WIDTH: usize = 6;
const SWATCH: char = '■';

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellStyle {
    /// Free text; the only kind of column that is shrunk to fit.
    Text,
    /// Priority, status, urgency, severity, or a due label.
    Level,
    /// `#rrggbb` subject color.
    Swatch,
    /// Hour of day, shown as `9 AM`.
    Hour,
    /// Right-aligned number.
    Count,
}

impl CellStyle {
    fn for_field(field: &str) -> Self {
        match field {
            "priority" | "status" | "urgency" | "severity" | "level" | "due" | "dueLabel" => {
                Self::Level
            }
            "color" => Self::Swatch,
            "startHour" | "endHour" => Self::Hour,
            "count" | "share" | "subjects" | "tasks" | "schedule" | "subjectCount"
            | "pendingCount" | "todaySessionCount" | "completionRate" | "reminderDays" => {
                Self::Count
            }
            _ => Self::Text,
        }
    }
}

/// One table cell: its text and how the field it came from is shown.
#[derive(Clone, Debug)]
pub struct Cell {
    text: String,
    style: CellStyle,
}

impl Cell {
    /// A cell for the value of `field`.
    #[must_use]
    pub fn new(field: &str, value: String) -> Self {
        let style = CellStyle::for_field(field);
        let text = match style {
            CellStyle::Hour => value.parse::<u8>().map_or(value, format_hour),
            _ => value,
        };
        Self { text, style }
    }

    /// A cell that is never styled, such as a field name.
    #[must_use]
    pub const fn text(value: String) -> Self {
        Self {
            text: value,
            style: CellStyle::Text,
        }
    }

    fn width(&self) -> usize {
        match self.style {
            // swatch, space, hex
            CellStyle::Swatch if is_hex_color(&self.text) => self.text.chars().count() + 2,
            _ => self.text.chars().count(),
        }
    }

    fn show(&self, width: usize, color: bool) -> String {
        let fits = self.width() <= width;
        let plain = if fits {
            self.text.clone()
        } else {
            clip(&self.text, width)
        };
        let shown_width = if fits { self.width() } else { width };
        let pad = " ".repeat(width.saturating_sub(shown_width));

        let body = match self.style {
            CellStyle::Swatch if fits && is_hex_color(&plain) => swatch(&plain, color),
            CellStyle::Level if color => tint(&plain),
            _ => plain,
        };

        if self.style == CellStyle::Count {
            format!("{pad}{body}")
        } else {
            format!("{body}{pad}")
        }
    }
}

/// Render `rows` under `headers`, two spaces between columns.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<Cell>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate().take(widths.len()) {
            widths[index] = widths[index].max(cell.width());
        }
    }

    if let Some(max_width) = options.max_width {
        squeeze_text_columns(&mut widths, headers, rows, max_width);
    }

    let missing = Cell::text(String::from("-"));
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join_cells(
        widths
            .iter()
            .zip(headers)
            .map(|(width, header)| Cell::text((*header).to_string()).show(*width, false)),
    ));
    lines.push("-".repeat(widths.iter().sum::<usize>() + gaps(widths.len())));
    for row in rows {
        lines.push(join_cells(widths.iter().enumerate().map(|(index, width)| {
            row.get(index).unwrap_or(&missing).show(*width, options.color)
        })));
    }
    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join("  ").trim_end().to_string()
}

const fn gaps(columns: usize) -> usize {
    columns.saturating_sub(1) * 2
}

/// Take the overflow out of columns holding free text, widest first.
/// Columns of hours, levels, swatches and counts keep their full width.
fn squeeze_text_columns(
    widths: &mut [usize],
    headers: &[&str],
    rows: &[Vec<Cell>],
    max_width: usize,
) {
    let total = widths.iter().sum::<usize>() + gaps(widths.len());
    let mut overflow = total.saturating_sub(max_width);
    if overflow == 0 {
        return;
    }

    let mut text_columns: Vec<usize> = (0..widths.len())
        .filter(|&index| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .any(|cell| cell.style == CellStyle::Text)
        })
        .collect();
    text_columns.sort_by_key(|&index| std::cmp::Reverse(widths[index]));

    for index in text_columns {
        let floor = headers[index].chars().count().max(MIN_TEXT_WIDTH);
        let give = widths[index].saturating_sub(floor).min(overflow);
        widths[index] -= give;
        overflow -= give;
        if overflow == 0 {
            break;
        }
    }
}

fn clip(value: &str, width: usize) -> String {
    if width <= 1 {
        return String::from("…");
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|ch| ch.is_ascii_hexdigit())
}

fn swatch(hex: &str, color: bool) -> String {
    if !color {
        return format!("{SWATCH} {hex}");
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
    format!(
        "\u{1b}[38;2;{};{};{}m{SWATCH}\u{1b}[0m {hex}",
        channel(1..3),
        channel(3..5),
        channel(5..7)
    )
}

/// Green for settled, yellow for coming up, red for needs attention now.
fn tint(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    let code = match lower.as_str() {
        "completed" | "later" | "low" | "success" => "32",
        "pending" | "in-progress" | "soon" | "medium" | "warning" | "due tomorrow" => "33",
        "high" | "urgent" | "error" | "due today" => "31",
        _ if lower.ends_with("overdue") => "31",
        _ if lower.starts_with("due in ") => "33",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}
