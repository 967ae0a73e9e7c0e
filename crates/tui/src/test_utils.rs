//! Test utilities for the TUI crate.
//!
//! This module provides common helper functions used across test modules
//! to compare rendered boards as plain text.

use ratatui::buffer::Buffer;

/// Converts a ratatui [`Buffer`] to a string representation.
///
/// Each row of the buffer becomes a line in the output string. Trailing
/// whitespace is trimmed from each line to produce cleaner output suitable
/// for snapshot testing.
///
/// # Example
///
/// ```ignore
/// let area = Rect::new(0, 0, 12, 2);
/// let mut buf = Buffer::empty(area);
/// buf.set_string(0, 1, "[+]", Style::default());
///
/// assert_eq!(buffer_to_string(&buf), "\n[+]\n");
/// ```
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        // Trim trailing whitespace from each line for cleaner snapshots
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}
