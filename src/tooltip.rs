//! Hover tooltip content and pointer offset.
//!
//! The page script shows the tooltip on pointer-enter, offset from the
//! pointer by [`TOOLTIP_OFFSET`], and hides it on pointer-leave.

use crate::render::escape;

use serde::Serialize;

/// Pointer offset applied when positioning the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TooltipOffset {
    pub dx: f64,
    pub dy: f64,
}

pub const TOOLTIP_OFFSET: TooltipOffset = TooltipOffset { dx: 5.0, dy: -28.0 };

/// Tooltip text for one cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    /// Markup inserted into the tooltip element; the course name is escaped.
    pub html: String,
    /// Plain text used for the SVG `<title>` fallback.
    pub text: String,
}

impl TooltipContent {
    pub fn new(course: &str, approved_rate: f64) -> Self {
        let rate = format_rate(approved_rate);
        Self {
            html: format!(
                "<strong>Course:</strong> {} <br><strong>Approved Rate:</strong> {}",
                escape(course),
                rate
            ),
            text: format!("Course: {}\nApproved Rate: {}", course, rate),
        }
    }
}

/// Rates are shown exactly as given, shortest round-trip form.
pub fn format_rate(rate: f64) -> String {
    format!("{}", rate)
}
