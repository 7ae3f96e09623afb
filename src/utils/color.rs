use crate::records::{Disposition, Value};
use ratatui::style::Color;

/// Accent used for highlights and selected items
pub const ACCENT: Color = Color::Rgb(0, 204, 153);

/// Convert a disposition to its status-pill color
#[must_use]
pub fn disposition_color(disposition: &Disposition) -> Color {
    match disposition {
        Disposition::Confirmed => Color::Rgb(34, 197, 94),
        Disposition::Candidate => Color::Rgb(234, 179, 8),
        Disposition::FalsePositive => Color::Rgb(239, 68, 68),
        Disposition::Other(_) => Color::Rgb(153, 153, 153),
    }
}

/// Color for a table cell; categories get their pill color
#[must_use]
pub fn value_color(value: &Value) -> Color {
    match value {
        Value::Category(d) => disposition_color(d),
        Value::Absent => Color::DarkGray,
        _ => Color::White,
    }
}

/// Color for a chart bucket label, falling back to grey for unknown labels
#[must_use]
pub fn bucket_color(label: &str) -> Color {
    let disposition = Disposition::parse(label);
    disposition_color(&disposition)
}

/// Confusion-matrix cell shading from a heat intensity in `[0, 1]`
#[must_use]
pub fn heat_color(intensity: f64, diagonal: bool) -> Color {
    let t = intensity.clamp(0.0, 1.0);
    let blend = |from: u8, to: u8| (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8;
    if diagonal {
        Color::Rgb(blend(20, 0), blend(30, 204), blend(42, 153))
    } else {
        Color::Rgb(blend(20, 100), blend(30, 116), blend(42, 139))
    }
}
