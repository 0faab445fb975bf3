/// Format a derived value for a table cell
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }
    let abs_value = value.abs();
    if abs_value >= 1e5 || (abs_value < 1e-3 && value != 0.0) {
        format!("{:.3e}", value)
    } else {
        format!("{:.4}", value)
    }
}

/// Format an axis tick label (e.g. 0.50, 12.3, 1500, 2.1e6)
pub fn format_axis(value: f64) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }
    let abs_value = value.abs();
    if abs_value >= 1e5 {
        format!("{:.1e}", value)
    } else if abs_value >= 1_000.0 {
        format!("{:.0}", value)
    } else if abs_value >= 10.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Format a share as a percentage
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}
