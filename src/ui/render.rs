use crate::models::{Groups, Rider};

pub const EMPTY_STATE: &str = "No ride groups yet. Be the first to post a ride and start a group!";
pub const LOAD_ERROR: &str = "Failed to load ride groups. Please try again.";

/// Builds the full listing view from a GroupsResponse.
///
/// Pure function of the whole value: callers replace their previous view
/// with the returned string, never patch it, so re-rendering the same
/// server state always produces identical output.
pub fn render_groups(groups: &Groups) -> String {
    if groups.is_empty() {
        return format!("{}\n", EMPTY_STATE);
    }

    let mut view = String::new();
    for (destination, riders) in groups {
        let label = if riders.len() == 1 { "ride" } else { "rides" };
        view.push_str(&format!("📍 {} ({} {})\n", destination, riders.len(), label));
        for rider in riders {
            view.push_str(&render_rider(rider));
        }
        view.push('\n');
    }
    view
}

fn render_rider(rider: &Rider) -> String {
    let mut line = format!("  🚗 {}", rider.name);
    if let Some(location) = &rider.location {
        line.push_str(&format!(" - from {}", location));
    }
    match &rider.date {
        Some(date) => line.push_str(&format!(" - {}", date)),
        None => line.push_str(" - Flexible timing"),
    }
    line.push_str(&format!(" - 📞 {}\n", rider.contact));
    line
}

/// Single error block shown instead of (never mixed with) group content.
pub fn render_error(reason: &str) -> String {
    format!("⚠️  {}\n{}\n", reason, LOAD_ERROR)
}
