//! Human-readable legend renderer.

use crate::config::LegendOptions;
use crate::legend::aggregate::LegendCounts;
use crate::model::{ChangeType, DifferenceType};

/// Render a Markdown legend for the given counts.
///
/// Sections: change types, then difference types, then (when
/// `show_extra_categories` is set) any other literal categories. A section
/// with nothing left to show after `hide_zero` is dropped.
pub fn render_legend(counts: &LegendCounts, options: &LegendOptions) -> String {
    let mut out = String::new();

    out.push_str(&format!("## {}\n\n", options.title));
    out.push_str(&format!("**Unique differences**: {}\n\n", counts.total_unique()));

    let by_change: Vec<(String, usize)> = ChangeType::KNOWN
        .iter()
        .map(|c| (c.label().to_string(), counts.change_type(c)))
        .collect();
    push_section(&mut out, "By Change", &by_change, options.hide_zero);

    let by_type: Vec<(String, usize)> = DifferenceType::KNOWN
        .iter()
        .map(|t| (t.label().to_string(), counts.difference_type(t)))
        .collect();
    push_section(&mut out, "By Type", &by_type, options.hide_zero);

    if options.show_extra_categories {
        let extra: Vec<(String, usize)> = counts
            .extra()
            .map(|(k, n)| (k.to_string(), n))
            .collect();
        push_section(&mut out, "Other", &extra, options.hide_zero);
    }

    out
}

fn push_section(out: &mut String, heading: &str, rows: &[(String, usize)], hide_zero: bool) {
    let visible: Vec<&(String, usize)> = rows
        .iter()
        .filter(|(_, n)| !hide_zero || *n > 0)
        .collect();
    if visible.is_empty() {
        return;
    }

    out.push_str(&format!("### {}\n\n", heading));
    for (label, n) in visible {
        out.push_str(&format!("- {}: {}\n", label, n));
    }
    out.push('\n');
}
