//! Terminal rendering of the display buffer

use colored::*;
use forwarder_core::domain::view::LogView;

const RULE_WIDTH: usize = 80;

/// Prints the visible window of `view`, framed by rules
///
/// Locally generated error lines are highlighted; everything else is
/// printed as received.
pub fn print_view(view: &LogView) {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
    if view.line_count() == 0 {
        println!("{}", "No logs yet.".yellow());
    }
    for line in view.visible_lines() {
        println!("{}", style_line(line));
    }
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
    if let Some(label) = window_label(view) {
        println!("{}", label.dimmed());
    }
}

/// Position of the viewport, shown only when some lines are scrolled out
fn window_label(view: &LogView) -> Option<String> {
    let total = view.line_count();
    if total <= view.viewport() {
        return None;
    }

    let first = view.scroll_top() + 1;
    let last = (view.scroll_top() + view.viewport()).min(total);
    Some(format!("lines {}-{} of {}", first, last, total))
}

/// Prints the interactive command hint shown under the panel
pub fn print_prompt() {
    println!(
        "{} {}",
        "›".cyan(),
        "start <source> <target> | logs | quit".dimmed()
    );
}

fn style_line(line: &str) -> ColoredString {
    if line.starts_with("Error:") {
        line.red()
    } else {
        line.normal()
    }
}
