use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silence every console message. Used while the page itself goes to stdout.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn emit(line: String) {
    if !is_quiet() {
        println!("{line}");
    }
}

/// A step that is starting
pub fn status_message(message: &str) {
    emit(format!("{} {} ...", "⏳".yellow(), message.bright_white()));
}

pub fn success_message(message: &str) {
    emit(format!("{} {}", "✅".green(), message.green()));
}

pub fn warning_message(message: &str) {
    emit(format!("{} {}", "⚠️ ".yellow(), message.yellow()));
}

/// Banner line separating the output of one command from the rest
pub fn section_header(title: &str) {
    emit(format!("\n{}", format!("── {title} ──").cyan().bold()));
}

pub fn info_message(message: &str) {
    emit(format!("{} {}", "ℹ️ ".blue(), message.blue()));
}

/// Extra detail shown only with --verbose
pub fn detail_message(message: &str) {
    emit(format!("   {} {}", "→".dimmed(), message.dimmed()));
}

/// One catalog entry: its position, title and a short summary
pub fn entry_line(position: usize, title: &str, summary: &str) {
    emit(format_entry_line(position, title, summary));
}

fn format_entry_line(position: usize, title: &str, summary: &str) -> String {
    format!(
        "  {} {} {}",
        format!("{position:>2}.").cyan(),
        title.bold(),
        summary.dimmed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_line_aligns_positions() {
        colored::control::set_override(false);
        assert_eq!(
            format_entry_line(3, "Booleans", "[C++, Java]"),
            "   3. Booleans [C++, Java]"
        );
        assert_eq!(
            format_entry_line(22, "Collections and Iteration", "[C++, Java]"),
            "  22. Collections and Iteration [C++, Java]"
        );
    }
}
