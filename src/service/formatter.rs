//! Console message formatting

use console::style;

pub fn title(text: &str) -> String {
    style(text).cyan().bold().to_string()
}

pub fn success(text: &str) -> String {
    format!("{} {}", style("✔").green().bold(), text)
}

pub fn error(text: &str) -> String {
    format!("{} {}", style("✖").red().bold(), style(text).red())
}

pub fn info(text: &str) -> String {
    format!("{} {}", style("ℹ").blue().bold(), text)
}

pub fn warning(text: &str) -> String {
    format!("{} {}", style("⚠").yellow().bold(), style(text).yellow())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_text() {
        console::set_colors_enabled(false);
        assert_eq!(success("done"), "✔ done");
        assert_eq!(error("failed"), "✖ failed");
        assert_eq!(title("Transaction"), "Transaction");
    }
}
