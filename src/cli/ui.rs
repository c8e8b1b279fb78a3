use colored::*;

pub fn format_header(text: &str) -> String {
    format!("{}", text.blue().bold())
}

pub fn format_highlight(text: &str) -> String {
    format!("{}", text.cyan())
}

/// Two-column listing of commands, names padded to the longest one.
pub fn format_commands(listing: &[(&str, &str)]) -> String {
    let width = listing.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut out = format_header("Commands:");
    for (name, usage) in listing {
        let padded = format!("{:width$}", name, width = width);
        out.push_str(&format!("\n  {}  {}", format_highlight(&padded), usage));
    }
    out
}
