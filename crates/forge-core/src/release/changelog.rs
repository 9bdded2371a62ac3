//! Changelog section formatting and insertion

use chrono::NaiveDate;

/// Release date in the form `January 5, 2026`
pub fn format_release_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Section for a new release: header line plus optional commit lines
pub fn release_section(version: &str, date: NaiveDate, commits: &str) -> String {
    let mut section = format!("## v{}  ({})", version, format_release_date(date));
    if !commits.is_empty() {
        section.push('\n');
        section.push_str(commits);
    }
    section
}

fn is_top_level_heading(line: &str) -> bool {
    line == "#" || line.starts_with("# ")
}

/// Insert `section` right after the first top-level heading.
///
/// The section is surrounded by blank lines; every other line is kept verbatim
/// and in order. A document without a top-level heading gets the section at
/// the very top.
pub fn insert_section(changelog: &str, section: &str) -> String {
    let lines: Vec<&str> = changelog.split('\n').collect();

    let Some(index) = lines.iter().position(|l| is_top_level_heading(l)) else {
        return format!("{}\n\n{}", section, changelog);
    };

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 3);
    out.extend_from_slice(&lines[..=index]);
    out.push("");
    out.push(section);
    out.push("");
    out.extend_from_slice(&lines[index + 1..]);
    out.join("\n")
}
