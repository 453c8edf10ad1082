use crate::options::FormatOptions;

/// Formats the bare year.
#[must_use]
pub fn format_year(current_year: i32) -> String {
    current_year.to_string()
}

/// Formats `"{start}-{current}"` when the start year precedes the current one,
/// and just the current year otherwise.
#[must_use]
pub fn format_year_range(start_year: Option<i32>, current_year: i32) -> String {
    match start_year {
        Some(start_year) if start_year < current_year => format!("{start_year}-{current_year}"),
        _ => format_year(current_year),
    }
}

/// Formats a copyright notice for the given year.
///
/// Prefix, year and name are joined with the separator; empty or missing
/// parts are skipped.
#[must_use]
pub fn format_copyright(options: &FormatOptions, current_year: i32) -> String {
    let year = format_year_range(options.start_year, current_year);
    [
        Some(options.prefix.as_str()),
        Some(year.as_str()),
        options.name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(options.separator.as_str())
}
