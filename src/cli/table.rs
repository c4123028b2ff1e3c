//! Table rendering for list and summary output

use tabled::builder::Builder;
use tabled::settings::Style;

/// Render a header row plus data rows as a bordered table
pub fn render(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_headers_and_cells() {
        let out = render(
            &["ID", "ROUTE"],
            vec![vec!["1".to_string(), "Milano -> Roma".to_string()]],
        );
        assert!(out.contains("ID"));
        assert!(out.contains("Milano -> Roma"));
    }
}
