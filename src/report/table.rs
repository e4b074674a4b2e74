// src/report/table.rs
// =============================================================================
// This module renders the fixed-width progress/summary rows.
//
// A row is an ordered list of column descriptors. Each column is either
// Fixed(width) or Elastic; the single elastic column absorbs whatever width
// the fixed columns leave over, so every rendered line comes out at exactly
// the table width. Overlong values are truncated from the left with a
// leading ellipsis (the tail of a URL is the interesting part); short
// values are right-padded with spaces so consecutive lines align.
// =============================================================================

use crate::page::PageInfo;

// Total width of one rendered row
pub const TABLE_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy)]
pub enum Width {
    Fixed(usize),
    Elastic,
}

#[derive(Debug)]
pub struct Column {
    text: String,
    width: Width,
}

impl Column {
    pub fn fixed(text: impl Into<String>, width: usize) -> Self {
        Self {
            text: text.into(),
            width: Width::Fixed(width),
        }
    }

    pub fn elastic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            width: Width::Elastic,
        }
    }
}

// Renders one page as a table row: URL (elastic), status, content type,
// latency, link count.
pub fn page_row(info: &PageInfo) -> String {
    let columns = [
        Column::elastic(info.url.to_string()),
        Column::fixed(" ", 1),
        Column::fixed(info.status.to_string(), 5),
        Column::fixed(info.content_type.clone(), 15),
        Column::fixed(format!("{:>5}ms", info.latency.as_millis()), 8),
        Column::fixed(format!("{:>4} links", info.link_count()), 10),
    ];
    render(&columns, TABLE_WIDTH)
}

// Renders a row of columns at the given total width
//
// When exactly one column is elastic it receives the width not claimed by
// the fixed columns; with zero or several elastic columns there is nothing
// sensible to distribute, so elastic columns collapse to zero width.
pub fn render(columns: &[Column], total_width: usize) -> String {
    let fixed_total: usize = columns
        .iter()
        .filter_map(|column| match column.width {
            Width::Fixed(width) => Some(width),
            Width::Elastic => None,
        })
        .sum();
    let elastic_count = columns
        .iter()
        .filter(|column| matches!(column.width, Width::Elastic))
        .count();
    let elastic_width = if elastic_count == 1 {
        total_width.saturating_sub(fixed_total)
    } else {
        0
    };

    let mut line = String::with_capacity(total_width);
    for column in columns {
        let width = match column.width {
            Width::Fixed(width) => width,
            Width::Elastic => elastic_width,
        };
        line.push_str(&fit(&column.text, width));
    }
    line
}

// Fits text into exactly `width` characters: left-truncate with "..." when
// too long, right-pad with spaces when too short.
fn fit(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() > width {
        if width <= 3 {
            return chars[chars.len() - width..].iter().collect();
        }
        let tail: String = chars[chars.len() - (width - 3)..].iter().collect();
        format!("...{tail}")
    } else {
        let mut fitted = String::with_capacity(width);
        fitted.push_str(text);
        fitted.extend(std::iter::repeat(' ').take(width - chars.len()));
        fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use url::Url;

    #[test]
    fn short_text_is_right_padded() {
        assert_eq!(fit("abc", 6), "abc   ");
    }

    #[test]
    fn exact_width_is_untouched() {
        assert_eq!(fit("abcdef", 6), "abcdef");
    }

    #[test]
    fn long_text_truncates_from_the_left_with_ellipsis() {
        // The tail survives; the head is replaced by "..."
        assert_eq!(fit("https://example.com/deep/path", 15), "...om/deep/path");
        assert_eq!(fit("https://example.com/deep/path", 15).len(), 15);
    }

    #[test]
    fn elastic_column_absorbs_leftover_width() {
        let columns = [
            Column::elastic("url"),
            Column::fixed("200", 5),
            Column::fixed("x", 3),
        ];
        let line = render(&columns, 20);
        assert_eq!(line.len(), 20);
        // 20 - 5 - 3 = 12 characters for the elastic column
        assert_eq!(&line[..12], "url         ");
    }

    #[test]
    fn page_row_is_exactly_table_width() {
        let info = PageInfo {
            url: Url::parse("https://example.com/page").unwrap(),
            status: 200,
            content_type: "text/html".to_string(),
            latency: Duration::from_millis(123),
            links: Vec::new(),
        };
        let row = page_row(&info);
        assert_eq!(row.chars().count(), TABLE_WIDTH);
        assert!(row.starts_with("https://example.com/page"));
        assert!(row.contains("  123ms"));
        assert!(row.contains("   0 links"));
    }

    #[test]
    fn page_row_with_long_url_keeps_the_path_tail() {
        let info = PageInfo {
            url: Url::parse(
                "https://example.com/a/very/long/path/that/never/seems/to/end/at/all/and/keeps/going/even/further/page.html",
            )
            .unwrap(),
            status: 404,
            content_type: "text/html".to_string(),
            latency: Duration::from_millis(5),
            links: Vec::new(),
        };
        let row = page_row(&info);
        assert_eq!(row.chars().count(), TABLE_WIDTH);
        assert!(row.starts_with("..."));
        assert!(row.contains("page.html"));
    }
}
