//! Recover per-company revenue/products/patents rows from a model reply.
//!
//! Strategies, in priority order: fenced JSON, markdown table, loose lines.
//! Every emitted row already carries a canonical company name.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

use super::models::CompanyRow;
use crate::common::structured_text::{find_fenced_json, find_field, non_empty_lines};
use crate::common::utils::{parse_count, parse_money_to_usd, to_whole};
use crate::common::{first_success, Strategy, STATS_ROSTER};

const NUM: &str = r"(?:\d{1,3}(?:,\d{3})+|\d+)";
const MAGNITUDE: &str = r"(?:(?:trillion|billion|million|thousand|bn|mm|[kmbt])\b)?";

lazy_static! {
    static ref LABELLED_LINE: Regex = Regex::new(r"^[-*•]?\s*([^:]+):\s*(.+)$").unwrap();
    static ref LABEL_END: Regex = Regex::new(r"[$€£0-9]").unwrap();
    static ref REVENUE_BEFORE: Regex = Regex::new(&format!(
        r"(?i)([$€£]?\s*\b{NUM}(?:\.\d+)?\s*{MAGNITUDE})\s*(?:usd\s*)?(?:in\s+)?(?:annual\s+)?revenue"
    ))
    .unwrap();
    static ref REVENUE_AFTER: Regex = Regex::new(&format!(
        r"(?i)revenue[^$€£\d]*([$€£]?\s*{NUM}(?:\.\d+)?\s*{MAGNITUDE})"
    ))
    .unwrap();
    // Count-before-keyword only admits a single qualifier between the two.
    static ref PRODUCTS_BEFORE: Regex = Regex::new(&format!(
        r"(?i)\b({NUM})\s+(?:(?:imaging|active|commercial|marketed|distinct)\s+)?products?"
    ))
    .unwrap();
    static ref PRODUCTS_AFTER: Regex = Regex::new(&format!(r"(?i)products?\D*?({NUM})")).unwrap();
    static ref PATENTS_BEFORE: Regex = Regex::new(&format!(
        r"(?i)\b({NUM})\s+(?:(?:granted|active|issued|registered|filed)\s+)?patents?"
    ))
    .unwrap();
    static ref PATENTS_AFTER: Regex = Regex::new(&format!(r"(?i)patents?\D*?({NUM})")).unwrap();
}

const STRATEGIES: [Strategy<CompanyRow>; 3] = [parse_fenced_block, parse_table, parse_loose_lines];

/// Extract company rows, or `None` when no strategy finds any.
pub fn extract_company_rows(text: &str) -> Option<Vec<CompanyRow>> {
    first_success(&STRATEGIES, text)
}

/// Which metric a header or JSON key refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Company,
    Revenue,
    Products,
    Patents,
}

fn is_column(column: Column, key: &str) -> bool {
    match column {
        Column::Company => key.contains("company") || key.contains("name"),
        Column::Revenue => key.contains("revenue") || key.contains("usd"),
        Column::Products => key.contains("product"),
        Column::Patents => key.contains("patent"),
    }
}

// ---------------------------------------------------------------------------
// Fenced JSON
// ---------------------------------------------------------------------------

fn parse_fenced_block(text: &str) -> Option<Vec<CompanyRow>> {
    let rows = match find_fenced_json(text)? {
        Value::Array(entries) => entries
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|object| {
                let raw = find_field(object, |k| is_column(Column::Company, k))?.as_str()?;
                json_row(raw, object)
            })
            .collect(),
        Value::Object(by_company) => by_company
            .iter()
            .filter_map(|(raw, value)| json_row(raw, value.as_object()?))
            .collect(),
        _ => return None,
    };
    Some(rows)
}

fn json_row(raw_name: &str, object: &Map<String, Value>) -> Option<CompanyRow> {
    let name = STATS_ROSTER.normalize(raw_name)?;
    let metric = |column| find_field(object, |k| is_column(column, k));

    Some(CompanyRow::new(
        name,
        metric(Column::Revenue).map(json_money).unwrap_or(0),
        metric(Column::Products).map(json_count).unwrap_or(0),
        metric(Column::Patents).map(json_count).unwrap_or(0),
    ))
}

fn json_money(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_f64().map(to_whole).unwrap_or(0),
        Value::String(s) => parse_money_to_usd(s),
        _ => 0,
    }
}

fn json_count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_f64().map(to_whole).unwrap_or(0),
        Value::String(s) => parse_count(s),
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// Markdown table
// ---------------------------------------------------------------------------

fn split_cells(line: &str) -> Vec<String> {
    line.trim()
        .trim_start_matches('|')
        .trim_end_matches('|')
        .split('|')
        .map(|cell| cell.replace("**", "").trim().to_string())
        .collect()
}

fn parse_table(text: &str) -> Option<Vec<CompanyRow>> {
    let mut lines = non_empty_lines(text).filter(|line| line.contains('|'));
    let header: Vec<String> = split_cells(lines.next()?)
        .into_iter()
        .map(|cell| cell.to_lowercase())
        .collect();

    let find = |column| header.iter().position(|cell| is_column(column, cell));
    let company = find(Column::Company)?;
    let revenue = find(Column::Revenue);
    let products = find(Column::Products);
    let patents = find(Column::Patents);

    let rows = lines
        .map(split_cells)
        .filter(|cells| cells.len() == header.len())
        .filter_map(|cells| {
            let name = STATS_ROSTER.normalize(&cells[company])?;
            let cell = |index: Option<usize>| index.map(|i| cells[i].as_str()).unwrap_or("");
            Some(CompanyRow::new(
                name,
                parse_money_to_usd(cell(revenue)),
                parse_count(cell(products)),
                parse_count(cell(patents)),
            ))
        })
        .collect();
    Some(rows)
}

// ---------------------------------------------------------------------------
// Loose lines
// ---------------------------------------------------------------------------

fn parse_loose_lines(text: &str) -> Option<Vec<CompanyRow>> {
    let rows = non_empty_lines(text)
        .filter_map(|line| parse_loose_line(&line.replace("**", "")))
        .collect();
    Some(rows)
}

fn parse_loose_line(line: &str) -> Option<CompanyRow> {
    let (label, rest, labelled) = match LABELLED_LINE.captures(line) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
            true,
        ),
        None => {
            let end = LABEL_END.find(line)?.start();
            (line[..end].trim_start_matches(['-', '*', '•']), line, false)
        }
    };
    let name = STATS_ROSTER.normalize(label)?;

    let revenue = first_capture(&[&*REVENUE_BEFORE, &*REVENUE_AFTER], rest);
    let products = first_capture(&[&*PRODUCTS_BEFORE, &*PRODUCTS_AFTER], rest);
    let patents = first_capture(&[&*PATENTS_BEFORE, &*PATENTS_AFTER], rest);
    // `Company: <prose>` still yields a zeroed row; unlabelled lines need a figure.
    if !labelled && revenue.is_none() && products.is_none() && patents.is_none() {
        return None;
    }

    Some(CompanyRow::new(
        name,
        revenue.map(parse_money_to_usd).unwrap_or(0),
        products.map(parse_count).unwrap_or(0),
        patents.map(parse_count).unwrap_or(0),
    ))
}

fn first_capture<'t>(patterns: &[&Regex], text: &'t str) -> Option<&'t str> {
    patterns
        .iter()
        .find_map(|re| re.captures(text)?.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loose_sentence_without_colon() {
        let rows = extract_company_rows("Zeiss $1.2B revenue, 12 products, 300 patents").unwrap();
        assert_eq!(rows, vec![CompanyRow::new("Zeiss", 1_200_000_000, 12, 300)]);
    }

    #[test]
    fn test_loose_keyword_first_form() {
        let text = "- **Canon**: Revenue ~$450 million; products: 8; patents 1,250\n- Topcon: 600M USD revenue, 15 imaging products";
        let rows = extract_company_rows(text).unwrap();
        assert_eq!(
            rows,
            vec![
                CompanyRow::new("Canon", 450_000_000, 8, 1250),
                CompanyRow::new("Topcon", 600_000_000, 15, 0),
            ]
        );
    }

    #[test]
    fn test_loose_skips_unknown_companies() {
        let text = "Heidelberg: $300M revenue\nOptovue: 4 products\nNikon: 9 patents";
        let rows = extract_company_rows(text).unwrap();
        assert_eq!(rows, vec![CompanyRow::new("Optovue", 0, 4, 0)]);
    }

    #[test]
    fn test_loose_labelled_line_without_figures_is_zeroed() {
        let text = "Nidek: a strong player\nOptovue: figures not disclosed";
        let rows = extract_company_rows(text).unwrap();
        assert_eq!(rows, vec![CompanyRow::zeroed("Nidek"), CompanyRow::zeroed("Optovue")]);
    }

    #[test]
    fn test_loose_unlabelled_line_without_figures_is_dropped() {
        assert!(extract_company_rows("Zeiss leads the market").is_none());
    }

    #[test]
    fn test_loose_year_before_revenue_is_not_revenue() {
        let rows =
            extract_company_rows("Zeiss: FY2023 revenue $1.2B, 12 products, 300 patents").unwrap();
        assert_eq!(rows, vec![CompanyRow::new("Zeiss", 1_200_000_000, 12, 300)]);
    }

    #[test]
    fn test_loose_neighbouring_metric_does_not_leak() {
        let rows =
            extract_company_rows("Zeiss: revenue $1.2B, products 14 and patents 2500").unwrap();
        assert_eq!(rows, vec![CompanyRow::new("Zeiss", 1_200_000_000, 14, 2500)]);
    }

    #[test]
    fn test_table() {
        let text = "\
| Company | Revenue (USD) | Products | Patents |
|---|---|---|---|
| Carl Zeiss Meditec | $1.5 billion | 20 | 3,000 |
| **Canon** | $400M | 10 | 900 |
| Nikon | $100M | 2 | 50 |
| Topcon | 500 million | 12 |
";
        let rows = extract_company_rows(text).unwrap();
        assert_eq!(
            rows,
            vec![
                CompanyRow::new("Zeiss", 1_500_000_000, 20, 3000),
                CompanyRow::new("Canon", 400_000_000, 10, 900),
            ]
        );
    }

    #[test]
    fn test_table_without_company_column_falls_through() {
        let text = "| Vendor | Revenue |\n|---|---|\n| Zeiss | $1B |\nNidek: 5 products";
        let rows = extract_company_rows(text).unwrap();
        assert_eq!(rows, vec![CompanyRow::new("Nidek", 0, 5, 0)]);
    }

    #[test]
    fn test_fenced_array_of_rows() {
        let text = r#"```json
[
  {"company": "Zeiss", "revenueUSD": 1200000000, "products": "12", "patents": 300},
  {"name": "Canon", "revenue": "$450M", "Products": 8.4},
  {"name": "Heidelberg", "revenue": "$300M"}
]
```"#;
        let rows = extract_company_rows(text).unwrap();
        assert_eq!(
            rows,
            vec![
                CompanyRow::new("Zeiss", 1_200_000_000, 12, 300),
                CompanyRow::new("Canon", 450_000_000, 8, 0),
            ]
        );
    }

    #[test]
    fn test_fenced_object_keyed_by_company() {
        let text = "```\n{\"Nidek\": {\"revenue_usd\": \"90m\", \"patents\": 40}}\n```";
        let rows = extract_company_rows(text).unwrap();
        assert_eq!(rows, vec![CompanyRow::new("Nidek", 90_000_000, 0, 40)]);
    }

    #[test]
    fn test_fence_beats_table() {
        let text = "\
| Company | Revenue | Products | Patents |
|---|---|---|---|
| Zeiss | $9B | 99 | 999 |

```json
[{\"company\": \"Zeiss\", \"revenueUSD\": 1000, \"products\": 1, \"patents\": 2}]
```";
        let rows = extract_company_rows(text).unwrap();
        assert_eq!(rows, vec![CompanyRow::new("Zeiss", 1000, 1, 2)]);
    }

    #[test]
    fn test_prose_is_unparseable() {
        assert!(extract_company_rows("Sorry, I don't have reliable figures.").is_none());
    }
}
