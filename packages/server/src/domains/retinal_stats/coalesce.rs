use std::collections::HashMap;

use crate::common::Roster;

use super::models::CompanyRow;

/// Merge rows per company and emit exactly the roster, in order.
///
/// On duplicates the first row wins field by field, except that its zero
/// fields are filled from later rows. Companies never mentioned get a
/// zeroed row. Rows for names outside the roster are dropped.
pub fn coalesce_stats(rows: &[CompanyRow], roster: &Roster) -> Vec<CompanyRow> {
    let merged = rows
        .iter()
        .filter_map(|row| Some((roster.normalize(&row.name)?, row)))
        .fold(HashMap::new(), |mut acc: HashMap<&str, CompanyRow>, (name, row)| {
            acc.entry(name)
                .and_modify(|existing| existing.fill_zeros_from(row))
                .or_insert_with(|| CompanyRow { name: name.to_string(), ..row.clone() });
            acc
        });

    roster
        .companies()
        .iter()
        .map(|name| {
            merged
                .get(name)
                .cloned()
                .unwrap_or_else(|| CompanyRow::zeroed(*name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::STATS_ROSTER;

    fn names(rows: &[CompanyRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_zero_fills_roster_in_order() {
        let rows = vec![CompanyRow::new("Nidek", 1, 2, 3), CompanyRow::new("Zeiss", 4, 5, 6)];
        let out = coalesce_stats(&rows, &STATS_ROSTER);

        assert_eq!(names(&out), vec!["Zeiss", "Canon", "Optovue", "Topcon", "Nidek"]);
        assert_eq!(out[0], CompanyRow::new("Zeiss", 4, 5, 6));
        assert_eq!(out[1], CompanyRow::zeroed("Canon"));
        assert_eq!(out[4], CompanyRow::new("Nidek", 1, 2, 3));
    }

    #[test]
    fn test_duplicates_prefer_first_non_zero() {
        let rows = vec![
            CompanyRow::new("Canon", 100, 0, 7),
            CompanyRow::new("canon inc", 999, 12, 0),
            CompanyRow::new("Canon", 5, 5, 5),
        ];
        let out = coalesce_stats(&rows, &STATS_ROSTER);
        assert_eq!(out[1], CompanyRow::new("Canon", 100, 12, 7));
    }

    #[test]
    fn test_non_roster_rows_dropped() {
        let rows = vec![CompanyRow::new("Heidelberg", 1, 1, 1)];
        let out = coalesce_stats(&rows, &STATS_ROSTER);
        assert!(out.iter().all(|r| *r == CompanyRow::zeroed(r.name.clone())));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(coalesce_stats(&[], &STATS_ROSTER).len(), STATS_ROSTER.companies().len());
    }

    #[test]
    fn test_coalesce_is_fixed_point() {
        let rows = vec![CompanyRow::new("Topcon", 10, 0, 3), CompanyRow::new("Topcon", 0, 4, 0)];
        let once = coalesce_stats(&rows, &STATS_ROSTER);
        assert_eq!(coalesce_stats(&once, &STATS_ROSTER), once);
    }
}
