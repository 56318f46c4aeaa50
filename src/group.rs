use crate::common::{DisplayGroup, PublicationRecord};

/// Numeric sort key for a year: leading digits, or zero when there are none
pub fn year_key(year: &str) -> u32 {
    let digits: String = year.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Sort rank: a year with digits (even `0000`) outranks one without
fn year_rank(year: &str) -> (u32, bool) {
    let dated = year.trim().starts_with(|c: char| c.is_ascii_digit());
    (year_key(year), dated)
}

/// Newest first, undated last. Ties keep their input order.
pub fn sort_by_year(records: &mut [PublicationRecord]) {
    records.sort_by(|a, b| year_rank(&b.year).cmp(&year_rank(&a.year)));
}

/// Partition already-sorted records into runs sharing a year label
pub fn group_by_year(records: &[PublicationRecord]) -> Vec<DisplayGroup> {
    let mut groups: Vec<DisplayGroup> = Vec::new();

    for record in records {
        match groups.last_mut() {
            Some(group) if group.label == record.year => group.records.push(record.clone()),
            _ => {
                let mut group = DisplayGroup::new(record.year.clone());
                group.records.push(record.clone());
                groups.push(group);
            }
        }
    }

    groups
}

/// Sort then group in one step
pub fn sort_and_group(mut records: Vec<PublicationRecord>) -> Vec<DisplayGroup> {
    sort_by_year(&mut records);
    group_by_year(&records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, year: &str) -> PublicationRecord {
        PublicationRecord {
            id: id.to_string(),
            year: year.to_string(),
            ..Default::default()
        }
    }

    fn ids(records: &[PublicationRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_sort_is_stable() {
        let mut records = vec![record("A", "2020"), record("B", "2020"), record("C", "2019")];
        sort_by_year(&mut records);
        assert_eq!(ids(&records), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_sort_descending_with_undated_last() {
        let mut records = vec![
            record("old", "2001"),
            record("none", ""),
            record("new", "2023"),
            record("bad", "n.d."),
            record("mid", "2015"),
        ];
        sort_by_year(&mut records);
        assert_eq!(ids(&records), vec!["new", "mid", "old", "none", "bad"]);
    }

    #[test]
    fn test_grouping() {
        let records = vec![
            record("a", "2021"),
            record("b", "2021"),
            record("c", "2020"),
            record("d", ""),
        ];
        let groups = group_by_year(&records);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].label, "2021");
        assert_eq!(groups[0].records.len(), 2);
        assert_eq!(groups[1].label, "2020");
        assert_eq!(groups[1].records.len(), 1);
        assert_eq!(groups[2].label, "");
        assert!(groups[2].is_undated());
        assert_eq!(groups[2].records.len(), 1);
    }

    #[test]
    fn test_sort_and_group_unordered_input() {
        let groups = sort_and_group(vec![
            record("x", ""),
            record("y", "2019"),
            record("z", "2022"),
            record("w", "2019"),
        ]);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["2022", "2019", ""]);
        assert_eq!(ids(&groups[1].records), vec!["y", "w"]);
    }

    #[test]
    fn test_year_key() {
        assert_eq!(year_key("2020"), 2020);
        assert_eq!(year_key(" 2020a"), 2020);
        assert_eq!(year_key(""), 0);
        assert_eq!(year_key("n.d."), 0);
    }

    #[test]
    fn test_year_zero_stays_ahead_of_undated() {
        let groups = sort_and_group(vec![record("a", ""), record("b", "0000"), record("c", "")]);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["0000", ""]);
        assert_eq!(ids(&groups[1].records), vec!["a", "c"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(sort_and_group(Vec::new()).is_empty());
    }
}
