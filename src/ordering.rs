//! Job ordering preprocessing.
//!
//! Two independent, composable reorderings applied to one day's jobs
//! before allocation:
//!
//! - **Interleaving** spreads same-category jobs evenly across the
//!   sequence to break up consecutive runs of one category.
//! - **Priority ordering** stable-sorts jobs by the position of their
//!   category in a [`PriorityList`].
//!
//! Interleaving runs first. The priority sort is stable, so it keeps
//! the interleaved order among jobs of equal rank.

use std::collections::HashMap;

use crate::models::Job;

/// An ordered list of category codes, highest priority first.
///
/// Rank is the position in the list; categories not listed rank after
/// every listed one. The category → position index is built once so
/// rank lookups never rescan the list.
#[derive(Debug, Clone, Default)]
pub struct PriorityList {
    codes: Vec<String>,
    index: HashMap<String, usize>,
}

impl PriorityList {
    /// Builds a priority list from category codes in rank order.
    ///
    /// The first occurrence of a duplicated code keeps its rank.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes: Vec<String> = codes.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(codes.len());
        for (position, code) in codes.iter().enumerate() {
            index.entry(code.clone()).or_insert(position);
        }
        Self { codes, index }
    }

    /// Parses a comma- or newline-separated list of category codes.
    ///
    /// Entries are trimmed and empty entries dropped.
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.split(|c: char| c == ',' || c == '\n')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_owned),
        )
    }

    /// Rank of a category: its list position, or the list length when
    /// the category is not listed.
    pub fn rank(&self, category: &str) -> usize {
        self.index
            .get(category)
            .copied()
            .unwrap_or(self.codes.len())
    }

    /// Number of listed categories.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether no categories are listed.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The category codes in rank order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }
}

/// Reorders jobs so same-category jobs are spread evenly.
///
/// Jobs are grouped by category, keeping each group's internal order
/// and the order in which categories first appear. The output takes
/// the i-th job of every group in turn, so no two adjacent jobs share
/// a category unless one category outnumbers all the others combined.
pub fn interleave_by_category(jobs: Vec<Job>) -> Vec<Job> {
    let mut group_of: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<Job>> = Vec::new();

    for job in jobs {
        let slot = *group_of.entry(job.category.clone()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(job);
    }

    let total: usize = groups.iter().map(Vec::len).sum();
    let longest = groups.iter().map(Vec::len).max().unwrap_or(0);

    let mut interleaved = Vec::with_capacity(total);
    let mut takers: Vec<std::vec::IntoIter<Job>> =
        groups.into_iter().map(Vec::into_iter).collect();
    for _ in 0..longest {
        for taker in &mut takers {
            if let Some(job) = taker.next() {
                interleaved.push(job);
            }
        }
    }
    interleaved
}

/// Stable-sorts jobs by priority rank, lowest rank first.
///
/// Jobs with unlisted categories keep their relative order after all
/// listed ones.
pub fn sort_by_priority(jobs: &mut [Job], priority: &PriorityList) {
    jobs.sort_by_key(|job| priority.rank(&job.category));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn job(id: &str, category: &str) -> Job {
        Job::new(id, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()).with_category(category)
    }

    fn categories(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.category.as_str()).collect()
    }

    #[test]
    fn test_interleave_no_adjacent_duplicates() {
        // A:5, B:5, C:2: no category outnumbers the rest combined.
        let mut input = Vec::new();
        for i in 0..5 {
            input.push(job(&format!("a{i}"), "A"));
        }
        for i in 0..5 {
            input.push(job(&format!("b{i}"), "B"));
        }
        for i in 0..2 {
            input.push(job(&format!("c{i}"), "C"));
        }

        let output = interleave_by_category(input);
        assert_eq!(output.len(), 12);
        for pair in output.windows(2) {
            assert_ne!(pair[0].category, pair[1].category);
        }
    }

    #[test]
    fn test_interleave_round_robin_order() {
        let input = vec![
            job("a0", "A"),
            job("a1", "A"),
            job("b0", "B"),
            job("c0", "C"),
            job("b1", "B"),
        ];
        let output = interleave_by_category(input);
        // Groups in first-seen order (A, B, C), i-th of each in turn.
        let ids: Vec<&str> = output.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["a0", "b0", "c0", "a1", "b1"]);
    }

    #[test]
    fn test_interleave_empty() {
        assert!(interleave_by_category(Vec::new()).is_empty());
    }

    #[test]
    fn test_priority_sort_stable() {
        let priority = PriorityList::new(["X", "Y"]);
        let mut jobs = vec![job("j0", "Y"), job("j1", "X"), job("j2", "Z"), job("j3", "X")];

        sort_by_priority(&mut jobs, &priority);
        assert_eq!(categories(&jobs), vec!["X", "X", "Y", "Z"]);
        // Ties keep original relative order.
        assert_eq!(jobs[0].id, "j1");
        assert_eq!(jobs[1].id, "j3");
    }

    #[test]
    fn test_priority_sort_with_empty_list_is_noop() {
        let priority = PriorityList::default();
        let mut jobs = vec![job("j0", "B"), job("j1", "A"), job("j2", "C")];
        sort_by_priority(&mut jobs, &priority);
        assert_eq!(categories(&jobs), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_interleave_then_priority_keeps_interleaved_ties() {
        // After interleaving, the stable sort must not reshuffle jobs
        // of equal rank.
        let input = vec![
            job("a0", "A"),
            job("a1", "A"),
            job("b0", "B"),
            job("b1", "B"),
            job("p0", "P"),
        ];
        let mut jobs = interleave_by_category(input);
        sort_by_priority(&mut jobs, &PriorityList::new(["P"]));

        let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        // P first, then the interleaved A/B order unchanged.
        assert_eq!(ids, vec!["p0", "a0", "b0", "a1", "b1"]);
    }

    #[test]
    fn test_rank_lookup() {
        let priority = PriorityList::new(["G01", "G02"]);
        assert_eq!(priority.rank("G01"), 0);
        assert_eq!(priority.rank("G02"), 1);
        assert_eq!(priority.rank("G99"), 2);
        assert_eq!(priority.len(), 2);
        assert!(!priority.is_empty());
    }

    #[test]
    fn test_parse_free_text() {
        let priority = PriorityList::parse("G01, G02\nG03,,\n  ");
        assert_eq!(priority.codes(), &["G01", "G02", "G03"]);
        assert_eq!(priority.rank("G03"), 2);
    }

    #[test]
    fn test_duplicate_code_keeps_first_rank() {
        let priority = PriorityList::new(["G01", "G02", "G01"]);
        assert_eq!(priority.rank("G01"), 0);
    }
}
