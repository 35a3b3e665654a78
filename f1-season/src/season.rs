//! Season index: drivers, rounds, and per-(driver, round) lookups.
//!
//! Built once after the corpus loads and never mutated. Duplicate
//! `(driver, round)` records are resolved first-wins everywhere.

use crate::record::{Corpus, ResultRecord};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Read-only lookups derived from a [`Corpus`].
#[derive(Debug, Clone)]
pub struct SeasonIndex {
    corpus: Corpus,
    competitors: Vec<String>,
    rounds: Vec<u32>,
    race_names: BTreeMap<u32, String>,
    /// driver -> round -> position in the corpus
    by_driver_round: HashMap<String, HashMap<u32, usize>>,
}

impl SeasonIndex {
    pub fn new(corpus: Corpus) -> Self {
        let mut competitors = Vec::new();
        let mut seen_drivers = HashSet::new();
        let mut race_names = BTreeMap::new();
        let mut by_driver_round: HashMap<String, HashMap<u32, usize>> = HashMap::new();
        let mut duplicates = 0usize;

        for (i, record) in corpus.iter().enumerate() {
            if seen_drivers.insert(record.driver.clone()) {
                competitors.push(record.driver.clone());
            }
            race_names
                .entry(record.round)
                .or_insert_with(|| record.race.clone());

            let rounds = by_driver_round.entry(record.driver.clone()).or_default();
            if rounds.contains_key(&record.round) {
                duplicates += 1;
                log::warn!(
                    "Duplicate result for {} in round {}; keeping the first",
                    record.driver,
                    record.round
                );
            } else {
                rounds.insert(record.round, i);
            }
        }

        // BTreeMap keys are already in ascending numeric order
        let rounds: Vec<u32> = race_names.keys().copied().collect();

        log::info!(
            "Indexed {} results: {} drivers, {} rounds, {} duplicates skipped",
            corpus.len(),
            competitors.len(),
            rounds.len(),
            duplicates
        );

        Self {
            corpus,
            competitors,
            rounds,
            race_names,
            by_driver_round,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Distinct drivers in first-seen order.
    pub fn competitors(&self) -> &[String] {
        &self.competitors
    }

    /// Distinct rounds, ascending.
    pub fn rounds(&self) -> &[u32] {
        &self.rounds
    }

    /// Rounds up to and including `cutoff`.
    pub fn rounds_through(&self, cutoff: u32) -> &[u32] {
        let end = self.rounds.partition_point(|&r| r <= cutoff);
        &self.rounds[..end]
    }

    pub fn min_round(&self) -> Option<u32> {
        self.rounds.first().copied()
    }

    pub fn max_round(&self) -> Option<u32> {
        self.rounds.last().copied()
    }

    pub fn contains(&self, driver: &str) -> bool {
        self.competitors.iter().any(|c| c == driver)
    }

    /// Name of the first race recorded for `round`, or "" when there is none.
    pub fn race_name(&self, round: u32) -> &str {
        self.race_names.get(&round).map(String::as_str).unwrap_or("")
    }

    /// The first record for `driver` in `round`.
    pub fn record(&self, driver: &str, round: u32) -> Option<&ResultRecord> {
        self.slot(driver, round).map(|i| &self.corpus[i])
    }

    /// True when `record` is the one the index keeps for its (driver, round).
    pub(crate) fn is_primary(&self, position_in_corpus: usize, record: &ResultRecord) -> bool {
        self.slot(&record.driver, record.round) == Some(position_in_corpus)
    }

    fn slot(&self, driver: &str, round: u32) -> Option<usize> {
        self.by_driver_round.get(driver)?.get(&round).copied()
    }
}

/// Short chart label for a race: letters only, uppercased, first three.
///
/// `"Bahrain GP"` becomes `"BAH"`; an empty name gives an empty code.
pub fn race_code(race_name: &str) -> String {
    race_name
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(3)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use proptest::prelude::*;

    #[test]
    fn competitors_and_rounds_for_opening_round() {
        let index = SeasonIndex::new(fixtures::opening_round());
        assert_eq!(index.competitors(), ["Max Verstappen", "Lando Norris"]);
        assert_eq!(index.rounds(), [1]);
    }

    #[test]
    fn rounds_sort_numerically_not_lexically() {
        let index = SeasonIndex::new(fixtures::unordered_season());
        assert_eq!(index.rounds(), [1, 2, 10]);
        assert_eq!(index.min_round(), Some(1));
        assert_eq!(index.max_round(), Some(10));
    }

    #[test]
    fn competitors_keep_first_seen_order() {
        let index = SeasonIndex::new(fixtures::unordered_season());
        assert_eq!(index.competitors(), ["Lando Norris", "Max Verstappen"]);
    }

    #[test]
    fn competitors_are_listed_once_despite_duplicates() {
        let corpus = Corpus::from(vec![
            ResultRecord::new(1, "Bahrain GP", "Lando Norris", 18.0, 2),
            ResultRecord::new(2, "Saudi Arabian GP", "Lando Norris", 12.0, 4),
            ResultRecord::new(2, "Saudi Arabian GP", "Lando Norris", 10.0, 5),
        ]);
        let index = SeasonIndex::new(corpus);
        assert_eq!(index.competitors(), ["Lando Norris"]);
    }

    #[test]
    fn rounds_through_cutoff() {
        let index = SeasonIndex::new(fixtures::unordered_season());
        assert_eq!(index.rounds_through(2), [1, 2]);
        assert_eq!(index.rounds_through(9), [1, 2]);
        assert_eq!(index.rounds_through(10), [1, 2, 10]);
        assert!(index.rounds_through(0).is_empty());
    }

    #[test]
    fn race_name_lookup_is_lenient() {
        let index = SeasonIndex::new(fixtures::two_rounds_with_gap());
        assert_eq!(index.race_name(2), "Saudi Arabian GP");
        assert_eq!(index.race_name(7), "");
    }

    #[test]
    fn duplicate_records_resolve_first_wins() {
        let corpus = Corpus::from(vec![
            ResultRecord::new(1, "Bahrain GP", "Lando Norris", 18.0, 2),
            ResultRecord::new(1, "Bahrain Grand Prix", "Lando Norris", 25.0, 1),
        ]);
        let index = SeasonIndex::new(corpus);
        let record = index.record("Lando Norris", 1).unwrap();
        assert_eq!(record.points, 18.0);
        assert_eq!(index.race_name(1), "Bahrain GP");
    }

    #[test]
    fn same_round_for_different_drivers_is_kept_per_driver() {
        let index = SeasonIndex::new(fixtures::opening_round());
        let corpus = index.corpus().clone();
        assert!(corpus.iter().enumerate().all(|(i, r)| index.is_primary(i, r)));
        assert_eq!(index.record("Max Verstappen", 1).map(|r| r.points), Some(25.0));
        assert_eq!(index.record("Lando Norris", 1).map(|r| r.points), Some(18.0));
    }

    #[test]
    fn missing_record_is_none() {
        let index = SeasonIndex::new(fixtures::two_rounds_with_gap());
        assert!(index.record("Lando Norris", 2).is_none());
        assert!(index.record("Oscar Piastri", 1).is_none());
        assert!(!index.contains("Oscar Piastri"));
    }

    #[test]
    fn race_code_examples() {
        assert_eq!(race_code("Bahrain GP"), "BAH");
        assert_eq!(race_code("São Paulo Grand Prix"), "SOP");
        assert_eq!(race_code("Emilia-Romagna"), "EMI");
        assert_eq!(race_code("70th Anniversary"), "THA");
        assert_eq!(race_code("GP"), "GP");
        assert_eq!(race_code(""), "");
        assert_eq!(race_code("2025"), "");
    }

    proptest! {
        #[test]
        fn race_code_is_idempotent(name in ".{0,24}") {
            let once = race_code(&name);
            prop_assert_eq!(race_code(&once), once.clone());
            prop_assert!(once.len() <= 3);
            prop_assert!(once.chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
