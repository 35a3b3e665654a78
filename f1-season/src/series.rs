//! Per-driver result series up to a cutoff round.

use crate::record::ResultRecord;
use crate::season::SeasonIndex;

/// `driver`'s results for rounds `<= cutoff`, ascending by round.
///
/// An unknown driver yields an empty series. Rounds the driver has no record
/// for are simply absent. When the corpus holds more than one record for the
/// same (driver, round) only the first is kept.
pub fn filtered_series(index: &SeasonIndex, driver: &str, cutoff: u32) -> Vec<ResultRecord> {
    if !index.contains(driver) {
        log::debug!("No results for unknown driver {:?}", driver);
        return Vec::new();
    }

    let mut series: Vec<ResultRecord> = index
        .corpus()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.driver == driver && r.round <= cutoff)
        .filter(|(i, r)| index.is_primary(*i, r))
        .map(|(_, r)| r.clone())
        .collect();

    // sort_by_key is stable, so equal rounds keep corpus order
    series.sort_by_key(|r| r.round);
    series
}
