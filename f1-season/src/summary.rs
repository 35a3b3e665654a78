//! Headline numbers for the hero panel and summary cards.

use crate::record::ResultRecord;
use serde::Serialize;

/// Hero panel figures. Always available, zeroed for an empty series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroStats {
    pub rounds: usize,
    pub total: f64,
    /// Average points per round, one decimal place ("0.0" when empty).
    pub average: String,
}

impl HeroStats {
    pub fn from_series(series: &[ResultRecord]) -> Self {
        let total = total_points(series);
        let average = if series.is_empty() {
            "0.0".to_string()
        } else {
            format!("{:.1}", total / series.len() as f64)
        };
        Self {
            rounds: series.len(),
            total,
            average,
        }
    }
}

/// Summary card figures. Only defined for a non-empty series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub total: f64,
    pub average: String,
    pub best: f64,
    pub worst: f64,
}

impl SeriesSummary {
    pub fn from_series(series: &[ResultRecord]) -> Option<Self> {
        let first = series.first()?.points;
        let total = total_points(series);
        let (best, worst) = series.iter().fold((first, first), |(best, worst), r| {
            (best.max(r.points), worst.min(r.points))
        });
        Some(Self {
            total,
            average: format!("{:.1}", total / series.len() as f64),
            best,
            worst,
        })
    }
}

fn total_points(series: &[ResultRecord]) -> f64 {
    series.iter().map(|r| r.points).sum()
}

/// Points as the dashboard prints them: `18`, `0.5`.
pub fn format_points(points: f64) -> String {
    format!("{}", points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Vec<ResultRecord> {
        vec![
            ResultRecord::new(1, "Bahrain GP", "Lando Norris", 18.0, 2),
            ResultRecord::new(2, "Saudi Arabian GP", "Lando Norris", 12.0, 4),
            ResultRecord::new(3, "Australian GP", "Lando Norris", 25.0, 1),
        ]
    }

    #[test]
    fn hero_for_single_race() {
        let hero = HeroStats::from_series(&series()[..1]);
        assert_eq!(hero.total, 18.0);
        assert_eq!(hero.average, "18.0");
        assert_eq!(hero.rounds, 1);
        assert_eq!(format_points(hero.total), "18");
    }

    #[test]
    fn hero_for_empty_series() {
        let hero = HeroStats::from_series(&[]);
        assert_eq!(hero.total, 0.0);
        assert_eq!(hero.average, "0.0");
        assert_eq!(hero.rounds, 0);
    }

    #[test]
    fn summary_best_and_worst() {
        let summary = SeriesSummary::from_series(&series()).unwrap();
        assert_eq!(summary.total, 55.0);
        assert_eq!(summary.average, "18.3");
        assert_eq!(summary.best, 25.0);
        assert_eq!(summary.worst, 12.0);
    }

    #[test]
    fn summary_needs_results() {
        assert!(SeriesSummary::from_series(&[]).is_none());
    }

    #[test]
    fn fractional_points_print_as_is() {
        assert_eq!(format_points(0.5), "0.5");
        assert_eq!(format_points(0.0), "0");
    }
}
