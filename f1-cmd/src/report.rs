//! Text and CSV reports over a season results file.
//!
//! The dataset is loaded through the same candidate loop the dashboard uses,
//! so a file that reports cleanly here will also load in the browser.

use f1_season::loader::{load_corpus, Source};
use f1_season::summary::format_points;
use f1_season::{race_code, Corpus, DashboardError, DashboardView, SeasonIndex, Selection, SourceError};
use log::{info, warn};
use serde::Serialize;
use std::io::Write;

/// Reads dataset locations from disk, or over HTTP for `http(s)://` URLs.
#[derive(Debug, Clone)]
pub struct NativeSource {
    client: reqwest::Client,
}

impl NativeSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

impl Source for NativeSource {
    async fn fetch(&self, location: &str) -> Result<String, SourceError> {
        let transport = |message: String| SourceError::Transport {
            location: location.to_string(),
            message,
        };

        if !is_url(location) {
            return tokio::fs::read_to_string(location)
                .await
                .map_err(|e| transport(e.to_string()));
        }

        let response = self
            .client
            .get(location)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| transport(e.to_string()))
    }
}

/// The dashboard view a report prints.
///
/// Starts from the dashboard's initial selection. An unknown competitor is
/// kept (its series is simply empty); the cutoff is clamped into the season.
pub fn report_view(
    corpus: Corpus,
    competitor: Option<&str>,
    cutoff: Option<u32>,
) -> Result<(SeasonIndex, DashboardView), DashboardError> {
    let index = SeasonIndex::new(corpus);
    let mut selection = Selection::initial(&index).ok_or(DashboardError::EmptyDataset)?;

    if let Some(competitor) = competitor {
        if !index.contains(competitor) {
            warn!("{} does not appear in the data", competitor);
        }
        selection = selection.with_competitor(competitor);
    }

    if let (Some(cutoff), Some(min), Some(max)) = (cutoff, index.min_round(), index.max_round()) {
        let clamped = cutoff.clamp(min, max);
        if clamped != cutoff {
            warn!("Cutoff {} is outside rounds {}-{}; using {}", cutoff, min, max, clamped);
        }
        selection = selection.with_cutoff(clamped);
    }

    let view = DashboardView::compute(&index, selection);
    Ok((index, view))
}

/// Per-round table for the selected driver followed by the standings table.
pub fn write_text_report<W: Write>(
    w: &mut W,
    index: &SeasonIndex,
    view: &DashboardView,
) -> std::io::Result<()> {
    let selection = &view.selection;
    writeln!(w, "{} through round {}", selection.competitor, selection.cutoff)?;
    writeln!(w)?;

    if view.series.is_empty() {
        writeln!(w, "  No results.")?;
    } else {
        writeln!(w, "{:>5}  {:<4} {:<28} {:>6} {:>4}", "Round", "Code", "Race", "Pts", "Pos")?;
        for r in &view.series {
            writeln!(
                w,
                "{:>5}  {:<4} {:<28} {:>6} {:>4}",
                r.round,
                race_code(&r.race),
                r.race,
                format_points(r.points),
                format!("P{}", r.position)
            )?;
        }
    }

    writeln!(w)?;
    match &view.summary {
        Some(s) => writeln!(
            w,
            "Total {} · Avg {} · Best {} · Worst {}",
            format_points(s.total),
            s.average,
            format_points(s.best),
            format_points(s.worst)
        )?,
        None => writeln!(w, "Total 0 · Avg {}", view.hero.average)?,
    }

    writeln!(w)?;
    writeln!(w, "Cumulative standings")?;
    let header: Vec<String> = view
        .standings
        .rounds
        .iter()
        .map(|&round| format!("{:>6}", race_code(index.race_name(round))))
        .collect();
    writeln!(w, "{:<20}{}", "", header.join(""))?;
    for (driver, _) in view.standings.leaderboard() {
        let totals = view.standings.totals_for(driver).unwrap_or_default();
        let cells: Vec<String> = totals
            .iter()
            .map(|&t| format!("{:>6}", format_points(t)))
            .collect();
        writeln!(w, "{:<20}{}", driver, cells.join(""))?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct StandingsRow<'a> {
    round: u32,
    race: &'a str,
    code: String,
    driver: &'a str,
    total: f64,
}

/// Cumulative standings in long form: one row per (round, driver).
pub fn write_standings_csv<W: Write>(
    w: W,
    index: &SeasonIndex,
    view: &DashboardView,
) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(w);
    for (i, &round) in view.standings.rounds.iter().enumerate() {
        let race = index.race_name(round);
        for series in &view.standings.series {
            writer.serialize(StandingsRow {
                round,
                race,
                code: race_code(race),
                driver: &series.driver,
                total: series.totals[i],
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub async fn run_report(
    data: &[String],
    competitor: Option<&str>,
    cutoff: Option<u32>,
    csv: bool,
) -> anyhow::Result<()> {
    let source = NativeSource::new(crate::fetch::http_client()?);
    let corpus = load_corpus(&source, data).await?;
    info!("Loaded {} records", corpus.len());

    let (index, view) = report_view(corpus, competitor, cutoff)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if csv {
        write_standings_csv(&mut out, &index, &view)?;
    } else {
        write_text_report(&mut out, &index, &view)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use f1_season::loader::DEFAULT_CANDIDATES;
    use f1_season::{LoadError, ResultRecord};

    const SEASON_FILE: &str = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../chart-season-standings/public/data/races_2025.json"
    );

    fn native_source() -> NativeSource {
        NativeSource::new(crate::fetch::http_client().unwrap())
    }

    fn two_rounds() -> Corpus {
        Corpus::from(vec![
            ResultRecord::new(1, "Bahrain GP", "Max Verstappen", 25.0, 1),
            ResultRecord::new(1, "Bahrain GP", "Lando Norris", 18.0, 2),
            ResultRecord::new(2, "Saudi Arabian GP", "Max Verstappen", 25.0, 1),
        ])
    }

    #[test]
    fn default_view_is_first_driver_at_last_round() {
        let (_, view) = report_view(two_rounds(), None, None).unwrap();
        assert_eq!(view.selection.competitor, "Max Verstappen");
        assert_eq!(view.selection.cutoff, 2);
        assert_eq!(view.hero.total, 50.0);
    }

    #[test]
    fn cutoff_is_clamped() {
        let (_, view) = report_view(two_rounds(), Some("Lando Norris"), Some(9)).unwrap();
        assert_eq!(view.selection.cutoff, 2);
        assert_eq!(view.standings.totals_for("Lando Norris"), Some(&[18.0, 18.0][..]));
    }

    #[test]
    fn empty_corpus_is_an_error() {
        let err = report_view(Corpus::default(), None, None).unwrap_err();
        assert!(matches!(err, DashboardError::EmptyDataset));
    }

    #[test]
    fn unknown_competitor_reports_no_results() {
        let (index, view) = report_view(two_rounds(), Some("Oscar Piastri"), None).unwrap();
        assert!(view.series.is_empty());

        let mut out = Vec::new();
        write_text_report(&mut out, &index, &view).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Oscar Piastri through round 2"));
        assert!(text.contains("No results."));
        assert!(text.contains("Total 0 · Avg 0.0"));
    }

    #[test]
    fn text_report_lists_rounds_and_leaderboard() {
        let (index, view) = report_view(two_rounds(), Some("Lando Norris"), None).unwrap();
        let mut out = Vec::new();
        write_text_report(&mut out, &index, &view).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("BAH  Bahrain GP"));
        assert!(text.contains("Total 18 · Avg 18.0 · Best 18 · Worst 18"));
        let verstappen = text.find("Max Verstappen     ").unwrap();
        let norris = text.rfind("Lando Norris").unwrap();
        assert!(verstappen < norris, "leader printed first:\n{}", text);
    }

    #[test]
    fn csv_has_one_row_per_round_and_driver() {
        let (index, view) = report_view(two_rounds(), None, None).unwrap();
        let mut out = Vec::new();
        write_standings_csv(&mut out, &index, &view).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "round,race,code,driver,total");
        assert_eq!(lines.len(), 1 + 2 * 2);
        assert!(lines.contains(&"1,Bahrain GP,BAH,Lando Norris,18.0"));
        assert!(lines.contains(&"2,Saudi Arabian GP,SAU,Lando Norris,18.0"));
        assert!(lines.contains(&"2,Saudi Arabian GP,SAU,Max Verstappen,50.0"));
    }

    #[tokio::test]
    async fn loads_season_file_after_missing_candidate() {
        let candidates = ["does/not/exist.json", SEASON_FILE];
        let corpus = load_corpus(&native_source(), &candidates[..])
            .await
            .unwrap();
        let (_, view) = report_view(corpus, Some("Lando Norris"), None).unwrap();
        assert_eq!(view.selection.cutoff, 10);
        assert_eq!(view.standings.totals_for("Lando Norris").and_then(|t| t.last()), Some(&167.0));
    }

    #[tokio::test]
    async fn missing_files_fail_to_load() {
        let candidates = ["does/not/exist.json", "neither/does/this.json"];
        let err = load_corpus(&native_source(), &candidates[..])
            .await
            .unwrap_err();
        match err {
            LoadError::AllCandidatesFailed(SourceError::Transport { location, .. }) => {
                assert_eq!(location, "neither/does/this.json")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn only_http_schemes_are_urls() {
        assert!(is_url("https://example.com/races_2025.json"));
        assert!(!is_url(DEFAULT_CANDIDATES[0]));
    }
}
