//! Season results fetcher for Ergast-compatible APIs.
//!
//! Walks `{base}/{season}/{round}/results.json` from round 1 upward and keeps
//! the classified results of the tracked drivers. The first round with no
//! tracked rows ends the season.
//!
//! # Response shape
//!
//! ```json
//! {"MRData": {"RaceTable": {"Races": [{
//!     "raceName": "Bahrain Grand Prix",
//!     "Results": [{"position": "1", "points": "25", "Driver": {"driverId": "max_verstappen"}}]
//! }]}}}
//! ```
//!
//! `position` and `points` are strings in the API.

use anyhow::{bail, Context};
use f1_season::ResultRecord;
use log::{info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.jolpi.ca/ergast/f1";
pub const DEFAULT_SEASON: u32 = 2025;

const USER_AGENT: &str = "Mozilla/5.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const MAX_TRIES: u32 = 3;
const RETRY_STEP_MILLIS: u64 = 800;
/// No championship has come close to this many rounds.
const MAX_ROUNDS: u32 = 40;

/// API driver id and the display name written to the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedDriver {
    pub id: String,
    pub name: String,
}

impl TrackedDriver {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Parses `driverId=Display Name`.
impl FromStr for TrackedDriver {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, name) = s
            .split_once('=')
            .ok_or_else(|| format!("expected driverId=Display Name, got {:?}", s))?;
        let (id, name) = (id.trim(), name.trim());
        if id.is_empty() || name.is_empty() {
            return Err(format!("driver id and name must be non-empty: {:?}", s));
        }
        Ok(Self::new(id, name))
    }
}

pub fn default_drivers() -> Vec<TrackedDriver> {
    vec![
        TrackedDriver::new("norris", "Lando Norris"),
        TrackedDriver::new("max_verstappen", "Max Verstappen"),
    ]
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultsResponse {
    #[serde(rename = "MRData", default)]
    mr_data: MrData,
}

#[derive(Debug, Default, Deserialize)]
struct MrData {
    #[serde(rename = "RaceTable", default)]
    race_table: RaceTable,
}

#[derive(Debug, Default, Deserialize)]
struct RaceTable {
    #[serde(rename = "Races", default)]
    races: Vec<Race>,
}

#[derive(Debug, Deserialize)]
struct Race {
    #[serde(rename = "raceName")]
    race_name: Option<String>,
    #[serde(rename = "Results", default)]
    results: Vec<RaceResult>,
}

#[derive(Debug, Deserialize)]
struct RaceResult {
    position: Option<String>,
    points: Option<String>,
    #[serde(rename = "Driver")]
    driver: Option<ApiDriver>,
}

#[derive(Debug, Deserialize)]
struct ApiDriver {
    #[serde(rename = "driverId")]
    driver_id: String,
}

pub fn results_url(base_url: &str, season: u32, round: u32) -> String {
    format!(
        "{}/{}/{}/results.json",
        base_url.trim_end_matches('/'),
        season,
        round
    )
}

/// Dataset rows for the tracked drivers in one round's response.
///
/// Empty when the round has no race yet. Missing points count as 0.0; a row
/// without a usable position (or with negative points) is skipped so the
/// written file always loads.
pub fn tracked_rows(
    season: u32,
    round: u32,
    response: &ResultsResponse,
    drivers: &[TrackedDriver],
) -> Vec<ResultRecord> {
    let Some(race) = response.mr_data.race_table.races.first() else {
        return Vec::new();
    };
    let race_name = race
        .race_name
        .clone()
        .unwrap_or_else(|| format!("Round {}", round));

    race.results
        .iter()
        .filter_map(|result| {
            let id = &result.driver.as_ref()?.driver_id;
            let tracked = drivers.iter().find(|d| &d.id == id)?;
            let position = parse_or_zero::<u32>(result.position.as_deref());
            let points = parse_or_zero::<f64>(result.points.as_deref());
            let mut record = ResultRecord::new(round, &race_name, &tracked.name, points, position);
            record.season = Some(season);
            if let Some(reason) = record.range_violation() {
                warn!("Skipping {} in round {}: {}", tracked.name, round, reason);
                return None;
            }
            Some(record)
        })
        .collect()
}

fn parse_or_zero<T: FromStr + Default>(value: Option<&str>) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or_default()
}

/// HTTP client shared by the fetch and report commands.
pub(crate) fn http_client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
}

/// GET one results page, retrying with a growing pause.
async fn fetch_results(client: &Client, url: &str) -> anyhow::Result<ResultsResponse> {
    let mut last_error = None;

    for attempt in 1..=MAX_TRIES {
        let outcome = async {
            client
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .json::<ResultsResponse>()
                .await
        }
        .await;

        match outcome {
            Ok(response) => return Ok(response),
            Err(e) => {
                warn!("Attempt {}/{}: Request failed for {}: {}", attempt, MAX_TRIES, url, e);
                last_error = Some(e);
            }
        }

        if attempt < MAX_TRIES {
            let sleep_millis = RETRY_STEP_MILLIS * u64::from(attempt);
            info!("Sleeping for {} milliseconds before retry for {}", sleep_millis, url);
            tokio::time::sleep(Duration::from_millis(sleep_millis)).await;
        }
    }

    match last_error {
        Some(e) => Err(e).with_context(|| format!("Request failed after {} tries: {}", MAX_TRIES, url)),
        None => bail!("Request failed: {}", url),
    }
}

/// Fetch every round of `season` and write the tracked drivers' results to `out`.
pub async fn run_fetch(
    season: u32,
    out: &str,
    base_url: &str,
    drivers: &[TrackedDriver],
) -> anyhow::Result<()> {
    let client = http_client()?;

    info!(
        "Fetching {} season results for {} drivers from {}",
        season,
        drivers.len(),
        base_url
    );

    let mut rows: Vec<ResultRecord> = Vec::new();
    for round in 1..=MAX_ROUNDS {
        let url = results_url(base_url, season, round);
        let response = fetch_results(&client, &url).await?;
        let round_rows = tracked_rows(season, round, &response, drivers);
        if round_rows.is_empty() {
            info!("Round {} has no results for tracked drivers; stopping", round);
            break;
        }
        info!("Round {}: {} rows ({})", round, round_rows.len(), round_rows[0].race);
        rows.extend(round_rows);
    }

    if rows.is_empty() {
        bail!(
            "No results for season {} (checked {} from round 1)",
            season,
            base_url
        );
    }

    let json = serde_json::to_string_pretty(&rows)?;
    std::fs::write(out, json).with_context(|| format!("Failed to write {}", out))?;

    let names: Vec<&str> = drivers.iter().map(|d| d.name.as_str()).collect();
    info!("Wrote {} with {} rows ({})", out, rows.len(), names.join(", "));
    Ok(())
}
