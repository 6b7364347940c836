use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use pto_optimizer::PlannerConfig;
use pto_time::{Date, Holiday, HolidayCategory};

/// One entry of the holiday file, as emitted by holiday libraries.
#[derive(Debug, Deserialize)]
struct HolidayRecord {
    date: String,
    name: String,
    #[serde(rename = "type")]
    category: Option<String>,
}

impl HolidayRecord {
    /// Convert to a [`Holiday`]; `Ok(None)` for categories this tool does
    /// not know.
    fn into_holiday(self) -> Result<Option<Holiday>> {
        // "2025-12-25", "2025-12-25 00:00:00" and "2025-12-25T00:00:00" all
        // name the same day.
        let day = self
            .date
            .split(|c: char| c == ' ' || c == 'T')
            .next()
            .unwrap_or_default();
        let date: Date = day
            .parse()
            .with_context(|| format!("holiday {:?} has an invalid date {:?}", self.name, self.date))?;
        let category = match self.category.as_deref() {
            None => HolidayCategory::Public,
            Some(raw) => match raw.parse::<HolidayCategory>() {
                Ok(category) => category,
                Err(_) => {
                    warn!(name = %self.name, category = raw, "unknown holiday category, ignoring");
                    return Ok(None);
                }
            },
        };
        Ok(Some(Holiday::new(date, self.name, category)))
    }
}

/// Read a JSON array of holiday records.
pub fn read_holidays(path: &Path) -> Result<Vec<Holiday>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read holiday file {}", path.display()))?;
    let holidays = parse_holidays(&text)
        .with_context(|| format!("failed to parse holiday file {}", path.display()))?;
    debug!(path = %path.display(), count = holidays.len(), "loaded holidays");
    Ok(holidays)
}

fn parse_holidays(text: &str) -> Result<Vec<Holiday>> {
    let records: Vec<HolidayRecord> = serde_json::from_str(text)?;
    let mut holidays = Vec::with_capacity(records.len());
    for record in records {
        if let Some(holiday) = record.into_holiday()? {
            holidays.push(holiday);
        }
    }
    Ok(holidays)
}

/// Read a TOML planner configuration.
pub fn read_config(path: &Path) -> Result<PlannerConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: PlannerConfig = toml::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}
