use chrono::Month;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One monthly observation: the offset from the base temperature for a given year and month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub year: i32,
    pub month: u32,
    pub variance: f64,
}

impl MonthlyRecord {
    pub fn absolute_temp(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }

    /// Zero-based month, `None` when the source month is outside 1..=12.
    pub fn month_index(&self) -> Option<usize> {
        (1..=12).contains(&self.month).then(|| self.month as usize - 1)
    }

    pub fn month_name(&self) -> Option<&'static str> {
        month_name(self.month)
    }
}

pub fn month_name(month: u32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    Month::try_from(month).ok().map(|m| m.name())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperatureDataset {
    pub base_temperature: f64,
    pub records: Arc<[MonthlyRecord]>,
}

impl TemperatureDataset {
    pub fn new(base_temperature: f64, records: Vec<MonthlyRecord>) -> Self {
        Self {
            base_temperature,
            records: records.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn year_span(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }
}

/// Wire shape of the published dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetPayload {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyRecord>,
}

impl From<DatasetPayload> for TemperatureDataset {
    fn from(payload: DatasetPayload) -> Self {
        TemperatureDataset::new(payload.base_temperature, payload.monthly_variance)
    }
}
