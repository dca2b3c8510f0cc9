//! Stops response DTOs (JSON:API shaped).

use serde::Deserialize;
use serde_json::Value;

/// Top-level `/stops` response.
#[derive(Debug, Deserialize)]
pub struct StopsResponse {
    pub data: Option<Vec<Option<StopResource>>>,
}

/// One stop resource.
#[derive(Debug, Deserialize)]
pub struct StopResource {
    pub attributes: Option<StopAttributes>,
}

/// The attributes we read from a stop.
#[derive(Debug, Deserialize)]
pub struct StopAttributes {
    pub name: Option<String>,
    /// Kept raw: anything that is not a whole number counts as unrecognised.
    pub wheelchair_boarding: Option<Value>,
}

impl StopAttributes {
    /// The boarding code, if it is a whole number (`1` and `1.0` alike).
    pub fn boarding_code(&self) -> Option<i64> {
        let value = self.wheelchair_boarding.as_ref()?;
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        })
    }
}
