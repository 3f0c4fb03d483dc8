// src/models/analysis.rs
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Full payload returned by one successful upload.
///
/// Every top-level section may be missing or `null`; a missing section means
/// "nothing to render" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default)]
    pub averages: Option<Averages>,
    /// Category name -> count, kept in the order the server sent it.
    #[serde(default)]
    pub type_distribution: Option<IndexMap<String, u64>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rows: Vec<EquipmentRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_equipment: u64,
    pub avg_flowrate: f64,
    pub max_pressure: f64,
    /// (min, max)
    pub temperature_range: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    pub flowrate: f64,
    pub pressure: f64,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub flowrate: f64,
    pub pressure: f64,
    pub temperature: f64,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
