use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub cuisine: Vec<String>, // non-empty by construction
    pub rating: f64,
    pub cost_for_two: String, // display string, e.g. "₹600" — never computed on
    pub delivery_time: String, // "<min>-<max> min"
    pub image: String,
    #[serde(default)]
    pub offers: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Sort criteria for the restaurant listing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortKey {
    #[default]
    Relevance,
    Rating,
    Time,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Rating => "rating",
            SortKey::Time => "time",
        }
    }

    /// Parses the value attribute of the sort `<select>`. Unknown values
    /// fall back to relevance.
    pub fn from_value(value: &str) -> Self {
        match value {
            "rating" => SortKey::Rating,
            "time" => SortKey::Time,
            _ => SortKey::Relevance,
        }
    }
}
