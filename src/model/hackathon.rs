use serde::{Deserialize, Serialize};

/// A single hackathon entry, shown as a card and expandable into a detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonListing {
    pub title: String,
    pub time_left: String,
    pub location: String,
    pub prize: String,
    pub participants: String,
    pub description: String,
    pub tags: Vec<String>,
}
