// src/data.rs
//
// Canonical roster row.
//
// - PlayerRecord: one fully parsed player, created by the extractor and never
//                 mutated afterwards. Field order is the export column order.
// - COLUMNS: header row of every export and of the sample preview.

use serde::{Deserialize, Serialize};

pub const COLUMNS: [&str; 8] = [
    "player_name",
    "team_code",
    "jersey_number",
    "position",
    "height_feet_inches",
    "weight_pounds",
    "college_name",
    "country_name",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_name: String,
    pub team_code: String,
    /// `None` when the source cell is not a plain run of digits.
    pub jersey_number: Option<u32>,
    pub position: String,
    pub height_feet_inches: String,
    pub weight_pounds: String,
    pub college_name: String,
    pub country_name: String,
}

impl PlayerRecord {
    /// Cells in `COLUMNS` order, as shown to humans. A missing jersey is blank.
    pub fn cells(&self) -> [String; 8] {
        [
            self.player_name.clone(),
            self.team_code.clone(),
            self.jersey_number.map(|n| n.to_string()).unwrap_or_default(),
            self.position.clone(),
            self.height_feet_inches.clone(),
            self.weight_pounds.clone(),
            self.college_name.clone(),
            self.country_name.clone(),
        ]
    }
}
