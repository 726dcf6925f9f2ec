use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationInfo {
    pub name: String,
    pub lines: Vec<String>,
    pub wheelchair_accessible: bool,
    pub description: String,
}

struct StationRecord {
    name: &'static str,
    lines: &'static [&'static str],
    wheelchair_accessible: bool,
    description: &'static str,
}

const STATIONS: &[StationRecord] = &[
    StationRecord {
        name: "Park Street",
        lines: &["Red", "Green"],
        wheelchair_accessible: true,
        description: "Transfer point between the Red and Green Lines on Boston Common.",
    },
    StationRecord {
        name: "Downtown Crossing",
        lines: &["Red", "Orange", "Silver"],
        wheelchair_accessible: true,
        description: "Shopping district hub connecting the Red and Orange Lines.",
    },
    StationRecord {
        name: "Government Center",
        lines: &["Green", "Blue"],
        wheelchair_accessible: true,
        description: "Next to City Hall Plaza, transfer between the Green and Blue Lines.",
    },
    StationRecord {
        name: "State",
        lines: &["Orange", "Blue"],
        wheelchair_accessible: true,
        description: "Financial District stop beneath the Old State House.",
    },
    StationRecord {
        name: "South Station",
        lines: &["Red", "Silver", "Commuter Rail"],
        wheelchair_accessible: true,
        description: "Intercity, commuter rail and bus terminal.",
    },
    StationRecord {
        name: "North Station",
        lines: &["Orange", "Green", "Commuter Rail"],
        wheelchair_accessible: true,
        description: "Commuter rail terminal under TD Garden.",
    },
    StationRecord {
        name: "Harvard",
        lines: &["Red"],
        wheelchair_accessible: true,
        description: "Harvard Square in Cambridge.",
    },
    StationRecord {
        name: "Kenmore",
        lines: &["Green"],
        wheelchair_accessible: true,
        description: "Closest subway stop to Fenway Park.",
    },
];

impl StationRecord {
    fn to_info(&self) -> StationInfo {
        StationInfo {
            name: self.name.to_string(),
            lines: self.lines.iter().map(|l| l.to_string()).collect(),
            wheelchair_accessible: self.wheelchair_accessible,
            description: self.description.to_string(),
        }
    }
}

/// Case-insensitive lookup. Unknown names get a placeholder record carrying
/// the requested name.
pub fn station_info(name: &str) -> StationInfo {
    let wanted = name.trim();

    STATIONS
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(wanted))
        .map(StationRecord::to_info)
        .unwrap_or_else(|| StationInfo {
            name: wanted.to_string(),
            lines: Vec::new(),
            wheelchair_accessible: false,
            description: "Unknown station".to_string(),
        })
}
