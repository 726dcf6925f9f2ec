use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// MBTA route type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RouteType {
    LightRail,
    HeavyRail,
    CommuterRail,
    Bus,
    Ferry,
}

impl RouteType {
    pub fn code(self) -> u8 {
        match self {
            RouteType::LightRail => 0,
            RouteType::HeavyRail => 1,
            RouteType::CommuterRail => 2,
            RouteType::Bus => 3,
            RouteType::Ferry => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(RouteType::LightRail),
            1 => Some(RouteType::HeavyRail),
            2 => Some(RouteType::CommuterRail),
            3 => Some(RouteType::Bus),
            4 => Some(RouteType::Ferry),
            _ => None,
        }
    }

    /// Parses a form value. Accepts numeric codes as well as names; `subway`
    /// covers both light and heavy rail.
    pub fn parse_form_value(value: &str) -> Option<Vec<Self>> {
        let value = value.trim().to_ascii_lowercase();

        if let Ok(code) = value.parse::<u8>() {
            return RouteType::from_code(code).map(|t| vec![t]);
        }

        match value.as_str() {
            "subway" => Some(vec![RouteType::LightRail, RouteType::HeavyRail]),
            "light_rail" => Some(vec![RouteType::LightRail]),
            "heavy_rail" => Some(vec![RouteType::HeavyRail]),
            "commuter_rail" => Some(vec![RouteType::CommuterRail]),
            "bus" => Some(vec![RouteType::Bus]),
            "ferry" => Some(vec![RouteType::Ferry]),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteColor {
    Red,
    Orange,
    Blue,
    Green,
    Silver,
    CommuterRail,
    Bus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub display_name: String,
    pub short_code: String,
    pub color: RouteColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub coordinate: Coordinate,
    pub wheelchair_accessible: bool,
    pub routes: Vec<Route>,
    pub distance_from_query: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalPrediction {
    pub arrival_time_display: String,
    pub route_name: String,
    pub route_color: RouteColor,
    pub destination: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_form_values() {
        assert_eq!(
            RouteType::parse_form_value("subway"),
            Some(vec![RouteType::LightRail, RouteType::HeavyRail])
        );
        assert_eq!(
            RouteType::parse_form_value(" 2 "),
            Some(vec![RouteType::CommuterRail])
        );
        assert_eq!(RouteType::parse_form_value("Ferry"), Some(vec![RouteType::Ferry]));
        assert_eq!(RouteType::parse_form_value("7"), None);
        assert_eq!(RouteType::parse_form_value("monorail"), None);
    }

    #[test]
    fn route_color_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&RouteColor::CommuterRail).unwrap(),
            "\"commuter-rail\""
        );
        assert_eq!(serde_json::to_string(&RouteColor::Bus).unwrap(), "\"bus\"");
    }
}
