use super::types::mbta_resource::RouteResource;
use crate::types::transit::{Route, RouteColor, RouteType};

const LINE_COLORS: &[(&str, RouteColor)] = &[
    ("Red", RouteColor::Red),
    ("Orange", RouteColor::Orange),
    ("Green-B", RouteColor::Green),
    ("Green-C", RouteColor::Green),
    ("Green-D", RouteColor::Green),
    ("Green-E", RouteColor::Green),
    ("Blue", RouteColor::Blue),
    // Mattapan trolley is signed as part of the Red Line
    ("Mattapan", RouteColor::Red),
    ("SL1", RouteColor::Silver),
    ("SL2", RouteColor::Silver),
    ("SL3", RouteColor::Silver),
    ("SL4", RouteColor::Silver),
    ("SL5", RouteColor::Silver),
];

fn line_color(code: &str) -> Option<RouteColor> {
    LINE_COLORS
        .iter()
        .find(|(line, _)| *line == code)
        .map(|(_, color)| *color)
}

pub fn route_color(short_code: &str, route_type: Option<RouteType>) -> RouteColor {
    if let Some(color) = line_color(short_code) {
        return color;
    }

    match route_type {
        Some(RouteType::CommuterRail) => RouteColor::CommuterRail,
        _ => RouteColor::Bus,
    }
}

pub fn route_from_resource(resource: &RouteResource) -> Route {
    let short_code = non_empty(resource.attributes.short_name.as_deref())
        .unwrap_or(&resource.id)
        .to_string();
    let display_name = non_empty(resource.attributes.long_name.as_deref())
        .unwrap_or(&short_code)
        .to_string();
    let route_type = resource.attributes.route_type.and_then(RouteType::from_code);

    // Green Line branches carry a one-letter short name; their id is the table key.
    let color = match line_color(&resource.id) {
        Some(color) if line_color(&short_code).is_none() => color,
        _ => route_color(&short_code, route_type),
    };

    Route {
        id: resource.id.clone(),
        color,
        display_name,
        short_code,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
