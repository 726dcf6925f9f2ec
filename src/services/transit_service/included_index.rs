use std::collections::HashMap;

use super::types::mbta_resource::{IncludedResource, RouteResource, TripResource};

/// Lookup table over a side-loaded `included` batch, keyed by resource type
/// and id, so relationship joins are constant-time.
pub struct IncludedIndex<'a> {
    routes: HashMap<&'a str, &'a RouteResource>,
    trips: HashMap<&'a str, &'a TripResource>,
}

impl<'a> IncludedIndex<'a> {
    pub fn new(included: &'a [IncludedResource]) -> Self {
        let mut routes = HashMap::new();
        let mut trips = HashMap::new();

        for resource in included {
            match resource {
                IncludedResource::Route(r) => {
                    routes.insert(r.id.as_str(), r);
                }
                IncludedResource::Trip(t) => {
                    trips.insert(t.id.as_str(), t);
                }
                IncludedResource::Other => {}
            }
        }

        IncludedIndex { routes, trips }
    }

    pub fn route(&self, id: &str) -> Option<&'a RouteResource> {
        self.routes.get(id).copied()
    }

    pub fn trip(&self, id: &str) -> Option<&'a TripResource> {
        self.trips.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_by_type_and_id() {
        let included: Vec<IncludedResource> = serde_json::from_str(
            r#"[
                {"type": "route", "id": "Red", "attributes": {"long_name": "Red Line", "type": 1}},
                {"type": "trip", "id": "Red", "attributes": {"headsign": "Alewife"}},
                {"type": "stop", "id": "place-pktrm", "attributes": {"name": "Park Street"}}
            ]"#,
        )
        .unwrap();

        let index = IncludedIndex::new(&included);

        assert_eq!(
            index.route("Red").and_then(|r| r.attributes.long_name.as_deref()),
            Some("Red Line")
        );
        assert_eq!(
            index.trip("Red").and_then(|t| t.attributes.headsign.as_deref()),
            Some("Alewife")
        );
        assert!(index.route("place-pktrm").is_none());
        assert!(index.trip("Orange").is_none());
    }
}
