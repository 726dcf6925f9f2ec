use crate::types::{
    lookup_result::LookupResult,
    user_session::{FavoriteEntry, SearchHistoryEntry, UserSession},
};

pub const MAX_RECENT_SEARCHES: usize = 5;

/// Records a successful lookup at the front of the recent list, replacing any
/// earlier entry for the same resolved address.
pub fn record_search(session: &mut UserSession, result: &LookupResult, timestamp: String) {
    let entry = SearchHistoryEntry {
        query_text: result.query.clone(),
        resolved_address: result.address.clone(),
        station_name: result.station.name.clone(),
        timestamp,
        user_coordinate: result.user_coordinate,
        station_coordinate: result.station.coordinate,
        distance_miles: result.distance_miles,
    };

    session
        .recent
        .retain(|e| e.resolved_address != entry.resolved_address);
    session.recent.insert(0, entry);
    session.recent.truncate(MAX_RECENT_SEARCHES);
}

pub fn list_recent(session: &UserSession) -> &[SearchHistoryEntry] {
    &session.recent
}

pub fn clear_history(session: &mut UserSession) {
    session.recent.clear();
}

/// Returns false when the address is already a favorite.
pub fn add_favorite(session: &mut UserSession, entry: FavoriteEntry) -> bool {
    if session
        .favorites
        .iter()
        .any(|f| f.resolved_address == entry.resolved_address)
    {
        return false;
    }

    session.favorites.push(entry);
    true
}

/// Returns true when an entry was removed.
pub fn remove_favorite(session: &mut UserSession, address: &str) -> bool {
    let before = session.favorites.len();
    session.favorites.retain(|f| f.resolved_address != address);
    session.favorites.len() != before
}

pub fn list_favorites(session: &UserSession) -> &[FavoriteEntry] {
    &session.favorites
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{coordinate::Coordinate, transit::Station};

    fn lookup(query: &str, address: &str, station: &str) -> LookupResult {
        LookupResult {
            query: query.to_string(),
            address: address.to_string(),
            user_coordinate: Coordinate::new(42.3601, -71.0589),
            station: Station {
                id: format!("place-{}", station.to_lowercase()),
                name: station.to_string(),
                coordinate: Coordinate::new(42.3564, -71.0624),
                wheelchair_accessible: true,
                routes: Vec::new(),
                distance_from_query: None,
            },
            distance_miles: 0.31,
            arrivals: Vec::new(),
        }
    }

    fn favorite(address: &str) -> FavoriteEntry {
        FavoriteEntry {
            resolved_address: address.to_string(),
            user_coordinate: Coordinate::new(42.3601, -71.0589),
            station_name: "Park Street".to_string(),
            added_on: "2024-06-03".to_string(),
        }
    }

    #[test]
    fn same_address_is_replaced_and_moved_to_front() {
        let mut session = UserSession::default();

        let first = lookup("city hall", "1 City Hall Sq", "Government Center");
        record_search(&mut session, &first, "t1".into());
        record_search(&mut session, &lookup("fenway", "4 Jersey St", "Kenmore"), "t2".into());
        record_search(&mut session, &lookup("City Hall", "1 City Hall Sq", "State"), "t3".into());

        let recent = list_recent(&session);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].resolved_address, "1 City Hall Sq");
        assert_eq!(recent[0].query_text, "City Hall");
        assert_eq!(recent[0].station_name, "State");
        assert_eq!(recent[0].timestamp, "t3");
        assert_eq!(recent[1].resolved_address, "4 Jersey St");
    }

    #[test]
    fn history_is_capped_with_oldest_evicted() {
        let mut session = UserSession::default();

        for i in 0..6 {
            record_search(
                &mut session,
                &lookup(&format!("q{}", i), &format!("addr {}", i), "Park Street"),
                format!("t{}", i),
            );
        }

        let addresses = list_recent(&session)
            .iter()
            .map(|e| e.resolved_address.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            addresses,
            vec!["addr 5", "addr 4", "addr 3", "addr 2", "addr 1"]
        );
    }

    #[test]
    fn clear_history_keeps_favorites() {
        let mut session = UserSession::default();
        record_search(&mut session, &lookup("q", "addr", "Park Street"), "t".into());
        add_favorite(&mut session, favorite("addr"));

        clear_history(&mut session);

        assert!(list_recent(&session).is_empty());
        assert_eq!(list_favorites(&session).len(), 1);
    }

    #[test]
    fn duplicate_favorite_is_rejected() {
        let mut session = UserSession::default();

        assert!(add_favorite(&mut session, favorite("1 City Hall Sq")));
        let before = session.favorites.clone();

        let mut duplicate = favorite("1 City Hall Sq");
        duplicate.station_name = "State".to_string();
        assert!(!add_favorite(&mut session, duplicate));

        assert_eq!(list_favorites(&session), before.as_slice());
    }

    #[test]
    fn remove_favorite_reports_whether_removed() {
        let mut session = UserSession::default();
        add_favorite(&mut session, favorite("1 City Hall Sq"));
        add_favorite(&mut session, favorite("4 Jersey St"));

        assert!(!remove_favorite(&mut session, "700 Boylston St"));
        assert_eq!(list_favorites(&session).len(), 2);

        assert!(remove_favorite(&mut session, "1 City Hall Sq"));
        assert_eq!(list_favorites(&session).len(), 1);
        assert_eq!(list_favorites(&session)[0].resolved_address, "4 Jersey St");
    }
}
