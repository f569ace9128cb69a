//! Reverse-geocode results.

use serde_json::Value;

use crate::json;
use crate::models::geo::Place;

/// The places matching a reverse-geocode lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReverseGeocodeResults {
    /// The matching places, most specific first
    pub places: Vec<Place>,
}

impl ReverseGeocodeResults {
    /// Parse a `geo/reverse_geocode` response body; the places live under
    /// the `result` sub-object.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        let places = obj
            .get("result")
            .map(|result| json::array(result, "places", Place::parse))
            .unwrap_or_default();

        Some(Self { places })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn places_come_out_of_the_result_envelope() {
        let results = ReverseGeocodeResults::parse(&json!({
            "query": { "type": "reverse_geocode" },
            "result": {
                "places": [
                    { "id": "5a110d312052166f", "full_name": "San Francisco, CA", "place_type": "city" },
                    { "id": "fbd6d2f5a4e4a15e", "full_name": "California, US", "place_type": "admin" }
                ]
            }
        }))
        .unwrap();

        assert_eq!(results.places.len(), 2);
        assert_eq!(results.places[0].place_type, "city");
    }

    #[test]
    fn missing_result_yields_no_places() {
        assert!(ReverseGeocodeResults::parse(&json!({})).unwrap().places.is_empty());
    }
}
