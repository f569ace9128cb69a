//! Geographic objects: coordinates, bounding boxes and places.

use serde_json::Value;

use crate::json;

/// A geographic point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    /// Latitude of the point
    pub latitude: f64,

    /// Longitude of the point
    pub longitude: f64,
}

impl Coordinates {
    /// Parse a GeoJSON-style object whose `coordinates` array is
    /// `[longitude, latitude]`.
    ///
    /// Twitter writes longitude before latitude, so both parse paths swap
    /// the axes on read.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        let array = obj.get("coordinates").cloned().unwrap_or(Value::Null);
        Some(Self {
            latitude: json::element_f64(&array, 1),
            longitude: json::element_f64(&array, 0),
        })
    }

    /// Parse a bare `[longitude, latitude]` array, as found in the rings of
    /// a bounding box.
    #[must_use]
    pub fn parse_point(array: &Value) -> Option<Self> {
        if !array.is_array() {
            return None;
        }
        Some(Self {
            latitude: json::element_f64(array, 1),
            longitude: json::element_f64(array, 0),
        })
    }

    /// Parse an array of bare points into a polygon ring.
    #[must_use]
    pub fn parse_ring(array: &Value) -> Vec<Self> {
        array
            .as_array()
            .map(|points| points.iter().filter_map(Self::parse_point).collect())
            .unwrap_or_default()
    }
}

/// The bounding box of a place: a list of polygon rings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundingBox {
    /// Geometry type, typically `Polygon`
    pub kind: String,

    /// The polygon rings describing the box
    pub coordinates: Vec<Vec<Coordinates>>,
}

impl BoundingBox {
    /// Parse a `bounding_box` node.
    ///
    /// Geo data is third-party-sourced and optional throughout the API, so a
    /// malformed or missing `coordinates` field yields an empty ring list
    /// rather than an error.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        let rings = obj
            .get("coordinates")
            .and_then(Value::as_array)
            .map(|rings| rings.iter().map(Coordinates::parse_ring).collect())
            .unwrap_or_default();

        Some(Self {
            kind: json::string(obj, "type"),
            coordinates: rings,
        })
    }
}

/// A named place a tweet can be associated with (but not necessarily
/// originate from).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Place {
    /// ID of the place
    pub id: String,

    /// URL of the place's metadata in the Twitter API
    pub url: String,

    /// Type of the place, e.g. `city` or `poi`
    pub place_type: String,

    /// Short name of the place
    pub name: String,

    /// Full, human-readable name of the place
    pub full_name: String,

    /// ISO country code of the place
    pub country_code: String,

    /// Country name of the place
    pub country: String,

    /// Bounding box enclosing the place
    pub bounding_box: Option<BoundingBox>,
}

impl Place {
    /// Parse a place node.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            id: json::string(obj, "id"),
            url: json::string(obj, "url"),
            place_type: json::string(obj, "place_type"),
            name: json::string(obj, "name"),
            full_name: json::string(obj, "full_name"),
            country_code: json::string(obj, "country_code"),
            country: json::string(obj, "country"),
            bounding_box: json::object(obj, "bounding_box", BoundingBox::parse),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_path_swaps_longitude_and_latitude() {
        let coordinates = Coordinates::parse(&json!({
            "type": "Point",
            "coordinates": [-73.99, 40.73]
        }))
        .unwrap();

        assert!((coordinates.latitude - 40.73).abs() < f64::EPSILON);
        assert!((coordinates.longitude - -73.99).abs() < f64::EPSILON);
    }

    #[test]
    fn bare_array_path_swaps_too() {
        let point = Coordinates::parse_point(&json!([-73.99, 40.73])).unwrap();

        assert!((point.latitude - 40.73).abs() < f64::EPSILON);
        assert!((point.longitude - -73.99).abs() < f64::EPSILON);
    }

    #[test]
    fn bounding_box_parses_rings_of_bare_points() {
        let bounding_box = BoundingBox::parse(&json!({
            "type": "Polygon",
            "coordinates": [[
                [-74.026675, 40.683935],
                [-74.026675, 40.877483],
                [-73.910408, 40.877483],
                [-73.910408, 40.683935]
            ]]
        }))
        .unwrap();

        assert_eq!(bounding_box.kind, "Polygon");
        assert_eq!(bounding_box.coordinates.len(), 1);
        assert_eq!(bounding_box.coordinates[0].len(), 4);
        assert!((bounding_box.coordinates[0][0].latitude - 40.683935).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_coordinates_yield_empty_rings() {
        let bounding_box = BoundingBox::parse(&json!({ "type": "Polygon" })).unwrap();
        assert!(bounding_box.coordinates.is_empty());

        let garbled = BoundingBox::parse(&json!({ "type": "Polygon", "coordinates": "x" })).unwrap();
        assert!(garbled.coordinates.is_empty());
    }

    #[test]
    fn place_reads_scalars_and_bounding_box() {
        let place = Place::parse(&json!({
            "id": "01a9a39529b27f36",
            "url": "https://api.twitter.com/1.1/geo/id/01a9a39529b27f36.json",
            "place_type": "city",
            "name": "Manhattan",
            "full_name": "Manhattan, NY",
            "country_code": "US",
            "country": "United States",
            "bounding_box": { "type": "Polygon", "coordinates": [] }
        }))
        .unwrap();

        assert_eq!(place.place_type, "city");
        assert_eq!(place.full_name, "Manhattan, NY");
        assert!(place.bounding_box.is_some());
    }
}
