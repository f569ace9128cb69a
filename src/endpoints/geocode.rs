//! The **Geo** endpoint.

use crate::error::TwitterResult;
use crate::http::{HttpClient, RawResponse};
use crate::models::{Place, ReverseGeocodeResults};
use crate::response::Response;

/// Minimum granularity of a place returned by reverse geocoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    /// Neighborhood level (the API default)
    #[default]
    Neighborhood,

    /// Point of interest
    Poi,

    /// City level
    City,

    /// Administrative region level
    Admin,

    /// Country level
    Country,

    /// A granularity string this client does not recognize
    Unknown,
}

impl Granularity {
    /// Decode a granularity name, case-insensitively. Unknown names decode
    /// to [`Granularity::Unknown`] rather than a real level.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "neighborhood" => Self::Neighborhood,
            "poi" => Self::Poi,
            "city" => Self::City,
            "admin" => Self::Admin,
            "country" => Self::Country,
            _ => Self::Unknown,
        }
    }

    /// The wire representation of the granularity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neighborhood => "neighborhood",
            Self::Poi => "poi",
            Self::City => "city",
            Self::Admin => "admin",
            Self::Country => "country",
            Self::Unknown => "unknown",
        }
    }
}

/// Options for `geo/reverse_geocode`.
#[derive(Debug, Clone)]
pub struct ReverseGeocodeOptions {
    /// Latitude of the point to look up
    pub latitude: f64,

    /// Longitude of the point to look up
    pub longitude: f64,

    /// Minimum granularity of the returned places
    pub granularity: Granularity,

    /// Hint on the "region" to search, e.g. `5ft` or `1000m`; empty means
    /// the API default
    pub accuracy: String,

    /// Number of places to try and return
    pub max_results: i32,
}

impl ReverseGeocodeOptions {
    /// Options looking up the point at `latitude`/`longitude`.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            granularity: Granularity::default(),
            accuracy: String::new(),
            max_results: 0,
        }
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("lat".to_string(), self.latitude.to_string()),
            ("long".to_string(), self.longitude.to_string()),
        ];
        if self.granularity != Granularity::Neighborhood {
            query.push(("granularity".into(), self.granularity.as_str().into()));
        }
        if !self.accuracy.is_empty() {
            query.push(("accuracy".into(), self.accuracy.clone()));
        }
        if self.max_results > 0 {
            query.push(("max_results".into(), self.max_results.to_string()));
        }
        query
    }
}

/// Raw layer of the geo endpoint.
#[derive(Debug, Clone, Copy)]
pub struct RawGeocode<'a> {
    http: &'a HttpClient,
}

impl<'a> RawGeocode<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `GET geo/reverse_geocode`: places near a point.
    pub async fn reverse_geocode(&self, options: &ReverseGeocodeOptions) -> TwitterResult<RawResponse> {
        self.http
            .get("/1.1/geo/reverse_geocode.json", &options.query())
            .await
    }

    /// `GET geo/id/:place_id`: information about a known place.
    pub async fn place(&self, place_id: &str) -> TwitterResult<RawResponse> {
        self.http.get(&format!("/1.1/geo/id/{place_id}.json"), &[]).await
    }
}

/// Typed layer of the geo endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Geocode<'a> {
    raw: RawGeocode<'a>,
}

impl<'a> Geocode<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self {
            raw: RawGeocode::new(http),
        }
    }

    /// The raw layer of this endpoint.
    #[must_use]
    pub const fn raw(&self) -> RawGeocode<'a> {
        self.raw
    }

    /// Find places near a point.
    pub async fn reverse_geocode(
        &self,
        options: &ReverseGeocodeOptions,
    ) -> TwitterResult<Response<ReverseGeocodeResults>> {
        Response::parse(
            &self.raw.reverse_geocode(options).await?,
            ReverseGeocodeResults::parse,
        )
    }

    /// Get information about a known place by its ID.
    pub async fn place(&self, place_id: &str) -> TwitterResult<Response<Place>> {
        Response::parse(&self.raw.place(place_id).await?, Place::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granularity_parse_is_case_insensitive_with_unknown_fallback() {
        assert_eq!(Granularity::parse("City"), Granularity::City);
        assert_eq!(Granularity::parse("POI"), Granularity::Poi);
        assert_eq!(Granularity::parse("zipcode"), Granularity::Unknown);
    }

    #[test]
    fn reverse_geocode_query_uses_lat_long_names() {
        let options = ReverseGeocodeOptions {
            granularity: Granularity::City,
            max_results: 3,
            ..ReverseGeocodeOptions::new(37.7821120598956, -122.400612831116)
        };
        let query = options.query();

        assert_eq!(query[0].0, "lat");
        assert_eq!(query[1].0, "long");
        assert!(query.contains(&("granularity".into(), "city".into())));
        assert!(query.contains(&("max_results".into(), "3".into())));
    }
}
