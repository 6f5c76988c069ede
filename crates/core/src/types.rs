//! Response model for the places API.
//!
//! The wire format is the GeoDB Cities shape: a `data` array of place
//! records plus a `metadata` object carrying the total match count. Field
//! names arrive in camelCase; anything we do not model is ignored.

use serde::{Deserialize, Serialize};

/// Fixed third-party host serving country flag images.
pub const FLAG_HOST: &str = "https://flagsapi.com";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// One place record, taken verbatim from the API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub country_code: String,
}

impl Place {
    /// URL of the 32px flag image for this place's country.
    ///
    /// One image request per rendered row; the host 404s on codes it does
    /// not know, which shows up as a broken image in the webview.
    pub fn flag_url(&self) -> String {
        format!("{FLAG_HOST}/{}/flat/32.png", self.country_code)
    }
}

/// Response metadata. `total_count` is the number of records matching the
/// query server-side, which routinely exceeds the number fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub total_count: u64,
}

/// Top-level search response envelope: `{ data: [...], metadata: {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacesResponse {
    pub data: Vec<Place>,
    pub metadata: ResponseMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "data": [
            {
                "id": 3350606,
                "wikiDataId": "Q84",
                "type": "CITY",
                "name": "London",
                "country": "United Kingdom",
                "countryCode": "GB",
                "region": "England",
                "latitude": 51.507222222,
                "longitude": -0.1275
            },
            {
                "id": 3454,
                "wikiDataId": "Q92561",
                "type": "CITY",
                "name": "London",
                "country": "Canada",
                "countryCode": "CA",
                "region": "Ontario",
                "latitude": 42.9836,
                "longitude": -81.2497
            }
        ],
        "links": [
            { "rel": "first", "href": "/v1/geo/cities?limit=5&offset=0" }
        ],
        "metadata": {
            "currentOffset": 0,
            "totalCount": 44
        }
    }"#;

    #[test]
    fn deserializes_camel_case_payload() {
        let parsed: PlacesResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.metadata.total_count, 44);

        let first = &parsed.data[0];
        assert_eq!(first.id, 3350606);
        assert_eq!(first.name, "London");
        assert_eq!(first.country, "United Kingdom");
        assert_eq!(first.country_code, "GB");
    }

    #[test]
    fn preserves_response_order() {
        let parsed: PlacesResponse = serde_json::from_str(SAMPLE).unwrap();
        let countries: Vec<&str> =
            parsed.data.iter().map(|p| p.country_code.as_str()).collect();
        assert_eq!(countries, ["GB", "CA"]);
    }

    #[test]
    fn flag_url_uses_country_code() {
        let place = Place {
            id: 1,
            name: "London".into(),
            country: "United Kingdom".into(),
            country_code: "GB".into(),
        };
        assert_eq!(place.flag_url(), "https://flagsapi.com/GB/flat/32.png");
    }
}
