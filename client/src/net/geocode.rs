//! Reverse geocoding via Nominatim (OpenStreetMap).
//!
//! The only cross-origin call in the client: turns a captured GPS fix into a
//! display address before it is attached to a case. Failures are soft — the
//! location still saves without address text.

#[cfg(test)]
#[path = "geocode_test.rs"]
mod geocode_test;

use models::GeoPoint;

#[cfg(any(test, feature = "hydrate"))]
fn reverse_endpoint(point: GeoPoint) -> String {
    format!(
        "https://nominatim.openstreetmap.org/reverse?format=jsonv2&lat={}&lon={}",
        point.lat, point.lon
    )
}

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
struct ReverseResponse {
    display_name: String,
}

/// Look up the display address for a GPS fix.
///
/// # Errors
///
/// Returns an error string if the request fails, the response is not OK, or
/// the payload has no `display_name`.
pub async fn reverse_geocode(point: GeoPoint) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&reverse_endpoint(point))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("reverse geocode failed: {}", resp.status()));
        }
        let body: ReverseResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.display_name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = point;
        Err("not available on server".to_owned())
    }
}
