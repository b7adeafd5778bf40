//! Browser geolocation capture.
//!
//! Bridges `navigator.geolocation.getCurrentPosition` callbacks into an async
//! `Result` via a oneshot channel. Requires a browser environment; the SSR
//! path returns an error string so callers surface it as a toast.

use models::GeoPoint;

/// Ask the browser for a single GPS fix.
///
/// # Errors
///
/// Returns a user-facing message when geolocation is unavailable, permission
/// is denied, or the call runs outside a browser.
pub async fn current_position() -> Result<GeoPoint, String> {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let window = web_sys::window().ok_or_else(|| "no browser window".to_owned())?;
        let geolocation = window
            .navigator()
            .geolocation()
            .map_err(|_| "geolocation is not available on this device".to_owned())?;

        let (tx, rx) = futures::channel::oneshot::channel::<Result<GeoPoint, String>>();
        // Exactly one of the two callbacks fires; both need the sender.
        let tx = Rc::new(RefCell::new(Some(tx)));

        let tx_success = tx.clone();
        let on_success = Closure::once(move |position: web_sys::Position| {
            let coords = position.coords();
            if let Some(tx) = tx_success.borrow_mut().take() {
                let _ = tx.send(Ok(GeoPoint {
                    lat: coords.latitude(),
                    lon: coords.longitude(),
                }));
            }
        });
        let on_error = Closure::once(move |error: web_sys::PositionError| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(format!("location capture failed: {}", error.message())));
            }
        });

        geolocation
            .get_current_position_with_error_callback(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
            )
            .map_err(|_| "location capture was rejected".to_owned())?;

        // One-shot request: the closures must outlive this scope until the
        // browser invokes one of them.
        on_success.forget();
        on_error.forget();

        rx.await
            .map_err(|_| "location capture was cancelled".to_owned())?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
