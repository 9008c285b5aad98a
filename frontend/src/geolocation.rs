use std::{cell::RefCell, fmt, rc::Rc};

use futures::channel::oneshot;
use gloo_utils::window;
use wasm_bindgen::{JsCast, prelude::Closure};
use web_sys::{GeolocationPosition, GeolocationPositionError};
use workout_tracker_lib::coords::Coords;

#[derive(Debug)]
pub enum GeolocationError {
    Unsupported,
    Denied(String),
    Dropped,
}

impl fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeolocationError::Unsupported => f.write_str("Geolocation is not supported"),
            GeolocationError::Denied(msg) => write!(f, "Position unavailable: {msg}"),
            GeolocationError::Dropped => f.write_str("Geolocation request was dropped"),
        }
    }
}

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<Coords, GeolocationError>>>>>;

fn send(reply: &Reply, result: Result<Coords, GeolocationError>) {
    if let Some(tx) = reply.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

/// Asks the browser for the current position once. No retry, no timeout.
pub async fn current_position() -> Result<Coords, GeolocationError> {
    let geolocation = window()
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let (tx, rx) = oneshot::channel();
    let reply: Reply = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let reply = reply.clone();
        Closure::<dyn FnMut(GeolocationPosition)>::new(move |position: GeolocationPosition| {
            let coords = position.coords();
            send(&reply, Ok((coords.latitude(), coords.longitude()).into()));
        })
    };

    let on_error = {
        let reply = reply.clone();
        Closure::<dyn FnMut(GeolocationPositionError)>::new(move |err: GeolocationPositionError| {
            send(&reply, Err(GeolocationError::Denied(err.message())));
        })
    };

    geolocation
        .get_current_position_with_error_callback(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
        )
        .map_err(|_| GeolocationError::Unsupported)?;

    // The closures have to outlive the request
    let result = rx.await.unwrap_or(Err(GeolocationError::Dropped));
    drop((on_success, on_error));
    result
}
