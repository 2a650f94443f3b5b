//! `attendance check-in`
//!
//! Drives the attendance screen headlessly: the photo file stands in for the
//! camera and the given coordinates for the device location.

use std::path::PathBuf;
use std::sync::Arc;

use attendance::application::{CaptureOrchestrator, CaptureOutcome, LocationResolver};
use attendance::domain::value_objects::{Coordinates, Route};
use attendance::presentation::{CaptureView, Navigator};
use attendance::{FileCamera, FixedGeolocation};
use kernel::error::app_error::AppResult;

use super::describe;
use crate::context::AppContext;

pub struct CheckInArgs {
    pub photo: PathBuf,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub accuracy: Option<f64>,
}

pub async fn run(ctx: &AppContext, args: CheckInArgs) -> AppResult<()> {
    let fix = match (args.latitude, args.longitude) {
        (Some(latitude), Some(longitude)) => {
            Some(Coordinates::new(latitude, longitude, args.accuracy))
        }
        _ => None,
    };

    let camera = Arc::new(FileCamera::new(args.photo));
    let config = &ctx.config.attendance;
    let locator = Arc::new(LocationResolver::new(
        Arc::new(FixedGeolocation::new(fix)),
        config.location_timeout,
        config.location_retry,
    ));
    let gateway = ctx.gateway()?;

    let orchestrator = Arc::new(CaptureOrchestrator::new(
        locator,
        camera.clone(),
        gateway.clone(),
        gateway,
        ctx.store(),
        ctx.cache(),
        ctx.sessions.clone(),
        ctx.clock.clone(),
    ));

    let mut navigator = Navigator::new(camera, Route::Home);
    navigator.navigate(Route::Attendance);

    let mut view = CaptureView::new(orchestrator);
    view.mount().await;
    let outcome = view.capture().await;
    view.unmount();
    navigator.navigate(Route::Logs);

    match outcome? {
        CaptureOutcome::AlreadySatisfied(result) => {
            println!("Attendance already captured today: {}", describe(&result));
        }
        CaptureOutcome::Captured(result) => {
            println!("{}", result.remote_response.message);
            println!("Captured {}", describe(&result));
        }
    }
    Ok(())
}
