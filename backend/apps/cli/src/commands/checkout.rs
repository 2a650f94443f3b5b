use attendance::application::CheckoutUseCase;
use attendance::domain::value_objects::Coordinates;
use kernel::error::app_error::AppResult;

use crate::context::AppContext;

pub async fn run(ctx: &AppContext, latitude: Option<f64>, longitude: Option<f64>) -> AppResult<()> {
    let coordinates = match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude, None)),
        _ => None,
    };

    let output = CheckoutUseCase::new(ctx.gateway()?, ctx.cache(), ctx.sessions.clone())
        .execute(coordinates)
        .await?;

    println!("{}", output.receipt.message);
    tracing::debug!(next = ?output.next, "Checkout complete");
    Ok(())
}
