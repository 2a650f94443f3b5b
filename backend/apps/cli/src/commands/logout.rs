use auth::application::SignOutUseCase;
use kernel::error::app_error::AppResult;

use crate::context::AppContext;

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    SignOutUseCase::new(ctx.sessions.clone()).execute().await?;
    println!("Signed out. Local attendance state cleared.");
    Ok(())
}
