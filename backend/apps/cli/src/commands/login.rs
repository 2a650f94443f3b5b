use std::env;
use std::sync::Arc;

use auth::application::{SignInInput, SignInUseCase};
use auth::HttpAuthService;
use kernel::error::app_error::{AppError, AppResult};

use crate::context::AppContext;

pub async fn run(ctx: &AppContext, user: String, password: Option<String>) -> AppResult<()> {
    let password = match password {
        Some(password) => password,
        None => env::var("ATTENDANCE_PASSWORD").map_err(|_| {
            AppError::rejected("Password is required")
                .with_action("Pass --password or set ATTENDANCE_PASSWORD")
        })?,
    };

    let service = Arc::new(HttpAuthService::new(&ctx.config.auth)?);
    let session = SignInUseCase::new(service, ctx.sessions.clone())
        .execute(SignInInput {
            identifier: user,
            password,
        })
        .await?;

    println!(
        "Welcome, {}! Signed in as employee {}.",
        session.first_name(),
        session.employee_id
    );
    Ok(())
}
