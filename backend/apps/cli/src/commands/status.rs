use auth::application::CheckSessionUseCase;
use auth::AuthError;
use kernel::error::app_error::AppResult;

use super::describe;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let session = match CheckSessionUseCase::new(ctx.sessions.clone()).execute().await {
        Ok(session) => session,
        Err(AuthError::NotAuthenticated) => {
            println!("Not signed in.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("Hello, {}!", session.first_name());
    println!("Employee: {}", session.employee_id);

    match ctx.cache().get(&session.employee_id) {
        Some(result) => println!("Checked in today: {}", describe(&result)),
        None => println!("Not checked in today."),
    }

    if let Some(last) = ctx.store().last_attendance() {
        println!("Last capture on this device: {}", describe(&last));
    }
    Ok(())
}
