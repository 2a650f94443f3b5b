use auth::application::CheckSessionUseCase;
use kernel::error::app_error::AppResult;

use crate::context::AppContext;

pub async fn run(ctx: &AppContext, status: Option<String>, all: bool) -> AppResult<()> {
    let session = CheckSessionUseCase::new(ctx.sessions.clone()).execute().await?;
    let store = ctx.store();

    if all {
        store.set_status_filter(None)?;
    } else if let Some(status) = status.as_deref() {
        store.set_status_filter(Some(status))?;
    }

    let gateway = ctx.gateway()?;
    let entries = store
        .fetch_logs(gateway.as_ref(), &session.employee_id)
        .await?;

    let filter = store.status_filter();
    println!(
        "Attendance logs for {} ({})",
        session.employee_id,
        filter.as_deref().unwrap_or("all statuses")
    );

    if entries.is_empty() {
        println!("No attendance logs found.");
        return Ok(());
    }

    let base_url = session
        .base_url
        .as_deref()
        .unwrap_or_else(|| gateway.base_url());
    for entry in &entries {
        let time = entry
            .parsed_time()
            .map(|t| t.format("%a %d %b %Y %H:%M").to_string())
            .unwrap_or_else(|| entry.time.clone());
        println!(
            "{:<22} {:<4} {:<12} {}",
            time,
            entry.log_type,
            entry.custom_attendance_status.as_deref().unwrap_or("-"),
            entry.image_url(base_url).unwrap_or_default()
        );
    }
    Ok(())
}
