use std::env;

use fibreflo_client::{Credentials, FibrefloClient};
use fibreflo_core::{summary, ExternalUserId, TimesheetService, Timesheets};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./fibreflo-client/.env.local").ok();
    tracing_subscriber::fmt::init();

    let token = env::var("FIBREFLO_TOKEN").expect("FIBREFLO_TOKEN must be set");
    let user = ExternalUserId::new(env::var("FIBREFLO_USER_ID").expect("FIBREFLO_USER_ID must be set"));

    let client = FibrefloClient::new(Credentials::new(token));
    let service = Timesheets::new(client);

    let today = fibreflo_core::time_utils::today();
    let sheets = service.timesheets_on(&user, today).await?;

    println!(
        "{} timesheet(s) on {}",
        sheets.len(),
        summary::format_date(today)
    );
    for sheet in &sheets {
        println!("\n#{} [{}]", sheet.id, sheet.status);
        for row in summary::summary_rows(sheet) {
            println!("  {}: {}", row.label, row.value);
        }
        for total in summary::totals_by_work_item_type(&sheet.work_items) {
            println!("  {} x{}", total.name, total.quantity);
        }
    }

    Ok(())
}
