//! `paperdesk billing`: the billing overview.

use anyhow::Result;
use paperdesk_subscription::{BillingSummary, SubscriptionService};

use super::resource::{customer_table, publication_table};
use super::{to_json, Output};

pub async fn show(service: &SubscriptionService, output: Output) -> Result<()> {
    let summary = service.billing().await;
    let text = match output {
        Output::Json => to_json(&summary)?,
        Output::Table => render(&summary),
    };
    println!("{}", text);
    Ok(())
}

fn render(summary: &BillingSummary) -> String {
    format!(
        "Total revenue:       ${:.2}\n\
         Active customers:    {}\n\
         Pending customers:   {}\n\
         Publications:        {}\n\
         \n\
         Recent customers\n{}\n\
         \n\
         Publication pricing\n{}",
        summary.total_revenue,
        summary.active_customers,
        summary.pending_customers,
        summary.total_publications,
        customer_table(&summary.recent_customers),
        publication_table(&summary.featured_publications),
    )
}
