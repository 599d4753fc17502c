//! Billing overview: a pure fold over customer and publication snapshots.

use serde::Serialize;

use paperdesk_store::Record;

use crate::model::{Customer, CustomerStatus, Publication};

/// Number of records shown in each preview panel of the overview.
pub const PREVIEW_LEN: usize = 5;

/// Aggregated billing figures.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillingSummary {
    pub active_customers: usize,
    pub pending_customers: usize,
    pub total_publications: usize,
    /// Sum of all publication prices times the number of active customers.
    pub total_revenue: f64,
    pub recent_customers: Vec<Record<Customer>>,
    pub featured_publications: Vec<Record<Publication>>,
}

/// Compute the billing overview. No side effects; re-scans both inputs.
pub fn summarize(customers: &[Record<Customer>], publications: &[Record<Publication>]) -> BillingSummary {
    let count_status = |status: CustomerStatus| {
        customers
            .iter()
            .filter(|c| c.fields.status == status)
            .count()
    };
    let active_customers = count_status(CustomerStatus::Active);
    let pending_customers = count_status(CustomerStatus::Pending);

    let price_sum: f64 = publications.iter().map(|p| p.fields.price).sum();

    BillingSummary {
        active_customers,
        pending_customers,
        total_publications: publications.len(),
        total_revenue: price_sum * active_customers as f64,
        recent_customers: customers.iter().take(PREVIEW_LEN).cloned().collect(),
        featured_publications: publications.iter().take(PREVIEW_LEN).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Frequency, PublicationType};

    fn customer(id: u32, status: CustomerStatus) -> Record<Customer> {
        Record::new(
            id,
            Customer {
                name: format!("Customer {}", id),
                address: "Somewhere".into(),
                phone: "(555) 000-0000".into(),
                email: None,
                status,
            },
            "t".into(),
        )
    }

    fn publication(id: u32, price: f64) -> Record<Publication> {
        Record::new(
            id,
            Publication {
                name: format!("Title {}", id),
                price,
                kind: PublicationType::Magazine,
                frequency: Frequency::Monthly,
            },
            "t".into(),
        )
    }

    #[test]
    fn revenue_is_price_sum_times_active() {
        let customers = vec![
            customer(1, CustomerStatus::Active),
            customer(2, CustomerStatus::Active),
            customer(3, CustomerStatus::Pending),
        ];
        let publications = vec![publication(1, 10.0), publication(2, 20.0)];

        let summary = summarize(&customers, &publications);
        assert_eq!(summary.active_customers, 2);
        assert_eq!(summary.pending_customers, 1);
        assert_eq!(summary.total_publications, 2);
        assert_eq!(summary.total_revenue, 60.0);
    }

    #[test]
    fn inactive_customers_do_not_count() {
        let customers = vec![
            customer(1, CustomerStatus::Inactive),
            customer(2, CustomerStatus::Pending),
        ];
        let summary = summarize(&customers, &[publication(1, 12.5)]);
        assert_eq!(summary.active_customers, 0);
        assert_eq!(summary.pending_customers, 1);
        assert_eq!(summary.total_revenue, 0.0);
    }

    #[test]
    fn empty_inputs() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.active_customers, 0);
        assert_eq!(summary.total_publications, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert!(summary.recent_customers.is_empty());
    }

    #[test]
    fn previews_take_first_five() {
        let customers: Vec<_> = (1..=7).map(|i| customer(i, CustomerStatus::Active)).collect();
        let publications: Vec<_> = (1..=3).map(|i| publication(i, 1.0)).collect();
        let summary = summarize(&customers, &publications);
        assert_eq!(summary.recent_customers.len(), PREVIEW_LEN);
        assert_eq!(summary.recent_customers[0].id, 1);
        assert_eq!(summary.featured_publications.len(), 3);
    }
}
