//! Search filters for list views.
//!
//! Filtering is a linear scan over a snapshot; the stores keep no indexes.

use paperdesk_store::{Fields, Record};

use crate::model::{Customer, Publication};

/// Implemented by payloads that list views can filter with a search box.
pub trait Searchable {
    /// `term` is non-empty. Implementations decide case sensitivity per field.
    fn matches(&self, term: &str) -> bool;
}

impl Searchable for Customer {
    fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.phone.contains(term)
            || self.address.to_lowercase().contains(&needle)
    }
}

impl Searchable for Publication {
    fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.kind.as_str().contains(&needle)
            || self.frequency.as_str().contains(&needle)
    }
}

/// Records matching `term`, in snapshot order. An empty term keeps all.
pub fn filter<F: Fields + Searchable>(records: &[Record<F>], term: &str) -> Vec<Record<F>> {
    if term.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| r.fields.matches(term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerStatus, Frequency, PublicationType};

    fn customer(id: u32, name: &str, address: &str, phone: &str) -> Record<Customer> {
        Record::new(
            id,
            Customer {
                name: name.into(),
                address: address.into(),
                phone: phone.into(),
                email: None,
                status: CustomerStatus::Active,
            },
            "t".into(),
        )
    }

    fn publication(id: u32, name: &str, kind: PublicationType, frequency: Frequency) -> Record<Publication> {
        Record::new(
            id,
            Publication {
                name: name.into(),
                price: 1.0,
                kind,
                frequency,
            },
            "t".into(),
        )
    }

    #[test]
    fn empty_term_keeps_everything() {
        let all = vec![
            customer(1, "Ann", "Elm St", "(111) 111-1111"),
            customer(2, "Bob", "Oak St", "(222) 222-2222"),
        ];
        assert_eq!(filter(&all, ""), all);
    }

    #[test]
    fn customer_name_and_address_ignore_case() {
        let all = vec![
            customer(1, "Ann Baker", "12 Elm St", "(111) 111-1111"),
            customer(2, "Bob Stone", "9 Oak Ave", "(222) 222-2222"),
        ];
        let hits = filter(&all, "BAKER");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let hits = filter(&all, "oak");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn customer_phone_substring() {
        let all = vec![
            customer(1, "Ann", "Elm", "(607) 555-0100"),
            customer(2, "Bob", "Oak", "(212) 555-0199"),
        ];
        let hits = filter(&all, "555-01");
        assert_eq!(hits.len(), 2);
        let hits = filter(&all, "(212)");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn publication_matches_type_and_frequency() {
        let all = vec![
            publication(1, "City Times", PublicationType::Newspaper, Frequency::Daily),
            publication(2, "Sky Review", PublicationType::Magazine, Frequency::Monthly),
            publication(3, "Annals", PublicationType::Journal, Frequency::Quarterly),
        ];
        assert_eq!(filter(&all, "Magazine")[0].id, 2);
        assert_eq!(filter(&all, "quarter")[0].id, 3);
        assert_eq!(filter(&all, "times")[0].id, 1);
        assert!(filter(&all, "weekly").is_empty());
    }
}
