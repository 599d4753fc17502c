pub mod customer;
pub mod publication;

pub use customer::{Customer, CustomerPatch, CustomerStatus};
pub use publication::{Frequency, Publication, PublicationPatch, PublicationType};
