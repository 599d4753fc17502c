//! `paperdesk get customers`, `paperdesk delete publication 3`, etc.
//!
//! Mutations run against the in-process stores, so they last only for the
//! current invocation.

use anyhow::Result;
use paperdesk_store::Record;
use paperdesk_subscription::model::{Customer, CustomerPatch, Publication, PublicationPatch};
use serde::de::DeserializeOwned;
use paperdesk_subscription::SubscriptionService;

use super::{render_table, to_json, Output};

/// Resource kinds exposed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Customers,
    Publications,
}

/// Map a singular/plural resource name to its kind.
pub fn parse_resource(name: &str) -> Result<Resource> {
    match name.to_lowercase().as_str() {
        "customer" | "customers" => Ok(Resource::Customers),
        "publication" | "publications" | "pub" | "pubs" => Ok(Resource::Publications),
        _ => Err(anyhow::anyhow!("Unknown resource type: {}", name)),
    }
}

/// Print one record (when `id` is given) or a filtered list.
pub async fn get(
    service: &SubscriptionService,
    resource: &str,
    id: Option<u32>,
    search: &str,
    output: Output,
) -> Result<()> {
    let text = match parse_resource(resource)? {
        Resource::Customers => {
            let records = match id {
                Some(id) => vec![service.customers().get_by_id(id).await?],
                None => service.search_customers(search).await,
            };
            match output {
                Output::Json if id.is_some() => to_json(&records[0])?,
                Output::Json => to_json(&records)?,
                Output::Table => customer_table(&records),
            }
        }
        Resource::Publications => {
            let records = match id {
                Some(id) => vec![service.publications().get_by_id(id).await?],
                None => service.search_publications(search).await,
            };
            match output {
                Output::Json if id.is_some() => to_json(&records[0])?,
                Output::Json => to_json(&records)?,
                Output::Table => publication_table(&records),
            }
        }
    };
    println!("{}", text);
    Ok(())
}

fn parse_body<T: DeserializeOwned>(json_body: &str) -> Result<T> {
    serde_json::from_str(json_body).map_err(|e| anyhow::anyhow!("Invalid JSON: {}", e))
}

fn render_customer(record: &Record<Customer>, output: Output) -> Result<String> {
    match output {
        Output::Json => to_json(record),
        Output::Table => Ok(customer_table(std::slice::from_ref(record))),
    }
}

fn render_publication(record: &Record<Publication>, output: Output) -> Result<String> {
    match output {
        Output::Json => to_json(record),
        Output::Table => Ok(publication_table(std::slice::from_ref(record))),
    }
}

/// Create a record from a full JSON payload and print it with its new id.
pub async fn create(
    service: &SubscriptionService,
    resource: &str,
    json_body: &str,
    output: Output,
) -> Result<()> {
    let text = match parse_resource(resource)? {
        Resource::Customers => {
            let fields: Customer = parse_body(json_body)?;
            render_customer(&service.customers().create(fields).await, output)?
        }
        Resource::Publications => {
            let fields: Publication = parse_body(json_body)?;
            render_publication(&service.publications().create(fields).await, output)?
        }
    };
    println!("{}", text);
    Ok(())
}

/// Merge a partial JSON payload into a record and print the result.
pub async fn update(
    service: &SubscriptionService,
    resource: &str,
    id: u32,
    json_body: &str,
    output: Output,
) -> Result<()> {
    let text = match parse_resource(resource)? {
        Resource::Customers => {
            let patch: CustomerPatch = parse_body(json_body)?;
            render_customer(&service.customers().update(id, patch).await?, output)?
        }
        Resource::Publications => {
            let patch: PublicationPatch = parse_body(json_body)?;
            render_publication(&service.publications().update(id, patch).await?, output)?
        }
    };
    println!("{}", text);
    Ok(())
}

/// Delete a record by id.
pub async fn delete(service: &SubscriptionService, resource: &str, id: u32) -> Result<()> {
    let singular = match parse_resource(resource)? {
        Resource::Customers => {
            service.customers().delete(id).await?;
            "customer"
        }
        Resource::Publications => {
            service.publications().delete(id).await?;
            "publication"
        }
    };
    println!("{} {} deleted.", singular, id);
    Ok(())
}

pub fn customer_table(records: &[Record<Customer>]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.fields.name.clone(),
                r.fields.status.to_string(),
                r.fields.phone.clone(),
                r.fields.address.clone(),
                r.created_at.clone(),
            ]
        })
        .collect();
    render_table(&["ID", "NAME", "STATUS", "PHONE", "ADDRESS", "CREATED"], &rows)
}

pub fn publication_table(records: &[Record<Publication>]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.fields.name.clone(),
                r.fields.kind.to_string(),
                r.fields.frequency.to_string(),
                format!("${:.2}", r.fields.price),
            ]
        })
        .collect();
    render_table(&["ID", "NAME", "TYPE", "FREQUENCY", "PRICE"], &rows)
}
