//! Contact loading from JSON exports
//!
//! Accepts the shapes a CRM export usually arrives in:
//! - a flat array of contacts (`[{"id": .., "email": ..}]`)
//! - an array of CRM objects (`[{"id": .., "properties": {..}}]`)
//! - a CRM list page (`{"results": [..], "paging": {..}}`)

use std::path::Path;

use serde::Deserialize;

use crate::contact::{Contact, ContactId};
use crate::error::Result;

/// A CRM object as returned by list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct CrmObject {
    pub id: ContactId,
    pub properties: CrmProperties,
}

/// Contact properties requested from the CRM
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrmProperties {
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}

impl From<CrmObject> for Contact {
    fn from(object: CrmObject) -> Self {
        let CrmProperties {
            email,
            firstname,
            lastname,
            phone,
            company,
        } = object.properties;

        Contact {
            id: object.id,
            email,
            firstname,
            lastname,
            phone,
            company,
        }
    }
}

/// One page of a CRM list response
#[derive(Debug, Clone, Deserialize)]
pub struct CrmPage {
    pub results: Vec<CrmObject>,
    #[serde(default)]
    pub paging: Option<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ContactRecord {
    Crm(CrmObject),
    Flat(Contact),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ContactExport {
    Page(CrmPage),
    Records(Vec<ContactRecord>),
}

/// Parse contacts from any supported JSON shape
pub fn parse_contacts(json: &str) -> Result<Vec<Contact>> {
    let export: ContactExport = serde_json::from_str(json)?;

    let contacts: Vec<Contact> = match export {
        ContactExport::Page(page) => page.results.into_iter().map(Contact::from).collect(),
        ContactExport::Records(records) => records
            .into_iter()
            .map(|record| match record {
                ContactRecord::Crm(object) => Contact::from(object),
                ContactRecord::Flat(contact) => contact,
            })
            .collect(),
    };

    tracing::debug!("Parsed {} contacts", contacts.len());
    Ok(contacts)
}

/// Read and parse a contacts file
pub fn load_contacts(path: impl AsRef<Path>) -> Result<Vec<Contact>> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    parse_contacts(&contents)
}
