//! Scan statistics and truncated scan reports

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PAGE_SIZE;
use crate::contact::Contact;
use crate::deduplication::DuplicatePair;

/// Aggregate numbers for one scan of a contact list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScanStats {
    pub total_contacts: usize,
    pub duplicates_found: usize,
    /// Pairs already merged since the scan; reduces the active duplicate count
    #[serde(default)]
    pub duplicates_merged: usize,
    pub contacts_with_email: usize,
    pub contacts_with_phone: usize,
}

impl ScanStats {
    pub fn from_contacts(contacts: &[Contact], duplicates_found: usize) -> Self {
        Self {
            total_contacts: contacts.len(),
            duplicates_found,
            duplicates_merged: 0,
            contacts_with_email: contacts.iter().filter(|c| has_value(&c.email)).count(),
            contacts_with_phone: contacts.iter().filter(|c| has_value(&c.phone)).count(),
        }
    }
}

fn has_value(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Result of a scan, ready to hand to a presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub stats: ScanStats,
    /// The first `page_size` pairs, in detection order
    pub duplicates: Vec<DuplicatePair>,
    /// Whether `duplicates` was cut short
    pub truncated: bool,
    pub message: String,
}

impl ScanReport {
    /// Build a report keeping at most `page_size` pairs
    pub fn new(contacts: &[Contact], mut pairs: Vec<DuplicatePair>, page_size: usize) -> Self {
        let stats = ScanStats::from_contacts(contacts, pairs.len());
        let truncated = pairs.len() > page_size;
        pairs.truncate(page_size);

        let message = format!(
            "Scan completed! Found {} duplicate pairs in {} contacts.",
            stats.duplicates_found, stats.total_contacts
        );

        tracing::info!("{}", message);

        Self {
            stats,
            duplicates: pairs,
            truncated,
            message,
        }
    }

    /// Build a report with the default page size
    pub fn with_default_page(contacts: &[Contact], pairs: Vec<DuplicatePair>) -> Self {
        Self::new(contacts, pairs, DEFAULT_PAGE_SIZE)
    }
}
