//! The synthesized record type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One synthesized identity record.
///
/// Field order matches the export column order: index, identifier, name,
/// address, phone. The identifier is never corrupted.
///
/// # Example
///
/// ```
/// use identity_forge::Record;
/// use uuid::Uuid;
///
/// let record = Record {
///     index: 1,
///     identifier: Uuid::nil(),
///     name: "Ada Byron Lovelace".to_owned(),
///     address: "12 St James's Square, London, LDN 10001".to_owned(),
///     phone: "(+1) 555-010-4477".to_owned(),
/// };
///
/// assert_eq!(record.name, "Ada Byron Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// 1-based position within the run.
    pub index: u64,
    /// Opaque unique identifier.
    pub identifier: Uuid,
    /// Full name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Phone number.
    pub phone: String,
}
