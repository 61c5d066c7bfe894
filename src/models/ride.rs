use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Payload enviado para POST /submit
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RideRequest {
    pub name: String,
    pub location: String,
    pub destination: String,
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passengers: Option<u32>,
}

/// One rider inside a destination group, as returned by GET /groups.
///
/// Only `name` and `contact` are contractual; the other fields drift
/// between server revisions and default to None when absent.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Rider {
    pub name: String,
    pub contact: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

/// Destination → riders heading there. Empty map = "no groups yet".
///
/// Rider order within a destination is server-determined and preserved.
pub type Groups = BTreeMap<String, Vec<Rider>>;

/// Shape of the /join and /cancel_booking responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct JoinRequest {
    pub ride_id: i64,
}
