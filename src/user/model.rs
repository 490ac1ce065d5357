use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// The slice of a user profile this service reads. Profiles are owned by the
/// identity service; any other stored fields are ignored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}
