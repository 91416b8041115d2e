pub mod client;
pub mod contact;
pub mod newsletter;
pub mod project;

pub use client::{Client, ClientPatch, NewClient};
pub use contact::{Contact, NewContact};
pub use newsletter::{NewSubscription, Newsletter};
pub use project::{NewProject, Project, ProjectPatch};

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use crate::database::store::{CollectionSpec, Fields};
use crate::error::ApiError;

/// Every collection the service owns, for schema bootstrapping.
pub const COLLECTIONS: [CollectionSpec; 4] = [
    Project::COLLECTION,
    Client::COLLECTION,
    Contact::COLLECTION,
    Newsletter::COLLECTION,
];

/// A stored record on the wire: `{ "_id", ...fields, "createdAt" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub body: T,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A content type stored in its own collection and served through the shared
/// CRUD handlers.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Body accepted by `POST`
    type Draft: DeserializeOwned + Send + 'static;

    const COLLECTION: CollectionSpec;
    /// Capitalised singular, used in client messages ("Project not found")
    const NAME: &'static str;
    const LIST_FAILURE: &'static str;
    const CREATE_FAILURE: &'static str;
    const DUPLICATE_MESSAGE: &'static str;
    /// Extra `message` placed in the create envelope, if any
    const CREATED_MESSAGE: Option<&'static str> = None;

    /// Validate and normalise a create request.
    fn from_draft(draft: Self::Draft) -> Result<Self, ApiError>;
}

/// Resources that admins may edit after creation.
///
/// Patches follow the falsy-drop rule: absent, `null`, and blank strings are
/// skipped rather than written, so a field can never be cleared through an
/// update.
pub trait Patchable: Resource {
    type Patch: DeserializeOwned + Send + 'static;

    /// Validate a patch and return only the fields that should be written.
    fn patch_fields(patch: Self::Patch) -> Result<Fields, ApiError>;
}

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

/// Trim a required field, rejecting it when absent or blank.
pub(crate) fn required(value: Option<String>, label: &str) -> Result<String, ApiError> {
    truthy(value).ok_or_else(|| ApiError::validation_error(format!("{label} is required")))
}

/// Trimmed value, or `None` when absent or blank.
pub(crate) fn truthy(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Lower-case and pattern-check an email address.
pub(crate) fn email(value: String) -> Result<String, ApiError> {
    let value = value.to_lowercase();
    if EMAIL_PATTERN.is_match(&value) {
        Ok(value)
    } else {
        Err(ApiError::validation_error("Please enter a valid email"))
    }
}

pub(crate) fn image_url(value: String) -> Result<String, ApiError> {
    match url::Url::parse(&value) {
        Ok(_) => Ok(value),
        Err(_) => Err(ApiError::validation_error("Image must be a valid URL")),
    }
}

/// Collect `(field, value)` pairs that survived the falsy-drop rule.
pub(crate) fn patch_of<I>(pairs: I) -> Fields
where
    I: IntoIterator<Item = (&'static str, Option<String>)>,
{
    pairs
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field.to_string(), serde_json::Value::String(v))))
        .collect()
}
