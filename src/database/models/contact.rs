use serde::{Deserialize, Serialize};

use super::{email, required, Resource};
use crate::database::store::CollectionSpec;
use crate::error::ApiError;

/// Submission from the public contact form. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
}

impl Resource for Contact {
    type Draft = NewContact;

    const COLLECTION: CollectionSpec = CollectionSpec::new("contacts");
    const NAME: &'static str = "Contact";
    const LIST_FAILURE: &'static str = "Failed to fetch contacts";
    const CREATE_FAILURE: &'static str = "Failed to submit contact";
    const DUPLICATE_MESSAGE: &'static str = "Contact already exists";
    const CREATED_MESSAGE: Option<&'static str> = Some("Contact submitted successfully");

    fn from_draft(draft: NewContact) -> Result<Self, ApiError> {
        Ok(Self {
            full_name: required(draft.full_name, "Full name")?,
            email: email(required(draft.email, "Email")?)?,
            phone: required(draft.phone, "Phone")?,
            city: required(draft.city, "City")?,
        })
    }
}
