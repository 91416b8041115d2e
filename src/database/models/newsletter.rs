use serde::{Deserialize, Serialize};

use super::{email, required, Resource};
use crate::database::store::CollectionSpec;
use crate::error::ApiError;

/// Newsletter subscriber. The email is unique across the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Newsletter {
    pub email: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewSubscription {
    pub email: Option<String>,
}

impl Resource for Newsletter {
    type Draft = NewSubscription;

    const COLLECTION: CollectionSpec = CollectionSpec::with_unique("newsletters", &["email"]);
    const NAME: &'static str = "Subscriber";
    const LIST_FAILURE: &'static str = "Failed to fetch subscribers";
    const CREATE_FAILURE: &'static str = "Failed to subscribe";
    const DUPLICATE_MESSAGE: &'static str = "Email already subscribed";
    const CREATED_MESSAGE: Option<&'static str> = Some("Subscribed successfully");

    fn from_draft(draft: NewSubscription) -> Result<Self, ApiError> {
        Ok(Self {
            email: email(required(draft.email, "Email")?)?,
        })
    }
}
