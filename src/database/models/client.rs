use serde::{Deserialize, Serialize};

use super::{image_url, patch_of, required, truthy, Patchable, Resource};
use crate::database::store::{CollectionSpec, Fields};
use crate::error::ApiError;

/// Client testimonial: who they are and what they said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub designation: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewClient {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl Resource for Client {
    type Draft = NewClient;

    const COLLECTION: CollectionSpec = CollectionSpec::new("clients");
    const NAME: &'static str = "Client";
    const LIST_FAILURE: &'static str = "Failed to fetch clients";
    const CREATE_FAILURE: &'static str = "Failed to create client";
    const DUPLICATE_MESSAGE: &'static str = "Client already exists";

    fn from_draft(draft: NewClient) -> Result<Self, ApiError> {
        Ok(Self {
            name: required(draft.name, "Name")?,
            designation: required(draft.designation, "Designation")?,
            description: required(draft.description, "Description")?,
            image: image_url(required(draft.image, "Image URL")?)?,
        })
    }
}

impl Patchable for Client {
    type Patch = ClientPatch;

    fn patch_fields(patch: ClientPatch) -> Result<Fields, ApiError> {
        let image = truthy(patch.image)
            .map(image_url)
            .transpose()?;

        Ok(patch_of([
            ("name", truthy(patch.name)),
            ("designation", truthy(patch.designation)),
            ("description", truthy(patch.description)),
            ("image", image),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn designation_is_required() {
        let err = Client::from_draft(NewClient {
            name: Some("Ada".into()),
            designation: Some("  ".into()),
            description: Some("Great team".into()),
            image: Some("https://cdn.example.com/ada.png".into()),
        })
        .unwrap_err();
        assert_eq!(err.message(), "Designation is required");
    }

    #[test]
    fn empty_patch_writes_nothing() {
        let fields = Client::patch_fields(ClientPatch::default()).unwrap();
        assert!(fields.is_empty());
    }
}
