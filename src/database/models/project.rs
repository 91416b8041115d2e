use serde::{Deserialize, Serialize};

use super::{image_url, patch_of, required, truthy, Patchable, Resource};
use crate::database::store::{CollectionSpec, Fields};
use crate::error::ApiError;

/// Portfolio entry shown on the public site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl Resource for Project {
    type Draft = NewProject;

    const COLLECTION: CollectionSpec = CollectionSpec::new("projects");
    const NAME: &'static str = "Project";
    const LIST_FAILURE: &'static str = "Failed to fetch projects";
    const CREATE_FAILURE: &'static str = "Failed to create project";
    const DUPLICATE_MESSAGE: &'static str = "Project already exists";

    fn from_draft(draft: NewProject) -> Result<Self, ApiError> {
        Ok(Self {
            title: required(draft.title, "Title")?,
            description: required(draft.description, "Description")?,
            image: image_url(required(draft.image, "Image URL")?)?,
        })
    }
}

impl Patchable for Project {
    type Patch = ProjectPatch;

    fn patch_fields(patch: ProjectPatch) -> Result<Fields, ApiError> {
        let image = truthy(patch.image)
            .map(image_url)
            .transpose()?;

        Ok(patch_of([
            ("title", truthy(patch.title)),
            ("description", truthy(patch.description)),
            ("image", image),
        ]))
    }
}
