use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub img: String,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn from_form(id: Uuid, form: PostForm) -> Self {
        Self {
            id,
            img: form.img,
            title: form.title,
            body: form.body,
        }
    }

    /// Replaces every editable field. The body loses surrounding whitespace.
    pub fn overwrite(&mut self, form: PostForm) {
        self.img = form.img;
        self.title = form.title;
        self.body = form.body.trim().to_string();
    }
}

/// The editable fields of a post, as submitted by the add and edit forms.
///
/// Absent form fields deserialize as empty strings so they are reported by
/// the validator rather than rejected by the extractor. The rules only run
/// on creation, see [`crate::validation::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PostForm {
    #[serde(default)]
    #[validate(regex(path = *crate::validation::IMAGE_URL, message = "The URL is not valid"))]
    pub img: String,
    #[serde(default)]
    #[validate(length(
        min = 5,
        max = 35,
        message = "The title must be between 5 and 35 characters long"
    ))]
    pub title: String,
    #[serde(default)]
    #[validate(length(
        min = 10,
        max = 225,
        message = "The body must be between 10 and 225 characters long"
    ))]
    pub body: String,
}

impl PostForm {
    pub fn new(img: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            img: img.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Parses a post id taken from a URL. Malformed ids are reported the same
/// way as ids that do not exist.
pub fn parse_id(raw: &str) -> crate::Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| crate::Error::NotFound)
}
