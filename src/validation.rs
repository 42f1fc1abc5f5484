//! Field rules a post must satisfy before it is created.
//!
//! The rules themselves are declared on [`PostForm`]; this module turns the
//! resulting errors into display messages in field order.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationErrors};

use crate::models::PostForm;

pub const INVALID_URL: &str = "The URL is not valid";

/// Scheme, optional `www.`, host with a TLD, then a path that must end in a
/// supported image extension.
pub static IMAGE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*\.(jpeg|jpg|gif|png)$)")
        .expect("image url pattern compiles")
});

const FIELD_ORDER: [&str; 3] = ["img", "title", "body"];

pub fn is_image_url(value: &str) -> bool {
    IMAGE_URL.is_match(value)
}

/// Checks every field of `form` and returns one message per violated rule,
/// in `img`, `title`, `body` order.
pub fn validate(form: &PostForm) -> Result<(), Vec<String>> {
    form.validate().map_err(|errors| messages(&errors))
}

fn messages(errors: &ValidationErrors) -> Vec<String> {
    let fields = errors.field_errors();

    FIELD_ORDER
        .iter()
        .filter_map(|field| fields.get(*field).and_then(|errors| errors.first()))
        .map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => error.code.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> PostForm {
        PostForm::new("http://x.com/a.png", "Hello World", "This is a valid body.")
    }

    #[test]
    fn test_valid_post() {
        assert_eq!(validate(&valid()), Ok(()));
    }

    #[test]
    fn test_image_urls() {
        for url in [
            "http://x.com/a.png",
            "https://x.com/a.jpg",
            "https://www.example.org/images/cat.jpeg",
            "http://cdn.example.com/path/to/anim.gif",
            "https://example.com/a/b?c=1&d=2/photo.png",
        ] {
            assert!(is_image_url(url), "{} should be accepted", url);
        }

        for url in [
            "",
            "x.com/a.png",
            "ftp://x.com/a.png",
            "http://x.com/a.txt",
            "http://x.com/a.PNG",
            "http://x.com/a.png?size=large",
            "http://localhost/a.png",
            "http://x.com/",
        ] {
            assert!(!is_image_url(url), "{} should be rejected", url);
        }
    }

    #[test]
    fn test_invalid_url_only() {
        let form = PostForm {
            img: "http://x.com/a.txt".into(),
            ..valid()
        };
        assert_eq!(validate(&form), Err(vec![INVALID_URL.to_string()]));
    }

    #[test]
    fn test_title_bounds() {
        for title in ["Hello".to_string(), "t".repeat(35)] {
            let form = PostForm {
                title,
                ..valid()
            };
            assert_eq!(validate(&form), Ok(()));
        }

        for title in ["Hell".to_string(), "t".repeat(36)] {
            let form = PostForm {
                title,
                ..valid()
            };
            assert_eq!(
                validate(&form),
                Err(vec!["The title must be between 5 and 35 characters long".to_string()])
            );
        }
    }

    #[test]
    fn test_body_bounds() {
        for body in ["0123456789".to_string(), "b".repeat(225)] {
            let form = PostForm {
                body,
                ..valid()
            };
            assert_eq!(validate(&form), Ok(()));
        }

        for body in ["012345678".to_string(), "b".repeat(226)] {
            let form = PostForm {
                body,
                ..valid()
            };
            assert_eq!(
                validate(&form),
                Err(vec!["The body must be between 10 and 225 characters long".to_string()])
            );
        }
    }

    #[test]
    fn test_length_counts_characters() {
        let form = PostForm {
            title: "ééééé".into(),
            ..valid()
        };
        assert_eq!(validate(&form), Ok(()));
    }

    #[test]
    fn test_length_ignores_utf16_width() {
        // Three astral characters are six UTF-16 units but only three chars.
        let form = PostForm {
            title: "\u{1F600}\u{1F600}\u{1F600}".into(),
            ..valid()
        };
        assert_eq!(
            validate(&form),
            Err(vec!["The title must be between 5 and 35 characters long".to_string()])
        );
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            validate(&PostForm::default()),
            Err(vec![
                INVALID_URL.to_string(),
                "The title must be between 5 and 35 characters long".to_string(),
                "The body must be between 10 and 225 characters long".to_string(),
            ])
        );
    }

    #[test]
    fn test_all_rules_reported_in_field_order() {
        let form = PostForm::new("http://x.com/a.txt", "Hi", "short");
        assert_eq!(
            validate(&form),
            Err(vec![
                INVALID_URL.to_string(),
                "The title must be between 5 and 35 characters long".to_string(),
                "The body must be between 10 and 225 characters long".to_string(),
            ])
        );
    }
}
