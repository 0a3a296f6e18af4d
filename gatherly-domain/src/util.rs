use validator::Validate;

use crate::{ServiceError, ServiceResult};

#[derive(Validate)]
struct SlugValidator {
    #[validate(length(min = 1))]
    slug: String,
}

pub fn validate_slug(slug: &str) -> ServiceResult<String> {
    let validator = SlugValidator {
        slug: slug.trim().to_string(),
    };
    if validator.validate().is_err() {
        return ServiceError::bad_request("Invalid or missing slug parameter");
    }
    Ok(validator.slug)
}
