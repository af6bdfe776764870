use serde::{Deserialize, Serialize};
use validator::Validate;

/// An organization a private contest is restricted to.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct OrganizationDto {
    /// URL slug of the organization
    pub key: String,
    #[validate(length(min = 1, message = "Organization name is required"))]
    pub name: String,
}

/// A class (course group) a private contest is restricted to.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct ClassDto {
    /// URL slug of the class
    pub key: String,
    #[validate(length(min = 1, message = "Class name is required"))]
    pub name: String,
}

/// A descriptive tag attached to a contest.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct TagDto {
    #[validate(length(min = 1, message = "Tag name is required"))]
    pub name: String,
    /// CSS color for the tag chip, e.g. "#e74c3c"
    #[serde(default)]
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use validator::Validate;

    #[test]
    fn test_tag_color_defaults_to_none() {
        let tag: TagDto = serde_json::from_str(r#"{ "name": "icpc" }"#).unwrap();
        assert_eq!(tag.name, "icpc");
        assert!(tag.color.is_none());
    }

    #[test]
    fn test_organization_requires_name() {
        let org = OrganizationDto {
            key: "north-campus".to_string(),
            name: String::new(),
        };
        assert!(org.validate().is_err());
    }
}
