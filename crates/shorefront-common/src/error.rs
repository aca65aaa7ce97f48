//! Error types for Shorefront
//!
//! Services return `anyhow::Result`; the HTTP layer downcasts to
//! `ShorefrontError` to pick a status code and message.

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum ShorefrontError {
    #[error("caused: {0}")]
    IllegalArgument(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("a page with this slug already exists")]
    SlugConflict(String),

    #[error("homepage cannot be deleted")]
    HomePageProtected,

    #[error("no admin user found")]
    NoAdminUser,

    #[error("sections must share a single pageId scope")]
    MixedScope,

    #[error("commerce API error: {0}")]
    CommerceError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorefront_error_display() {
        let err = ShorefrontError::IllegalArgument("invalid param".to_string());
        assert_eq!(format!("{}", err), "caused: invalid param");

        let err = ShorefrontError::NotFound("page".to_string());
        assert_eq!(format!("{}", err), "page not found");

        let err = ShorefrontError::HomePageProtected;
        assert_eq!(format!("{}", err), "homepage cannot be deleted");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = ShorefrontError::NoAdminUser.into();
        assert!(matches!(
            err.downcast_ref::<ShorefrontError>(),
            Some(ShorefrontError::NoAdminUser)
        ));
    }
}
