//! Generation options.

use url::Url;

use crate::error::GenError;

/// Validated options for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    package_name: String,
    base_url: String,
}

impl GenerateOptions {
    /// Validate and build options.
    ///
    /// The package name must start with an upper-case ASCII letter followed by
    /// ASCII letters, digits or underscores. The base URL must be absolute,
    /// have a host, and end in `/` so function names can be appended to it.
    pub fn new(package_name: &str, base_url: &str) -> Result<Self, GenError> {
        check_package_name(package_name)?;
        check_base_url(base_url)?;
        Ok(Self {
            package_name: package_name.to_string(),
            base_url: base_url.to_string(),
        })
    }

    /// Name used in the generated package clause.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Default base URL of the generated client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn check_package_name(name: &str) -> Result<(), GenError> {
    let invalid = |reason| GenError::InvalidPackageName {
        name: name.to_string(),
        reason,
    };
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(invalid("must not be empty"));
    };
    if !first.is_ascii_uppercase() {
        return Err(invalid("must start with an upper-case letter"));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid("must only contain letters, digits and underscores"));
    }
    Ok(())
}

fn check_base_url(raw: &str) -> Result<(), GenError> {
    let invalid = |reason: String| GenError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !url.has_host() {
        return Err(invalid("missing host".into()));
    }
    if !raw.ends_with('/') {
        return Err(invalid("must end with a slash".into()));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_options() {
        let options = GenerateOptions::new("Example", "https://example.com/example/").unwrap();
        assert_eq!(options.package_name(), "Example");
        assert_eq!(options.base_url(), "https://example.com/example/");
        assert!(GenerateOptions::new("My_API2", "http://localhost:8080/").is_ok());
    }

    #[test]
    fn test_invalid_package_names() {
        for name in ["", "example", "1Example", "Ex-ample", "Ex ample"] {
            let err = GenerateOptions::new(name, "https://example.com/").unwrap_err();
            assert!(
                matches!(err, GenError::InvalidPackageName { .. }),
                "{name:?}: {err}"
            );
        }
    }

    #[test]
    fn test_invalid_base_urls() {
        for url in [
            "",
            "example.com/api/",
            "https://example.com/api",
            "mailto:someone@example.com/",
            "not a url/",
        ] {
            let err = GenerateOptions::new("Example", url).unwrap_err();
            assert!(matches!(err, GenError::InvalidBaseUrl { .. }), "{url:?}: {err}");
        }
    }
}
