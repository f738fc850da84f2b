//! `${VAR}` and `${VAR:-default}` expansion for `navtree.toml` values.
//!
//! Only the braced form is recognized; a bare `$VAR` is kept as written.

use crate::ConfigError;

/// A variable referenced without a default is not set.
struct UnsetVar;

/// Expand references in one config value, naming `field` on failure.
pub(crate) fn expand_value(field: &str, value: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |name: &str| -> Result<Option<String>, UnsetVar> {
        std::env::var(name).map(Some).map_err(|_| UnsetVar)
    };
    let expanded =
        shellexpand::env_with_context(value, lookup).map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", err.var_name),
        })?;
    Ok(expanded.into_owned())
}

/// Expand an optional value in place.
pub(crate) fn expand_in_place(field: &str, value: &mut Option<String>) -> Result<(), ConfigError> {
    if let Some(raw) = value.as_mut() {
        *raw = expand_value(field, raw)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_from_env() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NAVTREE_TEST_PROJECT", "Shkyera");
        }
        let result = expand_value("project.title", "${NAVTREE_TEST_PROJECT} Grad").unwrap();
        assert_eq!(result, "Shkyera Grad");
        unsafe {
            std::env::remove_var("NAVTREE_TEST_PROJECT");
        }
    }

    #[test]
    fn test_output_dir_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NAVTREE_TEST_UNSET");
        }
        let result = expand_value("output.dir", "${NAVTREE_TEST_UNSET:-html}/nav").unwrap();
        assert_eq!(result, "html/nav");
    }

    #[test]
    fn test_unset_var_names_field_and_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NAVTREE_TEST_MISSING");
        }
        let err = expand_value("source.outline", "${NAVTREE_TEST_MISSING}").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert_eq!(
            err.to_string(),
            "Environment variable error in source.outline: ${NAVTREE_TEST_MISSING} not set"
        );
    }

    #[test]
    fn test_bare_dollar_is_kept() {
        let result = expand_value("project.title", "Costs $5").unwrap();
        assert_eq!(result, "Costs $5");
    }

    #[test]
    fn test_in_place_skips_absent_value() {
        let mut value = None;
        expand_in_place("project.index", &mut value).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_in_place_replaces_value() {
        let mut value = Some("${NAVTREE_TEST_NO_INDEX:-index.html}".to_owned());
        expand_in_place("project.index", &mut value).unwrap();
        assert_eq!(value.as_deref(), Some("index.html"));
    }
}
