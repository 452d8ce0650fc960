//! Path validation and breadcrumb helpers

use super::errors::NavigationError;
use crate::api::LocationFragment;
use crate::router::ROOT;

/// Check a folder path before it is used as a navigation target
///
/// Paths must be non-empty, free of control characters, and must not start
/// with `#` (the location fragment drops a leading `#`).
///
/// # Examples
/// ```
/// use albumtui::logic::path::validate_path;
///
/// assert!(validate_path("/").is_ok());
/// assert!(validate_path("2020/trip/").is_ok());
/// assert!(validate_path("").is_err());
/// assert!(validate_path("2020/#1 party/").is_ok());
/// assert!(validate_path("#a/").is_err());
/// ```
pub fn validate_path(path: &str) -> Result<(), NavigationError> {
    if path.is_empty() {
        return Err(NavigationError::InvalidArgument {
            argument: "path",
            reason: "must not be empty",
        });
    }
    if path.chars().any(char::is_control) {
        return Err(NavigationError::InvalidArgument {
            argument: "path",
            reason: "must not contain control characters",
        });
    }
    if path.starts_with('#') {
        return Err(NavigationError::InvalidArgument {
            argument: "path",
            reason: "must not start with '#'",
        });
    }
    Ok(())
}

/// Check an image name before it is looked up in the listing
pub fn validate_image_name(name: &str) -> Result<(), NavigationError> {
    if name.is_empty() {
        return Err(NavigationError::InvalidArgument {
            argument: "name",
            reason: "must not be empty",
        });
    }
    if name.contains('/') {
        return Err(NavigationError::InvalidArgument {
            argument: "name",
            reason: "must not contain '/'",
        });
    }
    if name.chars().any(char::is_control) {
        return Err(NavigationError::InvalidArgument {
            argument: "name",
            reason: "must not contain control characters",
        });
    }
    Ok(())
}

/// Path of the folder one level above the current one
///
/// Uses the second-to-last breadcrumb segment; at the first level (or with no
/// breadcrumb) the parent is the root.
pub fn parent_path(location: &[LocationFragment]) -> &str {
    match location.len() {
        0 | 1 => ROOT,
        len => location[len - 2].path.as_str(),
    }
}

/// Breadcrumb targets in display order: "Home" followed by every segment
pub fn breadcrumb_targets(location: &[LocationFragment]) -> Vec<(&str, &str)> {
    std::iter::once(("Home", ROOT))
        .chain(
            location
                .iter()
                .map(|fragment| (fragment.name.as_str(), fragment.path.as_str())),
        )
        .collect()
}
