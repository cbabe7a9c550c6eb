//! User profile model for the settings page

use serde::{Deserialize, Serialize};

/// Profile stored under the `user` preference key after login.
///
/// There is no authentication behind this; the login flag is an unguarded
/// boolean and the profile is display data only.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub farm_location: Option<String>,
}
