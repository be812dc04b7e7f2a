pub const SIGN_IN_PATH: &str = "/sign-in";
pub const EDIT_PROFILE_PATH: &str = "/edit/:id";
pub const HACKATHONS_PATH: &str = "/hackathons";

/// A page change requested by a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The sign-in page, with the path to come back to afterwards.
    SignIn { return_to: String },
    EditProfile,
}

impl Route {
    /// Path the navigator should open.
    pub fn path(&self) -> &str {
        match self {
            Route::SignIn { .. } => SIGN_IN_PATH,
            Route::EditProfile => EDIT_PROFILE_PATH,
        }
    }
}
