pub mod board;
pub mod detail;
pub mod filter;
pub mod header;
pub mod profile;
pub mod toast;

use std::sync::Arc;

use crate::client::ProfileApi;
use crate::identity::IdentityProvider;
use crate::navigation::Navigator;
use crate::session::SessionStore;

/// External collaborators handed to the controllers at mount.
#[derive(Clone)]
pub struct Services {
    pub session: Arc<dyn SessionStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub api: Arc<dyn ProfileApi>,
    pub navigator: Arc<dyn Navigator>,
}
