//! Author shape joined into notice list views.
//!
//! User rows are owned by the account subsystem; the notice board only
//! reads them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub user_id: String,
    pub user_name: String,
}
