use anyhow::Context;
use tracing::info;

use super::model::User;
use super::repo::UserStore;
use crate::profile::model::DietaryProfile;

/// Creates the first user with default dietary bounds when the store is empty.
///
/// Returns the created user, or `None` if users already existed.
pub async fn seed_default_user(store: &dyn UserStore) -> anyhow::Result<Option<User>> {
    let existing = store.get_all_users().await.context("list users")?;
    if !existing.is_empty() {
        return Ok(None);
    }
    let user = User::new(DietaryProfile::with_defaults());
    store.save(user.clone()).await.context("save default user")?;
    info!(user_id = %user.id, "seeded default user");
    Ok(Some(user))
}
