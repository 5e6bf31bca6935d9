//! Seed-on-startup bootstrap.
//!
//! The service ships with no public registration endpoint, so the first
//! admin account is created here when none exists yet.

use crate::principal::Role;
use crate::store::UserStore;
use crate::user::UserCreate;
use crate::user::api::UserFilter;

const ADMIN_NAME: &str = "Administrator";
const ADMIN_EMAIL: &str = "admin@headoffice.com";
const ADMIN_PASSWORD: &str = "Admin@123";
const ADMIN_CPF: &str = "84106700034";

/// Creates the default admin user unless an admin already exists.
/// Idempotent; failures are logged rather than aborting startup.
pub fn seed_admin(store: &dyn UserStore) {
    let admins = store.list(&UserFilter {
        role: Some(Role::Admin),
        ..Default::default()
    });
    if !admins.is_empty() {
        tracing::info!("Admin user already exists. Skipping seed.");
        return;
    }

    let created = UserCreate::new(
        String::from(ADMIN_NAME),
        String::from(ADMIN_EMAIL),
        ADMIN_PASSWORD,
        String::from(ADMIN_CPF),
        Role::Admin,
    )
    .and_then(|create| store.insert(create));

    match created {
        Ok(_) => {
            tracing::info!("Default admin user created successfully!");
            tracing::info!("Email: {ADMIN_EMAIL}");
            tracing::info!("Password: {ADMIN_PASSWORD}");
            tracing::warn!("Please change the default password after first login!");
        }
        Err(err) => tracing::error!("Error seeding admin user: {err}"),
    }
}
