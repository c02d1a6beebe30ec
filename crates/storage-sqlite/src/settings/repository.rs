use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::AppSettingDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::app_settings::dsl::*;
use deskgrid_core::errors::Result;
use deskgrid_core::theme::PreferenceStore;

/// Key/value preferences kept in the `app_settings` table.
pub struct SqlitePreferenceStore {
    pool: Arc<DbPool>,
}

impl SqlitePreferenceStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqlitePreferenceStore { pool }
    }

    /// Every stored setting, ordered by key.
    pub fn all(&self) -> Result<Vec<AppSettingDB>> {
        let mut conn = get_connection(&self.pool)?;
        app_settings
            .order(setting_key.asc())
            .load::<AppSettingDB>(&mut conn)
            .into_core()
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        app_settings
            .filter(setting_key.eq(key))
            .select(setting_value)
            .first::<String>(&mut conn)
            .optional()
            .into_core()
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(app_settings)
            .values(&AppSettingDB {
                setting_key: key.to_string(),
                setting_value: value.to_string(),
            })
            .execute(&mut conn)
            .into_core()?;
        debug!("Stored setting '{}'", key);
        Ok(())
    }
}
