//! Port for user-specific axis naming.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::catalog::Axis;
use crate::domain::foundation::UserId;

/// Reads per-user axis name overrides.
///
/// Naming is cosmetic, so lookups never fail: implementations swallow
/// storage errors (logging them) and callers fall back to the built-in
/// axis names.
#[async_trait]
pub trait AxisMetaReader: Send + Sync {
    /// The user's name overrides, keyed by canonical axis code. Axes without
    /// an override are absent.
    async fn axis_names(&self, user_id: UserId) -> HashMap<String, String>;

    /// Display name for one axis code. Falls back to the built-in name, or
    /// to the code itself when the code is unknown.
    async fn axis_name(&self, user_id: UserId, code: &str) -> String {
        let overrides = self.axis_names(user_id).await;
        if let Some(name) = overrides.get(code) {
            return name.clone();
        }
        match Axis::from_code(code) {
            Some(axis) => axis.default_name().to_string(),
            None => code.to_string(),
        }
    }
}
