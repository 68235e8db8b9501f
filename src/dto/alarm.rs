use chrono::{DateTime, FixedOffset, NaiveDate};
use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::db::entities::alarm;

/// Reference to the owning login as it appears on the wire: `{"id": N}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLoginRef {
    pub id: i64,
}

/// Wire representation of an alarm. Every field is optional so the same type
/// serves create, full update, and merge-patch bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub alarm_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub sound: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub repeat_days: Option<NaiveDate>,
    #[serde(default)]
    pub snooze_enabled: Option<bool>,
    #[serde(default)]
    pub snooze_duration: Option<i32>,
    #[serde(default)]
    pub user_login: Option<UserLoginRef>,
}

impl AlarmDto {
    pub fn owner_id(&self) -> Option<i64> {
        self.user_login.map(|owner| owner.id)
    }

    /// New row; the id is left for the DAO to generate.
    pub fn into_active_model(self) -> alarm::ActiveModel {
        let mut active = alarm::ActiveModel {
            id: NotSet,
            ..Default::default()
        };
        self.overwrite(&mut active);
        active
    }

    /// Full replacement: every column takes the payload value, nulls included.
    pub fn overwrite(self, active: &mut alarm::ActiveModel) {
        let owner = self.owner_id();
        active.time = Set(self.time);
        active.alarm_time = Set(self.alarm_time);
        active.enabled = Set(self.enabled);
        active.sound = Set(self.sound);
        active.label = Set(self.label);
        active.repeat_days = Set(self.repeat_days);
        active.snooze_enabled = Set(self.snooze_enabled);
        active.snooze_duration = Set(self.snooze_duration);
        active.user_login_id = Set(owner);
    }

    /// Merge-patch: only present fields are written. The owner is never touched.
    pub fn merge_into(self, active: &mut alarm::ActiveModel) {
        if let Some(time) = self.time {
            active.time = Set(Some(time));
        }
        if let Some(alarm_time) = self.alarm_time {
            active.alarm_time = Set(Some(alarm_time));
        }
        if let Some(enabled) = self.enabled {
            active.enabled = Set(Some(enabled));
        }
        if let Some(sound) = self.sound {
            active.sound = Set(Some(sound));
        }
        if let Some(label) = self.label {
            active.label = Set(Some(label));
        }
        if let Some(repeat_days) = self.repeat_days {
            active.repeat_days = Set(Some(repeat_days));
        }
        if let Some(snooze_enabled) = self.snooze_enabled {
            active.snooze_enabled = Set(Some(snooze_enabled));
        }
        if let Some(snooze_duration) = self.snooze_duration {
            active.snooze_duration = Set(Some(snooze_duration));
        }
    }
}

impl From<alarm::Model> for AlarmDto {
    fn from(model: alarm::Model) -> Self {
        Self {
            id: Some(model.id),
            time: model.time,
            alarm_time: model.alarm_time,
            enabled: model.enabled,
            sound: model.sound,
            label: model.label,
            repeat_days: model.repeat_days,
            snooze_enabled: model.snooze_enabled,
            snooze_duration: model.snooze_duration,
            user_login: model.user_login_id.map(|id| UserLoginRef { id }),
        }
    }
}

/// Identity equality: equal only when both carry the same id.
///
/// A value without an id is unequal even to itself, so this is not `Eq`.
impl PartialEq for AlarmDto {
    fn eq(&self, other: &Self) -> bool {
        self.id.is_some() && self.id == other.id
    }
}
