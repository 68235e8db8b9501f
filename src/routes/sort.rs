use sea_orm::Order;

use crate::{
    db::entities::{alarm, user_login},
    error::AppError,
};

/// Maps a JSON property name onto a sortable column.
pub trait SortableColumn: Sized {
    fn from_property(property: &str) -> Option<Self>;
}

impl SortableColumn for alarm::Column {
    fn from_property(property: &str) -> Option<Self> {
        let column = match property {
            "id" => Self::Id,
            "time" => Self::Time,
            "alarmTime" => Self::AlarmTime,
            "enabled" => Self::Enabled,
            "sound" => Self::Sound,
            "label" => Self::Label,
            "repeatDays" => Self::RepeatDays,
            "snoozeEnabled" => Self::SnoozeEnabled,
            "snoozeDuration" => Self::SnoozeDuration,
            "userLogin" | "userLogin.id" => Self::UserLoginId,
            _ => return None,
        };
        Some(column)
    }
}

impl SortableColumn for user_login::Column {
    fn from_property(property: &str) -> Option<Self> {
        let column = match property {
            "id" => Self::Id,
            "username" => Self::Username,
            "password" => Self::Password,
            _ => return None,
        };
        Some(column)
    }
}

/// Parses every `sort` query parameter, in order.
///
/// Each value reads `prop[,prop...][,asc|desc]`; the direction applies to all
/// properties of that value and defaults to ascending.
pub fn parse_sort<C: SortableColumn>(
    params: &[(String, String)],
) -> Result<Vec<(C, Order)>, AppError> {
    let mut order = Vec::new();

    for (_, value) in params.iter().filter(|(key, _)| key == "sort") {
        let mut parts: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        let direction = if parts.len() > 1 {
            match parts.last().map(|last| last.to_ascii_lowercase()) {
                Some(last) if last == "asc" => {
                    parts.pop();
                    Order::Asc
                }
                Some(last) if last == "desc" => {
                    parts.pop();
                    Order::Desc
                }
                _ => Order::Asc,
            }
        } else {
            Order::Asc
        };

        for property in parts {
            let column = C::from_property(property).ok_or_else(|| {
                AppError::bad_request(format!("Unknown sort property '{property}'"))
            })?;
            order.push((column, direction.clone()));
        }
    }

    Ok(order)
}
