//! Request bodies sent to the API. One type per endpoint family, all
//! camelCase on the wire. Optional fields are omitted entirely when unset
//! so partial updates do not clobber server state.

use serde::{Deserialize, Serialize};

use crate::models::{ExpenseFrequency, NotificationChannel, RenovationStatus, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraIncomePayload {
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePayload {
    pub name: String,
    pub amount: f64,
    pub frequency: ExpenseFrequency,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RenovationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenovationItemPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub total_price: f64,
    pub paid_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub minutes_before: u32,
    pub channel: NotificationChannel,
    pub recipient_phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// RFC 3339 timestamp.
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    pub notifications: Vec<NotificationPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_phone: Option<String>,
    pub default_channel: NotificationChannel,
    pub default_minutes: u32,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestNotificationRequest {
    pub phone: String,
    pub channel: NotificationChannel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestNotificationResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_payload_omits_unset_fields() {
        let payload = ExpensePayload {
            name: "Luce".into(),
            amount: 80.0,
            frequency: ExpenseFrequency::Bimonthly,
            category: "Utenze".into(),
            day_of_month: None,
            date: None,
            is_active: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("dayOfMonth").is_none());
        assert!(json.get("date").is_none());
        assert!(json.get("isActive").is_none());
        assert_eq!(json["frequency"], "BIMONTHLY");
    }

    #[test]
    fn test_appointment_payload_embeds_notifications() {
        let payload = AppointmentPayload {
            title: "Dentista".into(),
            description: None,
            start_date: "2026-04-01T09:30:00.000Z".into(),
            end_date: None,
            notes: None,
            category: "medico".into(),
            member_id: Some("m1".into()),
            notifications: vec![NotificationPayload {
                minutes_before: 60,
                channel: NotificationChannel::Whatsapp,
                recipient_phone: "+39 333 0000000".into(),
            }],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["notifications"][0]["minutesBefore"], 60);
        assert_eq!(json["notifications"][0]["channel"], "WHATSAPP");
        assert_eq!(json["memberId"], "m1");
    }
}
