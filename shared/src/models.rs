use serde::{Deserialize, Serialize};

/// Every successful API response wraps its body in `{ "data": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Structured error body the API uses for 4xx/5xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Authenticated account, as returned by `/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Recurring income attached to a family member beyond their salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraIncome {
    pub id: String,
    pub family_member_id: String,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    pub salary: f64,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub extra_incomes: Vec<ExtraIncome>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// How often an expense recurs. `Custom` entries are one-off amounts the
/// server archives month by month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseFrequency {
    Monthly,
    Bimonthly,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub frequency: ExpenseFrequency,
    pub category: String,
    /// Due day for monthly expenses, 1..=31.
    #[serde(default)]
    pub day_of_month: Option<u32>,
    /// Booking date for custom (one-off) expenses, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RenovationStatus {
    Planned,
    InProgress,
    Completed,
    OnHold,
}

/// Line item of a renovation project. `remaining` is computed server-side
/// and trusted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenovationItem {
    pub id: String,
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    pub total_price: f64,
    pub paid_amount: f64,
    pub remaining: f64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenovationProject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    pub status: RenovationStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub items: Vec<RenovationItem>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenovationSummaryProject {
    pub id: String,
    pub name: String,
    pub status: RenovationStatus,
    pub total_cost: f64,
    pub total_paid: f64,
    pub total_remaining: f64,
    pub item_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenovationTotals {
    pub total_cost: f64,
    pub total_paid: f64,
    pub total_remaining: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenovationSummary {
    pub projects: Vec<RenovationSummaryProject>,
    pub totals: RenovationTotals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationChannel {
    Sms,
    Whatsapp,
}

/// Reminder attached to an appointment; delivery state is server-owned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentNotification {
    pub id: String,
    pub appointment_id: String,
    pub minutes_before: u32,
    pub channel: NotificationChannel,
    pub recipient_phone: String,
    #[serde(default)]
    pub sent: bool,
    #[serde(default)]
    pub sent_at: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Slim member reference embedded in appointment responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// RFC 3339 timestamp.
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub category: String,
    #[serde(default)]
    pub member_id: Option<String>,
    #[serde(default)]
    pub member: Option<AppointmentMember>,
    #[serde(default)]
    pub notifications: Vec<AppointmentNotification>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Per-account notification defaults; seeds new reminder rows in the
/// appointment dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub id: String,
    #[serde(default)]
    pub default_phone: Option<String>,
    pub default_channel: NotificationChannel,
    pub default_minutes: u32,
    pub timezone: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSummary {
    pub total_salaries: f64,
    pub total_extra_incomes: f64,
    pub total: f64,
    pub member_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensesSummary {
    pub total_monthly: f64,
    pub count: u32,
    pub by_category: Vec<CategoryAmount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPeriod {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub income: IncomeSummary,
    pub expenses: ExpensesSummary,
    pub renovation: RenovationTotals,
    pub balance: f64,
    pub period: SummaryPeriod,
}

/// One bucket of the income/expense trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub label: String,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResponse {
    pub trend: Vec<TrendPoint>,
}

/// Archived month entry from `/expenses/history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryMonth {
    pub month: u32,
    pub year: i32,
    pub count: u32,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_unwraps_payload() {
        let json = r#"{"data":{"id":"u1","email":"a@b.it","name":"Anna"}}"#;
        let envelope: ApiEnvelope<User> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.name, "Anna");
    }

    #[test]
    fn test_expense_wire_shape_is_camel_case() {
        let json = r#"{
            "id": "e1",
            "name": "Mutuo",
            "amount": 650.0,
            "frequency": "BIMONTHLY",
            "category": "Casa",
            "dayOfMonth": 5,
            "isActive": true
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.frequency, ExpenseFrequency::Bimonthly);
        assert_eq!(expense.day_of_month, Some(5));
        assert!(expense.is_active);

        let back = serde_json::to_value(&expense).unwrap();
        assert_eq!(back["dayOfMonth"], 5);
        assert_eq!(back["frequency"], "BIMONTHLY");
    }

    #[test]
    fn test_renovation_status_wire_casing() {
        let status: RenovationStatus = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(status, RenovationStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&RenovationStatus::OnHold).unwrap(),
            "\"ON_HOLD\""
        );
    }

    #[test]
    fn test_appointment_optional_fields_default() {
        let json = r#"{
            "id": "a1",
            "title": "Visita",
            "startDate": "2026-03-02T10:00:00.000Z",
            "category": "medico"
        }"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert!(appointment.notifications.is_empty());
        assert!(appointment.member.is_none());
        assert!(appointment.end_date.is_none());
    }

    #[test]
    fn test_notification_channel_casing() {
        let channel: NotificationChannel = serde_json::from_str("\"WHATSAPP\"").unwrap();
        assert_eq!(channel, NotificationChannel::Whatsapp);
    }
}
