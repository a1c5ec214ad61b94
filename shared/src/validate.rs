//! Form validation. Each validator takes the raw dialog input strings and
//! either produces a ready-to-send payload or a struct of field-level
//! messages. A form that fails validation never reaches the network layer.

use crate::models::{ExpenseFrequency, NotificationChannel, RenovationStatus};
use crate::payloads::{
    AppointmentPayload, ExpensePayload, ExtraIncomePayload, LoginRequest, MemberPayload,
    NotificationPayload, ProjectPayload, RenovationItemPayload,
};

const MSG_REQUIRED_NAME: &str = "Nome obbligatorio";
const MSG_INVALID_AMOUNT: &str = "Importo non valido";

/// Parse a decimal amount accepting both `12,50` and `12.50`.
pub fn parse_decimal(input: &str) -> Option<f64> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn non_negative_amount(input: &str) -> Result<f64, String> {
    match parse_decimal(input) {
        Some(v) if v >= 0.0 => Ok(v),
        _ => Err(MSG_INVALID_AMOUNT.to_string()),
    }
}

fn optional(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemberFormErrors {
    pub name: Option<String>,
    pub salary: Option<String>,
}

pub fn validate_member(
    name: &str,
    role: &str,
    salary: &str,
) -> Result<MemberPayload, MemberFormErrors> {
    let mut errors = MemberFormErrors::default();
    if name.trim().is_empty() {
        errors.name = Some(MSG_REQUIRED_NAME.to_string());
    }
    let salary = match non_negative_amount(salary) {
        Ok(v) => v,
        Err(msg) => {
            errors.salary = Some(msg);
            0.0
        }
    };
    if errors != MemberFormErrors::default() {
        return Err(errors);
    }
    Ok(MemberPayload {
        name: name.trim().to_string(),
        role: optional(role),
        salary,
    })
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtraIncomeFormErrors {
    pub name: Option<String>,
    pub amount: Option<String>,
}

pub fn validate_extra_income(
    name: &str,
    amount: &str,
) -> Result<ExtraIncomePayload, ExtraIncomeFormErrors> {
    let mut errors = ExtraIncomeFormErrors::default();
    if name.trim().is_empty() {
        errors.name = Some(MSG_REQUIRED_NAME.to_string());
    }
    let amount = match non_negative_amount(amount) {
        Ok(v) => v,
        Err(msg) => {
            errors.amount = Some(msg);
            0.0
        }
    };
    if errors != ExtraIncomeFormErrors::default() {
        return Err(errors);
    }
    Ok(ExtraIncomePayload {
        name: name.trim().to_string(),
        amount,
    })
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseFormErrors {
    pub name: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub day_of_month: Option<String>,
}

pub fn validate_expense(
    name: &str,
    amount: &str,
    frequency: ExpenseFrequency,
    category: &str,
    day_of_month: &str,
) -> Result<ExpensePayload, ExpenseFormErrors> {
    let mut errors = ExpenseFormErrors::default();
    if name.trim().is_empty() {
        errors.name = Some(MSG_REQUIRED_NAME.to_string());
    }
    if category.trim().is_empty() {
        errors.category = Some("Categoria obbligatoria".to_string());
    }
    let amount = match non_negative_amount(amount) {
        Ok(v) => v,
        Err(msg) => {
            errors.amount = Some(msg);
            0.0
        }
    };

    // The due-day field only applies to monthly expenses; blank is fine.
    let day_of_month = match day_of_month.trim() {
        "" => None,
        raw => match raw.parse::<u32>() {
            Ok(day) if (1..=31).contains(&day) => Some(day),
            _ => {
                errors.day_of_month = Some("Giorno non valido (1-31)".to_string());
                None
            }
        },
    };

    if errors != ExpenseFormErrors::default() {
        return Err(errors);
    }
    Ok(ExpensePayload {
        name: name.trim().to_string(),
        amount,
        frequency,
        category: category.trim().to_string(),
        day_of_month: if frequency == ExpenseFrequency::Monthly {
            day_of_month
        } else {
            None
        },
        date: None,
        is_active: None,
    })
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectFormErrors {
    pub name: Option<String>,
}

pub fn validate_project(
    name: &str,
    company: &str,
    status: RenovationStatus,
    start_date: &str,
    end_date: &str,
) -> Result<ProjectPayload, ProjectFormErrors> {
    if name.trim().is_empty() {
        return Err(ProjectFormErrors {
            name: Some(MSG_REQUIRED_NAME.to_string()),
        });
    }
    Ok(ProjectPayload {
        name: name.trim().to_string(),
        company: optional(company),
        status: Some(status),
        start_date: optional(start_date),
        end_date: optional(end_date),
    })
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenovationItemFormErrors {
    pub name: Option<String>,
    pub total_price: Option<String>,
    pub paid_amount: Option<String>,
}

pub fn validate_renovation_item(
    name: &str,
    company: &str,
    total_price: &str,
    paid_amount: &str,
) -> Result<RenovationItemPayload, RenovationItemFormErrors> {
    let mut errors = RenovationItemFormErrors::default();
    if name.trim().is_empty() {
        errors.name = Some(MSG_REQUIRED_NAME.to_string());
    }
    let total_price = match non_negative_amount(total_price) {
        Ok(v) => v,
        Err(msg) => {
            errors.total_price = Some(msg);
            0.0
        }
    };
    let paid_amount = match non_negative_amount(paid_amount) {
        Ok(v) => v,
        Err(msg) => {
            errors.paid_amount = Some(msg);
            0.0
        }
    };
    if errors != RenovationItemFormErrors::default() {
        return Err(errors);
    }
    Ok(RenovationItemPayload {
        name: name.trim().to_string(),
        company: optional(company),
        total_price,
        paid_amount,
    })
}

/// One reminder row of the appointment form.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationInput {
    pub minutes_before: u32,
    pub channel: NotificationChannel,
    pub recipient_phone: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppointmentFormErrors {
    pub title: Option<String>,
    pub start_date: Option<String>,
    /// Indexes into the notification rows, parallel to the form.
    pub phones: Vec<Option<String>>,
}

impl AppointmentFormErrors {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.start_date.is_none()
            && self.phones.iter().all(Option::is_none)
    }
}

#[allow(clippy::too_many_arguments)]
pub fn validate_appointment(
    title: &str,
    category: &str,
    start_date: &str,
    end_date: &str,
    member_id: &str,
    description: &str,
    notes: &str,
    notifications: &[NotificationInput],
) -> Result<AppointmentPayload, AppointmentFormErrors> {
    let mut errors = AppointmentFormErrors {
        phones: vec![None; notifications.len()],
        ..Default::default()
    };
    if title.trim().is_empty() {
        errors.title = Some("Il titolo è obbligatorio".to_string());
    }
    if start_date.trim().is_empty() {
        errors.start_date = Some("La data di inizio è obbligatoria".to_string());
    }
    for (i, n) in notifications.iter().enumerate() {
        if n.recipient_phone.trim().is_empty() {
            errors.phones[i] = Some("Numero obbligatorio".to_string());
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(AppointmentPayload {
        title: title.trim().to_string(),
        description: optional(description),
        start_date: start_date.trim().to_string(),
        end_date: optional(end_date),
        notes: optional(notes),
        category: category.to_string(),
        member_id: optional(member_id),
        notifications: notifications
            .iter()
            .map(|n| NotificationPayload {
                minutes_before: n.minutes_before,
                channel: n.channel,
                recipient_phone: n.recipient_phone.trim().to_string(),
            })
            .collect(),
    })
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginFormErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, LoginFormErrors> {
    let mut errors = LoginFormErrors::default();
    let email = email.trim();
    // Same shallow shape check the login form always applied: something
    // before and after an `@`, with a dot in the domain part.
    let email_ok = email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
        .unwrap_or(false);
    if !email_ok {
        errors.email = Some("Email non valida".to_string());
    }
    if password.is_empty() {
        errors.password = Some("Password obbligatoria".to_string());
    }
    if errors != LoginFormErrors::default() {
        return Err(errors);
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Total entered when completing a shopping run: must parse and be > 0.
pub fn validate_shopping_total(input: &str) -> Result<f64, String> {
    match parse_decimal(input) {
        Some(v) if v > 0.0 => Ok(v),
        _ => Err("Inserisci un totale valido maggiore di zero".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_accepts_comma_and_dot() {
        assert_eq!(parse_decimal("12,50"), Some(12.5));
        assert_eq!(parse_decimal("12.50"), Some(12.5));
        assert_eq!(parse_decimal(" 7 "), Some(7.0));
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn test_validate_member() {
        let payload = validate_member(" Mario Rossi ", "", "2000").unwrap();
        assert_eq!(payload.name, "Mario Rossi");
        assert_eq!(payload.role, None);
        assert_eq!(payload.salary, 2000.0);

        let errors = validate_member("", "Coniuge", "-5").unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.salary.is_some());
    }

    #[test]
    fn test_validate_expense_day_of_month_bounds() {
        let errors =
            validate_expense("Mutuo", "650", ExpenseFrequency::Monthly, "Casa", "32").unwrap_err();
        assert!(errors.day_of_month.is_some());

        let payload =
            validate_expense("Mutuo", "650", ExpenseFrequency::Monthly, "Casa", "5").unwrap();
        assert_eq!(payload.day_of_month, Some(5));
    }

    #[test]
    fn test_validate_expense_drops_day_for_non_monthly() {
        let payload =
            validate_expense("Luce", "120", ExpenseFrequency::Bimonthly, "Utenze", "5").unwrap();
        assert_eq!(payload.day_of_month, None);
    }

    #[test]
    fn test_validate_expense_requires_category() {
        let errors =
            validate_expense("Luce", "120", ExpenseFrequency::Monthly, " ", "").unwrap_err();
        assert!(errors.category.is_some());
        assert!(errors.name.is_none());
    }

    #[test]
    fn test_validate_appointment_checks_notification_phones() {
        let rows = vec![
            NotificationInput {
                minutes_before: 60,
                channel: NotificationChannel::Whatsapp,
                recipient_phone: "+39 333 0000000".into(),
            },
            NotificationInput {
                minutes_before: 15,
                channel: NotificationChannel::Sms,
                recipient_phone: "  ".into(),
            },
        ];
        let errors = validate_appointment(
            "Dentista",
            "medico",
            "2026-09-01T10:00",
            "",
            "",
            "",
            "",
            &rows,
        )
        .unwrap_err();
        assert_eq!(errors.phones[0], None);
        assert!(errors.phones[1].is_some());
    }

    #[test]
    fn test_validate_appointment_requires_title_and_start() {
        let errors = validate_appointment("", "altro", "", "", "", "", "", &[]).unwrap_err();
        assert!(errors.title.is_some());
        assert!(errors.start_date.is_some());
    }

    #[test]
    fn test_validate_login_email_shape() {
        assert!(validate_login("mario@esempio.it", "pw").is_ok());
        assert!(validate_login("mario@", "pw").is_err());
        assert!(validate_login("mario", "pw").is_err());
        assert!(validate_login("mario@esempio.it", "").is_err());
    }

    #[test]
    fn test_validate_shopping_total_rejects_non_positive() {
        assert_eq!(validate_shopping_total("12,50"), Ok(12.5));
        assert!(validate_shopping_total("0").is_err());
        assert!(validate_shopping_total("-3").is_err());
        assert!(validate_shopping_total("x").is_err());
    }
}
