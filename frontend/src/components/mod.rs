mod agenda_page;
mod appointment_dialog;
mod charts;
mod confirm_dialog;
mod dashboard_page;
mod expense_dialog;
mod expense_history_modal;
mod expenses_page;
mod extra_income_dialog;
mod form_field;
mod layout;
mod loading;
mod login_page;
mod member_dialog;
mod members_page;
mod project_dialog;
mod renovation_item_dialog;
mod renovation_page;
mod settings_page;
mod shopping_page;
mod stat_card;

pub use agenda_page::AgendaPage;
pub use dashboard_page::DashboardPage;
pub use expenses_page::ExpensesPage;
pub use layout::{AppLayout, AuthLayout};
pub use loading::PageLoader;
pub use login_page::LoginPage;
pub use members_page::MembersPage;
pub use renovation_page::RenovationPage;
pub use settings_page::SettingsPage;
pub use shopping_page::ShoppingPage;
