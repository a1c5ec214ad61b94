//! Derived aggregation over loaded collections: monthly-equivalent expense
//! amounts, category grouping, household income, renovation progress.
//! Everything here is a pure function of its inputs.

use crate::models::{Expense, ExpenseFrequency, FamilyMember, RenovationProject};

/// Amount of an expense normalized to a per-month figure. Bimonthly bills
/// are split across the two months they cover; custom (one-off) entries
/// count in full for the month they land in.
pub fn monthly_equivalent(expense: &Expense) -> f64 {
    match expense.frequency {
        ExpenseFrequency::Monthly | ExpenseFrequency::Custom => expense.amount,
        ExpenseFrequency::Bimonthly => expense.amount / 2.0,
    }
}

/// Sum of monthly-equivalents over a slice of expenses.
pub fn monthly_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(monthly_equivalent).sum()
}

/// Split a collection into (active, inactive) buckets, preserving order.
pub fn partition_active(expenses: &[Expense]) -> (Vec<Expense>, Vec<Expense>) {
    expenses.iter().cloned().partition(|e| e.is_active)
}

/// Expenses of one category with their monthly-equivalent subtotal.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub expenses: Vec<Expense>,
    pub monthly_total: f64,
}

/// Group expenses by category, categories sorted alphabetically. Callers
/// pass the active bucket; inactive expenses are presented separately.
pub fn group_by_category(expenses: &[Expense]) -> Vec<CategoryGroup> {
    let mut categories: Vec<String> = expenses.iter().map(|e| e.category.clone()).collect();
    categories.sort();
    categories.dedup();

    categories
        .into_iter()
        .map(|category| {
            let group: Vec<Expense> = expenses
                .iter()
                .filter(|e| e.category == category)
                .cloned()
                .collect();
            let monthly_total = monthly_total(&group);
            CategoryGroup {
                category,
                expenses: group,
                monthly_total,
            }
        })
        .collect()
}

/// Sum of a member's extra incomes.
pub fn extra_income_total(member: &FamilyMember) -> f64 {
    member.extra_incomes.iter().map(|i| i.amount).sum()
}

/// Salary plus extra incomes, per month.
pub fn member_total_income(member: &FamilyMember) -> f64 {
    member.salary + extra_income_total(member)
}

/// Total monthly income across the household.
pub fn household_income(members: &[FamilyMember]) -> f64 {
    members.iter().map(member_total_income).sum()
}

/// Payment progress of a renovation project, derived from its items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectProgress {
    pub total_cost: f64,
    pub total_paid: f64,
    pub remaining: f64,
    /// `100 * paid / cost`; 0 when the cost is 0. Deliberately not capped
    /// at 100: overpayments show as >100%.
    pub percent_paid: f64,
}

pub fn project_progress(project: &RenovationProject) -> ProjectProgress {
    let total_cost: f64 = project.items.iter().map(|i| i.total_price).sum();
    let total_paid: f64 = project.items.iter().map(|i| i.paid_amount).sum();
    progress_from_totals(total_cost, total_paid)
}

/// Grand totals across every project.
pub fn renovation_totals(projects: &[RenovationProject]) -> ProjectProgress {
    let total_cost: f64 = projects
        .iter()
        .flat_map(|p| p.items.iter())
        .map(|i| i.total_price)
        .sum();
    let total_paid: f64 = projects
        .iter()
        .flat_map(|p| p.items.iter())
        .map(|i| i.paid_amount)
        .sum();
    progress_from_totals(total_cost, total_paid)
}

fn progress_from_totals(total_cost: f64, total_paid: f64) -> ProjectProgress {
    let percent_paid = if total_cost > 0.0 {
        total_paid / total_cost * 100.0
    } else {
        0.0
    };
    ProjectProgress {
        total_cost,
        total_paid,
        remaining: total_cost - total_paid,
        percent_paid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExtraIncome, RenovationItem, RenovationStatus};

    fn expense(name: &str, amount: f64, frequency: ExpenseFrequency, category: &str) -> Expense {
        Expense {
            id: format!("exp-{name}"),
            name: name.to_string(),
            amount,
            frequency,
            category: category.to_string(),
            day_of_month: None,
            date: None,
            is_active: true,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn item(total_price: f64, paid_amount: f64) -> RenovationItem {
        RenovationItem {
            id: "i1".into(),
            project_id: "p1".into(),
            name: "Piastrelle".into(),
            company: None,
            total_price,
            paid_amount,
            remaining: total_price - paid_amount,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn project(items: Vec<RenovationItem>) -> RenovationProject {
        RenovationProject {
            id: "p1".into(),
            name: "Bagno".into(),
            company: None,
            status: RenovationStatus::InProgress,
            start_date: None,
            end_date: None,
            items,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_monthly_equivalent_halves_bimonthly_only() {
        let monthly = expense("Mutuo", 650.0, ExpenseFrequency::Monthly, "Casa");
        let bimonthly = expense("Luce", 120.0, ExpenseFrequency::Bimonthly, "Utenze");
        let custom = expense("Spesa", 42.5, ExpenseFrequency::Custom, "spesa");

        assert_eq!(monthly_equivalent(&monthly), 650.0);
        assert_eq!(monthly_equivalent(&bimonthly), 60.0);
        assert_eq!(monthly_equivalent(&custom), 42.5);
    }

    #[test]
    fn test_group_by_category_sorted_with_subtotals() {
        let expenses = vec![
            expense("Luce", 120.0, ExpenseFrequency::Bimonthly, "Utenze"),
            expense("Mutuo", 650.0, ExpenseFrequency::Monthly, "Casa"),
            expense("Gas", 90.0, ExpenseFrequency::Bimonthly, "Utenze"),
        ];
        let groups = group_by_category(&expenses);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Casa");
        assert_eq!(groups[0].monthly_total, 650.0);
        assert_eq!(groups[1].category, "Utenze");
        assert_eq!(groups[1].monthly_total, 105.0);
        assert_eq!(groups[1].expenses.len(), 2);
    }

    #[test]
    fn test_partition_active_keeps_order() {
        let mut inactive = expense("Palestra", 30.0, ExpenseFrequency::Monthly, "Benessere");
        inactive.is_active = false;
        let expenses = vec![
            expense("Mutuo", 650.0, ExpenseFrequency::Monthly, "Casa"),
            inactive.clone(),
            expense("Luce", 120.0, ExpenseFrequency::Bimonthly, "Utenze"),
        ];
        let (active, inactive_bucket) = partition_active(&expenses);
        assert_eq!(active.len(), 2);
        assert_eq!(inactive_bucket, vec![inactive]);
    }

    #[test]
    fn test_household_income_sums_salary_and_extras() {
        let member = FamilyMember {
            id: "m1".into(),
            name: "Mario".into(),
            role: None,
            salary: 2000.0,
            phone: None,
            extra_incomes: vec![
                ExtraIncome {
                    id: "x1".into(),
                    family_member_id: "m1".into(),
                    name: "Affitto box".into(),
                    amount: 150.0,
                    created_at: String::new(),
                    updated_at: String::new(),
                },
                ExtraIncome {
                    id: "x2".into(),
                    family_member_id: "m1".into(),
                    name: "Ripetizioni".into(),
                    amount: 100.0,
                    created_at: String::new(),
                    updated_at: String::new(),
                },
            ],
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert_eq!(member_total_income(&member), 2250.0);
        assert_eq!(household_income(&[member]), 2250.0);
    }

    #[test]
    fn test_project_progress_totals_and_percentage() {
        let p = project(vec![item(1000.0, 400.0), item(500.0, 350.0)]);
        let progress = project_progress(&p);
        assert_eq!(progress.total_cost, 1500.0);
        assert_eq!(progress.total_paid, 750.0);
        assert_eq!(progress.remaining, 750.0);
        assert_eq!(progress.percent_paid, 50.0);
    }

    #[test]
    fn test_project_progress_zero_cost_is_zero_percent() {
        let p = project(vec![]);
        assert_eq!(project_progress(&p).percent_paid, 0.0);
    }

    #[test]
    fn test_project_progress_overpayment_exceeds_hundred() {
        let p = project(vec![item(100.0, 150.0)]);
        let progress = project_progress(&p);
        assert_eq!(progress.percent_paid, 150.0);
        assert_eq!(progress.remaining, -50.0);
    }

    #[test]
    fn test_renovation_totals_across_projects() {
        let projects = vec![
            project(vec![item(1000.0, 400.0)]),
            project(vec![item(200.0, 200.0)]),
        ];
        let totals = renovation_totals(&projects);
        assert_eq!(totals.total_cost, 1200.0);
        assert_eq!(totals.total_paid, 600.0);
        assert_eq!(totals.percent_paid, 50.0);
    }
}
