use super::*;
use chrono::NaiveDate;
use serde_json::json;

#[test]
fn finance_record_sign_follows_kind() {
    let expense: FinanceRecord = serde_json::from_value(json!({
        "_id": "f1",
        "type": "expense",
        "category": "Oficina",
        "amount": 120.5,
        "date": "2024-02-01",
        "status": "approved",
    }))
    .unwrap();
    assert_eq!(expense.kind, FinanceKind::Expense);
    assert_eq!(expense.status, ApprovalStatus::Approved);
    assert_eq!(expense.signed_amount(), -120.5);
}

#[test]
fn provider_contract_expiry() {
    let provider: ServiceProvider = serde_json::from_value(json!({
        "_id": "p1",
        "name": "Telco",
        "type": "telecom",
        "contactInfo": {"email": "ventas@telco.example"},
        "contractDetails": {"endDate": "2024-01-31", "monthlyFee": 99.0},
    }))
    .unwrap();

    assert_eq!(provider.kind, ProviderKind::Telecom);
    assert_eq!(provider.status, ProviderStatus::Active);
    let feb = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let jan = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    assert!(provider.contract_expired_on(feb));
    assert!(!provider.contract_expired_on(jan));
}

#[test]
fn dashboard_net_income() {
    let stats: DashboardStats =
        serde_json::from_value(json!({"totalRevenue": 1000.0, "totalExpenses": 250.0})).unwrap();
    assert_eq!(stats.net_income(), 750.0);
    assert_eq!(stats.total_employees, 0);
}

#[test]
fn user_role_defaults_to_employee() {
    let user: User = serde_json::from_value(json!({"_id": "u1", "email": "a@b.c"})).unwrap();
    assert_eq!(user.role, UserRole::Employee);
}
