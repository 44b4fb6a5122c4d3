//! Record types shared with the backend.

pub mod account;
pub mod date;
pub mod employee;
pub mod finance;
pub mod hr_record;
pub mod provider;

pub use account::{DashboardStats, User, UserRole};
pub use employee::{Benefits, Employee, EmployeeDirectory, EmployeeStatus};
pub use finance::{ApprovalStatus, FinanceKind, FinanceRecord};
pub use hr_record::{
    AttendanceStatus, EmbeddedEmployee, EmployeeRef, EvaluationStatus, EventStatus, HrDetails,
    HrKind, HrRecord, HrStatistics, Rating, StatusLabel, UnknownStatus, VacationStatus,
};
pub use provider::{ContactInfo, ContractDetails, ProviderKind, ProviderStatus, ServiceProvider};

#[cfg(test)]
#[path = "../../tests/unit/models/business.rs"]
mod tests;
