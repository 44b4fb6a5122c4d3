use chrono::{DateTime, NaiveDate, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Benefits {
    pub health_insurance: bool,
    pub vacation: u32,
    pub bonus: f64,
}

/// Employee as served by `GET /api/employees`. Missing fields default so a
/// partially populated document still decodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    #[serde(with = "super::date::option")]
    pub hire_date: Option<NaiveDate>,
    #[serde(with = "super::date::option")]
    pub birth_date: Option<NaiveDate>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub status: EmployeeStatus,
    pub benefits: Benefits,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Label used by the employee selector: `First Last - EMP001`.
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.full_name(), self.employee_id)
    }
}

/// Fetched employees plus an id index.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
    by_id: FxHashMap<String, usize>,
}

impl EmployeeDirectory {
    pub fn new(employees: Vec<Employee>) -> Self {
        let by_id = employees
            .iter()
            .enumerate()
            .map(|(ix, e)| (e.id.clone(), ix))
            .collect();
        Self { employees, by_id }
    }

    pub fn replace(&mut self, employees: Vec<Employee>) {
        *self = Self::new(employees);
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.by_id.get(id).map(|&ix| &self.employees[ix])
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn at(&self, index: usize) -> Option<&Employee> {
        self.employees.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/employee.rs"]
mod tests;
