//! SQL for the `employees` table.
//!
//! Column names follow the persisted row shape; every statement lists its
//! columns explicitly so the bind order is fixed here and nowhere else.

/// Name of the table holding payroll records.
pub const EMPLOYEES_TABLE: &str = "employees";

pub(crate) const CREATE_EMPLOYEES_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        position TEXT,
        base_salary REAL,
        hourly_rate REAL,
        hours_worked REAL,
        overtime_hours REAL,
        working_days INTEGER,
        sss REAL,
        philhealth REAL,
        pagibig REAL,
        tax REAL
    )";

// Bind order for INSERT and UPDATE: name, position, base_salary,
// hourly_rate, hours_worked, overtime_hours, working_days, sss,
// philhealth, pagibig, tax (then id for UPDATE).
pub(crate) const INSERT_EMPLOYEE: &str = "\
    INSERT INTO employees (name, position, base_salary, hourly_rate, \
                           hours_worked, overtime_hours, working_days, \
                           sss, philhealth, pagibig, tax) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

pub(crate) const UPDATE_EMPLOYEE: &str = "\
    UPDATE employees \
    SET name = ?, position = ?, base_salary = ?, hourly_rate = ?, \
        hours_worked = ?, overtime_hours = ?, working_days = ?, \
        sss = ?, philhealth = ?, pagibig = ?, tax = ? \
    WHERE id = ?";

pub(crate) const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE id = ?";

pub(crate) const SELECT_EMPLOYEES: &str = "\
    SELECT id, name, position, base_salary, hourly_rate, \
           hours_worked, overtime_hours, working_days, \
           sss, philhealth, pagibig, tax \
    FROM employees \
    ORDER BY id ASC";

pub(crate) const COUNT_EMPLOYEES: &str = "SELECT COUNT(*) FROM employees";

#[cfg(test)]
mod tests {
    use super::*;

    const PERSISTED_COLUMNS: [&str; 11] = [
        "name",
        "position",
        "base_salary",
        "hourly_rate",
        "hours_worked",
        "overtime_hours",
        "working_days",
        "sss",
        "philhealth",
        "pagibig",
        "tax",
    ];

    #[test]
    fn test_statements_name_every_persisted_column() {
        for column in PERSISTED_COLUMNS {
            assert!(CREATE_EMPLOYEES_TABLE.contains(column), "DDL lacks {column}");
            assert!(INSERT_EMPLOYEE.contains(column), "INSERT lacks {column}");
            assert!(UPDATE_EMPLOYEE.contains(column), "UPDATE lacks {column}");
            assert!(SELECT_EMPLOYEES.contains(column), "SELECT lacks {column}");
        }
    }

    #[test]
    fn test_placeholder_counts_match_bind_order() {
        assert_eq!(INSERT_EMPLOYEE.matches('?').count(), 11);
        assert_eq!(UPDATE_EMPLOYEE.matches('?').count(), 12);
    }

    #[test]
    fn test_schema_is_idempotent_and_targets_employees() {
        assert!(CREATE_EMPLOYEES_TABLE.contains("IF NOT EXISTS"));
        assert!(CREATE_EMPLOYEES_TABLE.contains(EMPLOYEES_TABLE));
    }
}
