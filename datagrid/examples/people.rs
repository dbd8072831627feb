//! People grid example
//!
//! Builds a small grid, then drives it the way a UI would: clicking sort
//! headers, toggling filter chips, typing into the search box and paging.
//! Engine logs go to `people.log`.

use std::cmp::Ordering;
use std::fs::File;

use datagrid::{Column, DataGrid, GridOptions, Row, Value};
use simplelog::{Config, LevelFilter, WriteLogger};

/// An employee record.
#[derive(Debug, Clone)]
struct Employee {
    name: String,
    department: String,
    age: u32,
    salary: u32,
}

impl Row for Employee {
    fn field(&self, key: &str) -> Value {
        match key {
            "name" => Value::from(&self.name),
            "department" => Value::from(&self.department),
            "age" => Value::from(self.age),
            "salary" => Value::from(self.salary),
            _ => Value::Null,
        }
    }
}

fn sample_employees() -> Vec<Employee> {
    let names = [
        "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Heidi", "Ivan", "Judy",
        "Mallory", "Niaj", "Olivia", "Peggy", "Rupert", "Sybil", "Trent", "Victor",
    ];
    let departments = ["Engineering", "Sales", "Support"];
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Employee {
            name: name.to_string(),
            department: departments[i % departments.len()].to_string(),
            age: 22 + (i as u32 * 7) % 30,
            salary: 40_000 + (i as u32 * 3_517) % 60_000,
        })
        .collect()
}

fn columns() -> Vec<Column<Employee>> {
    vec![
        Column::new("name", "Name"),
        Column::new("department", "Department").sortable(false),
        Column::new("age", "Age"),
        Column::new("age_band", "Age band")
            .key("age")
            .value(|e: &Employee| Value::from(format!("{}s", e.age / 10 * 10))),
        Column::new("salary", "Salary")
            .sorter(|a: &Value, b: &Value, ea: &Employee, eb: &Employee| {
                a.compare(b)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| ea.name.cmp(&eb.name))
            })
            .filter(|value: &Value, min: &Value, _: &Employee| {
                value.compare(min).is_some_and(|o| o.is_ge())
            }),
    ]
}

fn print_page(title: &str, grid: &DataGrid<Employee>) {
    println!("\n== {} ==", title);
    let header: Vec<String> = grid.columns().iter().map(|c| format!("{:<12}", c.name)).collect();
    println!("{}", header.join(""));
    for row in grid.rows() {
        let cells: Vec<String> = grid
            .columns()
            .iter()
            .map(|c| format!("{:<12}", c.value_of(row).to_string()))
            .collect();
        println!("{}", cells.join(""));
    }
    let info = grid.page_info();
    println!(
        "page {} of {} ({} of {} rows){}{}",
        info.current_page,
        info.total_pages,
        info.total_rows,
        grid.total_count(),
        if grid.can_go_back() { "  [< prev]" } else { "" },
        if grid.can_go_forward() { "  [next >]" } else { "" },
    );
}

fn main() {
    let log_file = File::create("people.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let options = GridOptions::default().with_page_size(5);
    let mut grid = DataGrid::with_options(sample_employees(), columns(), options)
        .expect("Column ids are unique");
    print_page("Insertion order", &grid);

    grid.toggle_sort("age");
    print_page("Sorted by age", &grid);

    grid.next_page();
    print_page("Page 2", &grid);

    grid.toggle_filter("department", "Sales");
    print_page("Sales only", &grid);

    grid.set_filter("salary", [60_000]);
    print_page("Sales earning 60k or more", &grid);

    grid.clear_all_filters();
    grid.set_global_filter("^[a-e]");
    print_page("Any text starting with A-E", &grid);

    let bands = grid.unique_values("age_band");
    println!("\nAge band filter options: {:?}", bands);
}
