#![allow(dead_code)]

use datagrid::{Column, DataGrid, GridOptions, Row, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: u32,
    pub name: &'static str,
    pub age: i64,
    pub score: i64,
    pub city: Option<&'static str>,
}

impl Row for Person {
    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(self.id),
            "name" => Value::from(self.name),
            "age" => Value::from(self.age),
            "score" => Value::from(self.score),
            "city" => Value::from(self.city),
            _ => Value::Null,
        }
    }
}

pub fn people() -> Vec<Person> {
    vec![
        Person { id: 1, name: "Alice", age: 30, score: 90, city: Some("Berlin") },
        Person { id: 2, name: "Bob", age: 25, score: 85, city: Some("Paris") },
        Person { id: 3, name: "Charlie", age: 35, score: 90, city: None },
        Person { id: 4, name: "Diana", age: 30, score: 70, city: Some("Berlin") },
        Person { id: 5, name: "Eve", age: 28, score: 85, city: Some("Rome") },
    ]
}

pub fn columns() -> Vec<Column<Person>> {
    vec![
        Column::new("id", "ID"),
        Column::new("name", "Name"),
        Column::new("age", "Age"),
        Column::new("age_group", "Age group")
            .key("age")
            .value(|p: &Person| Value::from(if p.age < 30 { "20s" } else { "30s" })),
        Column::new("score", "Score"),
        Column::new("city", "City").sortable(false),
    ]
}

pub fn grid() -> DataGrid<Person> {
    DataGrid::new(people(), columns()).unwrap()
}

pub fn grid_with(options: GridOptions) -> DataGrid<Person> {
    DataGrid::with_options(people(), columns(), options).unwrap()
}

pub fn ids(rows: &[&Person]) -> Vec<u32> {
    rows.iter().map(|p| p.id).collect()
}
