//! Shared fixtures for the sequence tests.

#![allow(dead_code)]

use enumerable_operators::Sequence;

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    pub dept: String,
    pub age: u32,
    pub salary: f64,
}

pub fn employee(name: &str, dept: &str, age: u32, salary: f64) -> Employee {
    Employee {
        name: name.to_string(),
        dept: dept.to_string(),
        age,
        salary,
    }
}

pub fn staff() -> Sequence<Employee> {
    Sequence::from(vec![
        employee("carol", "eng", 41, 180_000.0),
        employee("alice", "eng", 29, 150_000.0),
        employee("dave", "ops", 35, 95_000.0),
        employee("bob", "sales", 29, 70_000.0),
        employee("erin", "ops", 29, 99_000.0),
    ])
}

/// Deterministic pseudo-random integers (LCG), so tests need no rng crate.
pub fn scrambled(n: usize, seed: u64) -> Vec<i64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 100) as i64
        })
        .collect()
}
