#[path = "../common/mod.rs"]
mod common;

mod rating_period_tests;
