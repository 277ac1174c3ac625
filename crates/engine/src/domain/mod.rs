pub mod catalog;
pub mod decision;
pub mod error;
pub mod evaluator;
pub mod rules;
pub mod types;
pub mod usage_policy;
