pub mod labels;
pub mod practice_catalog;
pub mod quiz_policy;
