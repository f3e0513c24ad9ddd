pub mod analytics_service;
pub mod goal_service;
pub mod hand_classifier;
pub mod session_ledger;
pub mod signup_service;
