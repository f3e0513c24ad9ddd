pub mod analytics;
pub mod bankroll;
pub mod card;
pub mod goal;
pub mod hand;
pub mod session;
pub mod settings;
pub mod signup;
pub mod stats;
pub mod strategy;
