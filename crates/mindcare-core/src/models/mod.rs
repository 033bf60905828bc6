pub mod answer;
pub mod category;
pub mod message;
pub mod plan;
pub mod progress;
pub mod user;
