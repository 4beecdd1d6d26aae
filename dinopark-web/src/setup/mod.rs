// Setup and initialization modules
pub mod migrations;
pub mod seeding;

pub use migrations::run_migrations;
pub use seeding::maybe_seed_dinosaurs;
