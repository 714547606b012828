// Static career catalog: careers, curated learning resources, try-out tasks,
// internships, the resource library and market chart data.
// Also maps remote backend careers into catalog records.

pub mod careers;
pub mod explorer;
pub mod handlers;
pub mod internships;
pub mod mapping;
pub mod market;
pub mod resources;
pub mod tasks;

pub use careers::{career_paths, find_career};
pub use resources::learning_resources;
pub use tasks::career_tasks;
