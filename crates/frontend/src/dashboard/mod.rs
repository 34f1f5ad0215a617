pub mod cards;
pub mod context;
pub mod page;
pub mod sections;

pub use context::{use_dashboard, DashboardContext, TabSelection};
pub use page::HomePage;
