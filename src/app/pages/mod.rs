//! Page components, one per route.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod search;
pub mod section;
pub mod specialties;

pub use dashboard::{AdminDashboard, Dashboard};
pub use home::Home;
pub use login::{AdminLogin, Login};
pub use not_found::{Missing, NotFound};
pub use search::Search;
pub use section::{About, Section};
pub use specialties::{Specialties, Specialty};
