pub mod analysis;
pub mod chart;
pub mod disclaimer;
pub mod stats;
pub mod view;
