mod dashboard;

pub use dashboard::AlertasDashboard;
