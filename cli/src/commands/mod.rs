pub mod calendar;
pub mod dashboard;
pub mod projects;
