pub mod alerts;
pub mod attendance;
pub mod employees;
pub mod navigation;
pub mod summary;

pub use alerts::MessageBanners;
pub use attendance::{AttendanceFilterSection, AttendanceFormSection, AttendanceListSection};
pub use employees::{EmployeeFormSection, EmployeeListSection};
pub use navigation::TabNav;
pub use summary::{EmployeeSummaryCard, StatsCards, TodayStatsCard};
