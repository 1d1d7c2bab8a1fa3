pub mod coin_task;
pub mod edge_task;
pub mod report_task;
