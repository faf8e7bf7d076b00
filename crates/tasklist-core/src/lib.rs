pub mod filter;
pub mod task;

pub use filter::filter_tasks;
pub use task::{NewTask, Task, TaskEdit};
