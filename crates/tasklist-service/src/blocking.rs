use tasklist_core::task::{NewTask, Task, TaskEdit};
use tokio::runtime::Runtime;

use crate::{ServiceError, TaskList};

/// Blocking wrapper around the async `TaskList`.
///
/// Owns a tokio runtime and uses `block_on()` for each call.
pub struct BlockingTaskList {
    inner: TaskList,
    rt: Runtime,
}

impl BlockingTaskList {
    pub fn new(inner: TaskList) -> std::io::Result<Self> {
        Ok(Self {
            inner,
            rt: Runtime::new()?,
        })
    }

    pub fn load_initial(&self) -> Result<Vec<Task>, ServiceError> {
        self.rt.block_on(self.inner.load_initial())
    }

    pub fn refresh(&self) -> Result<Vec<Task>, ServiceError> {
        self.rt.block_on(self.inner.refresh())
    }

    pub fn search(&self, query: &str) -> Result<Vec<Task>, ServiceError> {
        self.rt.block_on(self.inner.search(query))
    }

    pub fn add(&self, input: NewTask) -> Result<Vec<Task>, ServiceError> {
        self.rt.block_on(self.inner.add(input))
    }

    pub fn update(&self, task: &Task) -> Result<Vec<Task>, ServiceError> {
        self.rt.block_on(self.inner.update(task))
    }

    pub fn edit(&self, id: i64, edit: TaskEdit) -> Result<Vec<Task>, ServiceError> {
        self.rt.block_on(self.inner.edit(id, edit))
    }

    pub fn toggle_completed(&self, id: i64) -> Result<Vec<Task>, ServiceError> {
        self.rt.block_on(self.inner.toggle_completed(id))
    }

    pub fn delete(&self, id: i64) -> Result<Vec<Task>, ServiceError> {
        self.rt.block_on(self.inner.delete(id))
    }
}
