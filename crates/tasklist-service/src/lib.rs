mod blocking;
mod list;
pub mod remote;
mod traits;

pub use blocking::BlockingTaskList;
pub use list::TaskList;
pub use remote::{RemoteClient, RemoteError, DEFAULT_REMOTE_URL};
pub use traits::{ServiceError, TaskSource};
