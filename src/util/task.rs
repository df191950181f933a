use std::collections::HashMap;

use tokio::task::JoinHandle;

/// Keyed background requests. Spawning under an existing key aborts the
/// superseded task, so at most one request per concern is in flight.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub fn spawn(&mut self, key: &'static str, task: JoinHandle<()>) {
        if let Some(previous) = self.tasks.insert(key, task) {
            previous.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
        self.tasks.clear();
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.abort_all();
    }
}
