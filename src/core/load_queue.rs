use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use futures::executor::{LocalPool, LocalSpawner};
use futures::task::LocalSpawnExt;

/// Single-threaded pool running fire-and-forget asset loads.
/// Loads make progress only when the owner polls the queue.
pub struct LoadQueue {
    pool: LocalPool,
    pending: Rc<Cell<usize>>,
}

/// Cloneable handle for queueing loads, usable from inside other loads
#[derive(Clone)]
pub struct LoadSpawner {
    spawner: LocalSpawner,
    pending: Rc<Cell<usize>>,
}

impl LoadQueue {
    pub fn new() -> Self {
        Self {
            pool: LocalPool::new(),
            pending: Rc::new(Cell::new(0)),
        }
    }

    pub fn spawner(&self) -> LoadSpawner {
        LoadSpawner {
            spawner: self.pool.spawner(),
            pending: self.pending.clone(),
        }
    }

    /// Run every load that can make progress without blocking.
    /// Returns the number still in flight.
    pub fn poll(&mut self) -> usize {
        self.pool.run_until_stalled();
        self.pending.get()
    }

    /// Block until every queued load, including ones they queue, has finished
    pub fn finish(&mut self) {
        self.pool.run();
    }

    /// Loads queued but not yet finished
    pub fn pending(&self) -> usize {
        self.pending.get()
    }
}

impl Default for LoadQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadSpawner {
    /// Queue a load. Nothing waits on it; its effects land when it completes.
    pub fn spawn<F>(&self, load: F)
    where
        F: Future<Output = ()> + 'static,
    {
        self.pending.set(self.pending.get() + 1);
        let pending = self.pending.clone();

        let queued = self.spawner.spawn_local(async move {
            load.await;
            pending.set(pending.get() - 1);
        });

        if let Err(e) = queued {
            self.pending.set(self.pending.get() - 1);
            log::error!("Failed to queue asset load: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use std::cell::RefCell;

    #[test]
    fn test_ready_loads_finish_on_first_poll() {
        let mut queue = LoadQueue::new();
        let hits = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let hits = hits.clone();
            queue.spawner().spawn(async move { hits.set(hits.get() + 1) });
        }

        assert_eq!(queue.pending(), 3);
        assert_eq!(hits.get(), 0);
        assert_eq!(queue.poll(), 0);
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_blocked_load_stays_pending() {
        let mut queue = LoadQueue::new();
        let (tx, rx) = oneshot::channel::<u32>();
        let result = Rc::new(Cell::new(0));

        let out = result.clone();
        queue.spawner().spawn(async move {
            if let Ok(v) = rx.await {
                out.set(v);
            }
        });

        assert_eq!(queue.poll(), 1);
        assert_eq!(result.get(), 0);

        tx.send(7).unwrap();
        assert_eq!(queue.poll(), 0);
        assert_eq!(result.get(), 7);
    }

    #[test]
    fn test_loads_can_queue_more_loads() {
        let mut queue = LoadQueue::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let spawner = queue.spawner();
        let log = order.clone();
        queue.spawner().spawn(async move {
            log.borrow_mut().push("parent");
            for i in 0..2 {
                let log = log.clone();
                spawner.spawn(async move { log.borrow_mut().push(if i == 0 { "a" } else { "b" }) });
            }
        });

        queue.finish();
        assert_eq!(queue.pending(), 0);
        assert_eq!(order.borrow().len(), 3);
        assert_eq!(order.borrow()[0], "parent");
    }
}
