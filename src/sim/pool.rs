//! Slot-indexed recycling allocator
//!
//! Objects are built once from a template constructor and handed out by slot.
//! Releasing a slot only marks it available again; the object keeps its stale
//! fields until the next acquire runs the reset closure over it.

/// Handle to an acquired pool slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Reusable-object pool. Capacity is advisory: an exhausted pool grows.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<T>,
    in_use: Vec<bool>,
    /// Available slot indices (stack, last released is reused first)
    free: Vec<usize>,
    create: fn() -> T,
}

impl<T> Pool<T> {
    /// Create a pool pre-filled with `capacity` objects from `create`
    pub fn new(capacity: usize, create: fn() -> T) -> Self {
        let slots: Vec<T> = (0..capacity).map(|_| create()).collect();
        // Reverse so slot 0 is handed out first
        let free = (0..capacity).rev().collect();
        Self {
            slots,
            in_use: vec![false; capacity],
            free,
            create,
        }
    }

    /// Take an object out of the pool, running `reset` over it.
    ///
    /// Falls back to constructing a fresh object when nothing is available.
    pub fn acquire(&mut self, reset: impl FnOnce(&mut T)) -> SlotId {
        let index = match self.free.pop() {
            Some(i) => i,
            None => {
                self.slots.push((self.create)());
                self.in_use.push(false);
                self.slots.len() - 1
            }
        };
        self.in_use[index] = true;
        reset(&mut self.slots[index]);
        SlotId(index)
    }

    /// Return a slot to the pool. Returns false (and does nothing) if the
    /// slot was not in use, so a double release can never duplicate a slot
    /// in the free list.
    pub fn release(&mut self, id: SlotId) -> bool {
        match self.in_use.get_mut(id.0) {
            Some(live) if *live => {
                *live = false;
                self.free.push(id.0);
                true
            }
            _ => false,
        }
    }

    /// Borrow a live object
    pub fn get(&self, id: SlotId) -> Option<&T> {
        if self.is_live(id) {
            self.slots.get(id.0)
        } else {
            None
        }
    }

    /// Mutably borrow a live object
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        if self.is_live(id) {
            self.slots.get_mut(id.0)
        } else {
            None
        }
    }

    pub fn is_live(&self, id: SlotId) -> bool {
        self.in_use.get(id.0).copied().unwrap_or(false)
    }

    /// Total objects ever constructed (live + available)
    pub fn total(&self) -> usize {
        self.slots.len()
    }

    /// Objects ready for reuse
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Objects currently handed out
    pub fn live_count(&self) -> usize {
        self.total() - self.available()
    }
}
