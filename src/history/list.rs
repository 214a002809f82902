//! Non-circular doubly linked list of visited pages.
//!
//! Nodes live in an index arena rather than behind raw pointers. A `NodeId`
//! names a slot plus the generation the slot had when the node was created,
//! so a handle to a node that was released by [`NavigationList::truncate_after`]
//! resolves to `None` even after its slot has been reused.
//!
//! # Example
//!
//! ```
//! use navreplay::history::list::NavigationList;
//!
//! let mut list = NavigationList::new();
//! let a = list.push_back("a");
//! let b = list.push_back("b");
//! let _c = list.push_back("c");
//!
//! assert_eq!(list.next(a), Some(b));
//! assert_eq!(list.truncate_after(b), 1);
//! assert_eq!(list.tail(), Some(b));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
//! ```

/// Handle to a node in a [`NavigationList`].
///
/// Handles are cheap to copy and never own the node they point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

#[derive(Debug)]
struct Node<T> {
    data: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// Arena-backed doubly linked list.
///
/// The head's `prev` and the tail's `next` are always `None`.
#[derive(Debug)]
pub struct NavigationList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> Default for NavigationList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NavigationList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// Returns the data of a live node, or `None` for a released handle.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|node| &node.data)
    }

    /// Returns the node before `id`, or `None` at the head.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.prev)
    }

    /// Returns the node after `id`, or `None` at the tail.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.next)
    }

    /// Appends `data` after the current tail and returns its handle.
    pub fn push_back(&mut self, data: T) -> NodeId {
        let old_tail = self.tail;
        let id = self.allocate(Node {
            data,
            prev: old_tail,
            next: None,
        });

        match old_tail.and_then(|tail| self.node_mut(tail)) {
            Some(tail) => tail.next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Inserts `data` before the current head and returns its handle.
    pub fn push_front(&mut self, data: T) -> NodeId {
        let old_head = self.head;
        let id = self.allocate(Node {
            data,
            prev: None,
            next: old_head,
        });

        match old_head.and_then(|head| self.node_mut(head)) {
            Some(head) => head.prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        id
    }

    /// Makes `id` the tail, releasing every node after it.
    ///
    /// Returns how many nodes were released. Each node can only be released
    /// once, so the walk over the cut branch is amortized against the pushes
    /// that created it. A stale `id` leaves the list untouched.
    pub fn truncate_after(&mut self, id: NodeId) -> usize {
        let mut cursor = match self.node_mut(id) {
            Some(node) => node.next.take(),
            None => return 0,
        };
        self.tail = Some(id);

        let mut released = 0;
        while let Some(next_id) = cursor {
            cursor = self.release(next_id).and_then(|node| node.next);
            released += 1;
        }
        released
    }

    /// Iterates over node data from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            stop: None,
        }
    }

    /// Iterates from the head up to and including `id`.
    ///
    /// If `id` is not in the list the whole list is yielded.
    pub fn iter_until(&self, id: NodeId) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            stop: Some(id),
        }
    }

    /// Returns the first node, walking from the head, whose data matches.
    pub fn find<P>(&self, mut predicate: P) -> Option<NodeId>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.node(id)?;
            if predicate(&node.data) {
                return Some(id);
            }
            cursor = node.next;
        }
        None
    }

    fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    fn allocate(&mut self, node: Node<T>) -> NodeId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }

        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    fn release(&mut self, id: NodeId) -> Option<Node<T>> {
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?;
        let node = slot.node.take()?;
        // Bumping the generation invalidates every outstanding handle.
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(node)
    }
}

/// Head-to-tail iterator returned by [`NavigationList::iter`].
pub struct Iter<'a, T> {
    list: &'a NavigationList<T>,
    cursor: Option<NodeId>,
    stop: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.list.node(id)?;
        self.cursor = if self.stop == Some(id) {
            None
        } else {
            node.next
        };
        Some(&node.data)
    }
}
