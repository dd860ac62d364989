/// Fixed-capacity process storage backing the ready queue and the completed
/// list. Array-backed so the simulator never touches a heap; `N` is the
/// number of simulated processes, which bounds both collections.
use crate::process::Process;

#[derive(Debug, Clone)]
pub struct FixedList<const N: usize> {
    slots: [Option<Process>; N],
    len: usize,
}

impl<const N: usize> FixedList<N> {
    pub const fn new() -> Self {
        Self {
            slots: [None; N],
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn get(&self, index: usize) -> Option<&Process> {
        if index < self.len {
            self.slots[index].as_ref()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> + '_ {
        self.slots[..self.len].iter().flatten()
    }

    /// Append at the tail.
    ///
    /// # Panics
    /// If the list is already full.
    pub fn push_back(&mut self, process: Process) {
        let len = self.len;
        self.insert(len, process);
    }

    /// Place `process` at `index`, shifting later entries one slot right.
    ///
    /// # Panics
    /// If the list is full or `index > len`.
    pub fn insert(&mut self, index: usize, process: Process) {
        assert!(!self.is_full(), "process list over capacity ({})", N);
        assert!(index <= self.len, "insert index {index} past end {}", self.len);
        self.slots[index..=self.len].rotate_right(1);
        self.slots[index] = Some(process);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<Process> {
        if self.is_empty() {
            return None;
        }
        let head = self.slots[0].take();
        self.slots[..self.len].rotate_left(1);
        self.len -= 1;
        head
    }

    pub fn clear(&mut self) {
        self.slots = [None; N];
        self.len = 0;
    }
}

impl<const N: usize> Default for FixedList<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: usize) -> Process {
        Process::new(id, 0, 1).unwrap()
    }

    fn ids<const N: usize>(list: &FixedList<N>) -> Vec<usize> {
        list.iter().map(Process::id).collect()
    }

    #[test]
    fn insert_shifts_tail() {
        let mut list = FixedList::<4>::new();
        list.push_back(p(1));
        list.push_back(p(3));
        list.insert(1, p(2));
        list.insert(0, p(0));
        assert!(list.is_full());
        assert_eq!(ids(&list), [0, 1, 2, 3]);
    }

    #[test]
    fn pop_front_keeps_order() {
        let mut list = FixedList::<3>::new();
        list.push_back(p(1));
        list.push_back(p(2));
        list.push_back(p(3));
        assert_eq!(list.pop_front().map(|p| p.id()), Some(1));
        assert_eq!(ids(&list), [2, 3]);
        assert_eq!(list.get(2), None);
        list.pop_front();
        list.pop_front();
        assert!(list.pop_front().is_none());
        assert!(list.is_empty());
    }

    #[test]
    #[should_panic(expected = "over capacity")]
    fn overfill_panics() {
        let mut list = FixedList::<1>::new();
        list.push_back(p(1));
        list.push_back(p(2));
    }

    #[test]
    fn clear_empties() {
        let mut list = FixedList::<2>::new();
        list.push_back(p(1));
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }
}
