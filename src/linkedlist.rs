use core::fmt;
use std::fmt::Display;

/*
 * One link of the chain : a value and the (owned) rest of the chain.
 */
#[derive(Debug)]
pub struct Node<T> {
    pub next: Option<Box<Node<T>>>,
    pub value: T,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node { next: None, value }
    }
}

/*
 * Singly linked list owning its whole chain from <head>.
 * An empty list has no head.
 */
#[derive(Debug)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /*
     * Append <value> after the current tail.
     * The tail is found by walking the chain from head.
     */
    pub fn insert(&mut self, value: T) {
        let mut tail = &mut self.head;
        while let Some(node) = tail {
            tail = &mut node.next;
        }
        *tail = Some(Box::new(Node::new(value)));
    }

    /*
     * Copy every value in chain order into a new vector
     */
    pub fn as_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut res = Vec::new();
        let mut curr_opt = &self.head;
        while let Some(curr) = curr_opt {
            res.push(curr.value.clone());
            curr_opt = &curr.next;
        }
        res
    }

    /*
     * Build a new list holding the same values in reverse order.
     * <self> is left untouched.
     */
    pub fn reverse_list(&self) -> LinkedList<T>
    where
        T: Clone,
    {
        let mut reversed = LinkedList::new();
        if self.is_empty() {
            return reversed;
        }

        for value in self.as_list().into_iter().rev() {
            reversed.insert(value);
        }
        reversed
    }
}

/*
 * Display values in order, separated by spaces
 */
impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> std::fmt::Result {
        let mut curr_opt = &self.head;
        while let Some(curr) = curr_opt {
            write!(f, "{}", curr.value)?;
            if curr.next.is_some() {
                write!(f, " ")?;
            }
            curr_opt = &curr.next;
        }
        Ok(())
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink node by node, the default drop recurses once per node
        let mut curr_opt = self.head.take();
        while let Some(mut curr) = curr_opt {
            curr_opt = curr.next.take();
        }
    }
}

/*
 * Insert <values> in order into a fresh list, reverse it
 * and hand the result back as a vector.
 */
pub fn reversed_list<T, I>(values: I) -> Vec<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    let mut initial = LinkedList::new();
    for value in values {
        initial.insert(value);
    }
    initial.reverse_list().as_list()
}
