use std::rc::Rc;

#[derive(Debug)]
struct Link<T> {
    value: T,
    parent: Option<Rc<Link<T>>>,
}

/// Persistent append-only list. `push` returns a new trail sharing the whole
/// prefix with the receiver, which stays untouched.
#[derive(Debug)]
pub struct Trail<T> {
    head: Option<Rc<Link<T>>>,
    len: usize,
}

impl<T> Trail<T> {
    pub fn new() -> Trail<T> {
        Trail { head: None, len: 0 }
    }

    pub fn push(&self, value: T) -> Trail<T> {
        Trail {
            head: Some(Rc::new(Link {
                value,
                parent: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn last(&self) -> Option<&T> {
        self.head.as_ref().map(|link| &link.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates from the most recent element back to the first one.
    pub fn iter_rev(&self) -> TrailIter<'_, T> {
        TrailIter {
            next: self.head.as_deref(),
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter_rev().any(|item| item == value)
    }

    /// Elements in insertion order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut items: Vec<T> = self.iter_rev().cloned().collect();
        items.reverse();
        items
    }
}

impl<T> Clone for Trail<T> {
    fn clone(&self) -> Trail<T> {
        Trail {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for Trail<T> {
    fn default() -> Trail<T> {
        Trail::new()
    }
}

// Unlinks uniquely owned links one at a time; the derived drop would recurse once per link.
impl<T> Drop for Trail<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(link) = next {
            match Rc::try_unwrap(link) {
                Ok(mut link) => next = link.parent.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct TrailIter<'a, T> {
    next: Option<&'a Link<T>>,
}

impl<'a, T> Iterator for TrailIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|link| {
            self.next = link.parent.as_deref();
            &link.value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Trail;

    #[test]
    fn push_leaves_the_receiver_untouched() {
        let root = Trail::new().push(1).push(2);
        let left = root.push(3);
        let right = root.push(4).push(5);

        assert_eq!(root.to_vec(), vec![1, 2]);
        assert_eq!(left.to_vec(), vec![1, 2, 3]);
        assert_eq!(right.to_vec(), vec![1, 2, 4, 5]);
        assert_eq!(right.len(), 4);
        assert_eq!(right.last(), Some(&5));
        assert!(right.contains(&1));
        assert!(!right.contains(&3));
        assert!(Trail::<u8>::new().is_empty());
    }

    #[test]
    fn long_trails_drop_without_recursion() {
        let mut trail = Trail::new();
        for i in 0..1_000_000 {
            trail = trail.push(i);
        }
        assert_eq!(trail.len(), 1_000_000);
        drop(trail);
    }
}
