use std::cmp::Ordering;

use ringqueue::RingQueue;

fn queue_of(values: &[i32]) -> RingQueue<i32> {
    let mut queue = RingQueue::with_capacity(4, 200).unwrap();
    for &value in values {
        queue.enqueue(value).unwrap();
    }
    queue
}

#[test]
fn test_equal_queues() {
    let a = queue_of(&[1, 2, 3]);
    let b = queue_of(&[1, 2, 3]);

    assert_eq!(a, b);
    assert_eq!(a.cmp(&b), Ordering::Equal);
}

#[test]
fn test_comparison_ignores_physical_layout() {
    let a = queue_of(&[1, 2, 3]);

    // Same logical content, different front/rear positions
    let mut b = queue_of(&[9, 9, 1, 2]);
    b.dequeue().unwrap();
    b.dequeue().unwrap();
    b.enqueue(3).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_lexicographic_order() {
    let a = queue_of(&[1, 2, 3]);
    let b = queue_of(&[1, 3]);

    assert_eq!(a.cmp(&b), Ordering::Less);
    assert_eq!(b.cmp(&a), Ordering::Greater);
}

#[test]
fn test_longer_queue_wins_on_equal_prefix() {
    let a = queue_of(&[1, 2]);
    let b = queue_of(&[1, 2, 0]);

    assert_ne!(a, b);
    assert_eq!(a.cmp(&b), Ordering::Less);
    assert_eq!(b.cmp(&a), Ordering::Greater);
}

#[test]
fn test_empty_queues_are_equal() {
    let a: RingQueue<i32> = RingQueue::new();
    let b: RingQueue<i32> = RingQueue::new();

    assert_eq!(a, b);
}

#[test]
fn test_clone_preserves_content_and_configuration() {
    let mut queue = RingQueue::with_capacity(4, 150).unwrap();
    for i in 0..6 {
        queue.enqueue(i).unwrap();
    }
    queue.dequeue().unwrap();
    queue.lock_capacity();

    let copy = queue.clone();

    assert_eq!(copy, queue);
    assert_eq!(copy.capacity(), queue.capacity());
    assert_eq!(copy.growth_rate(), 150);
    assert!(copy.is_locked());
    assert_eq!(copy.peek_front(), queue.peek_front());
    assert_eq!(copy.peek_rear(), queue.peek_rear());
}

#[test]
fn test_clone_is_independent() {
    let queue = queue_of(&[1, 2, 3]);
    let mut copy = queue.clone();

    copy.dequeue().unwrap();
    copy.enqueue(4).unwrap();

    assert_eq!(queue.to_vec(), [1, 2, 3]);
    assert_eq!(copy.to_vec(), [2, 3, 4]);
}

#[test]
fn test_to_vec_deep_copies_the_logical_sequence() {
    let mut queue = RingQueue::with_capacity(4, 200).unwrap();
    for word in ["a", "b", "c"] {
        queue.enqueue(String::from(word)).unwrap();
    }

    let sequence = queue.to_vec();
    assert_eq!(sequence, ["a", "b", "c"]);

    // the queue still owns its own copies
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek_front().map(String::as_str), Some("a"));
}

#[test]
fn test_to_vec_on_empty_queue() {
    let queue: RingQueue<i32> = RingQueue::new();
    assert!(queue.to_vec().is_empty());
}
