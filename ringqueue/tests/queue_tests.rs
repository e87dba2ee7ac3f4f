use ringqueue::{QueueError, RingQueue};

#[test]
fn test_default_configuration() {
    let queue: RingQueue<i32> = RingQueue::new();

    assert_eq!(queue.capacity(), 32);
    assert_eq!(queue.growth_rate(), 200);
    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
    assert!(!queue.is_locked());
}

#[test]
fn test_invalid_construction_parameters() {
    assert_eq!(
        RingQueue::<i32>::with_capacity(0, 200),
        Err(QueueError::InvalidCapacity { capacity: 0 })
    );
    assert_eq!(
        RingQueue::<i32>::with_capacity(8, 100),
        Err(QueueError::InvalidGrowthRate { growth_rate: 100 })
    );
    assert_eq!(
        RingQueue::<i32>::with_capacity(8, 50),
        Err(QueueError::InvalidGrowthRate { growth_rate: 50 })
    );
}

#[test]
fn test_dequeue_on_empty_queue_fails() {
    let mut queue: RingQueue<i32> = RingQueue::new();
    assert_eq!(queue.dequeue(), Err(QueueError::Empty));
}

#[test]
fn test_strict_fifo_order() {
    let mut queue = RingQueue::with_capacity(8, 200).unwrap();

    for i in 0..8 {
        queue.enqueue(i).unwrap();
    }
    for i in 0..8 {
        assert_eq!(queue.dequeue().unwrap(), i);
    }
    assert!(queue.is_empty());
}

#[test]
fn test_interleaved_enqueue_dequeue_counts() {
    let mut queue = RingQueue::with_capacity(4, 200).unwrap();

    for i in 0..10 {
        queue.enqueue(i).unwrap();
    }
    for _ in 0..4 {
        queue.dequeue().unwrap();
    }
    assert_eq!(queue.len(), 6);

    for i in 10..15 {
        queue.enqueue(i).unwrap();
    }
    assert_eq!(queue.len(), 11);

    // Order survives the wrapping and the growths
    for i in 4..15 {
        assert_eq!(queue.dequeue().unwrap(), i);
    }
}

#[test]
fn test_linear_insertion_preserves_every_element() {
    let mut queue = RingQueue::with_capacity(16, 200).unwrap();

    for i in 1..=1000 {
        queue.enqueue(i).unwrap();
    }

    let mut sum = 0;
    while let Ok(element) = queue.dequeue() {
        sum += element;
    }
    assert_eq!(sum, 500_500);
}

#[test]
fn test_peek_front_and_rear() {
    let mut queue = RingQueue::with_capacity(4, 200).unwrap();

    assert_eq!(queue.peek_front(), None);
    assert_eq!(queue.peek_rear(), None);

    queue.enqueue(1).unwrap();
    assert_eq!(queue.peek_front(), Some(&1));
    assert_eq!(queue.peek_rear(), Some(&1));

    queue.enqueue(2).unwrap();
    queue.enqueue(3).unwrap();
    assert_eq!(queue.peek_front(), Some(&1));
    assert_eq!(queue.peek_rear(), Some(&3));

    queue.dequeue().unwrap();
    assert_eq!(queue.peek_front(), Some(&2));
    assert_eq!(queue.peek_rear(), Some(&3));
}

#[test]
fn test_peek_rear_after_wrap() {
    let mut queue = RingQueue::with_capacity(4, 200).unwrap();

    for i in 0..4 {
        queue.enqueue(i).unwrap();
    }
    queue.dequeue().unwrap();
    queue.enqueue(4).unwrap(); // rear wraps to index 0

    assert_eq!(queue.peek_rear(), Some(&4));
    assert_eq!(queue.peek_front(), Some(&1));
}

#[test]
fn test_contains() {
    let mut queue = RingQueue::with_capacity(4, 200).unwrap();
    for i in 0..6 {
        queue.enqueue(i * 10).unwrap();
    }

    assert!(queue.contains(&0));
    assert!(queue.contains(&50));
    assert!(!queue.contains(&15));

    queue.dequeue().unwrap();
    assert!(!queue.contains(&0));
}

#[test]
fn test_clear_keeps_capacity_and_lock_state() {
    let mut queue = RingQueue::with_capacity(4, 200).unwrap();
    for i in 0..7 {
        queue.enqueue(i).unwrap();
    }
    queue.lock_capacity();

    queue.clear();

    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), 8);
    assert!(queue.is_locked());
    assert_eq!(queue.peek_front(), None);

    queue.unlock_capacity();
    queue.enqueue(42).unwrap();
    assert_eq!(queue.dequeue().unwrap(), 42);
}

#[test]
fn test_fits() {
    let mut queue = RingQueue::with_capacity(4, 200).unwrap();
    queue.enqueue(1).unwrap();

    assert!(queue.fits(3));
    assert!(!queue.fits(4));
}

#[test]
fn test_fits_with_huge_request_does_not_overflow() {
    let mut queue = RingQueue::with_capacity(4, 200).unwrap();
    queue.enqueue(1).unwrap();

    assert!(!queue.fits(usize::MAX));
    assert!(!queue.fits(usize::MAX - queue.len()));
}

#[test]
fn test_set_growth_rate_validation() {
    let mut queue: RingQueue<i32> = RingQueue::new();

    assert_eq!(
        queue.set_growth_rate(100),
        Err(QueueError::InvalidGrowthRate { growth_rate: 100 })
    );
    queue.set_growth_rate(150).unwrap();
    assert_eq!(queue.growth_rate(), 150);
}

#[test]
fn test_version_counts_structural_mutations() {
    let mut queue = RingQueue::with_capacity(2, 200).unwrap();
    let v0 = queue.version();

    queue.enqueue(1).unwrap();
    queue.dequeue().unwrap();
    assert_eq!(queue.version(), v0 + 2);

    // failed operations and configuration changes are not structural
    assert!(queue.dequeue().is_err());
    queue.lock_capacity();
    queue.unlock_capacity();
    queue.set_growth_rate(300).unwrap();
    assert_eq!(queue.version(), v0 + 2);

    queue.clear();
    assert_eq!(queue.version(), v0 + 3);
}
