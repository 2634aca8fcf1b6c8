use fixed_ring::RingBuffer;
use proptest::prelude::*;
use std::collections::VecDeque;

const CAP: usize = 8;

#[derive(Clone, Debug)]
enum Op {
    Write(u16),
    Read,
    Bulk(Vec<u16>),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u16>().prop_map(Op::Write),
        3 => Just(Op::Read),
        2 => prop::collection::vec(any::<u16>(), 0..=CAP + 1).prop_map(Op::Bulk),
        1 => Just(Op::Clear),
    ]
}

fn check_state(ring: &RingBuffer<u16, CAP>, model: &VecDeque<u16>) {
    assert_eq!(ring.count(), model.len());
    assert!(ring.count() <= CAP);
    assert_eq!(ring.is_empty(), model.is_empty());
    assert_eq!(ring.is_full(), model.len() == CAP);
    assert!(!(ring.is_empty() && ring.is_full()));
    assert_eq!(ring.first().ok(), model.front());
    assert_eq!(ring.last().ok(), model.back());
    assert!(ring.iter().eq(model.iter()));
}

proptest! {
    #[test]
    fn matches_bounded_queue(ops in prop::collection::vec(op(), 0..200)) {
        let mut ring = RingBuffer::<u16, CAP>::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::Write(v) => {
                    let fits = model.len() < CAP;
                    prop_assert_eq!(ring.write(v), fits);
                    if fits {
                        model.push_back(v);
                    }
                }
                Op::Read => {
                    prop_assert_eq!(ring.read(), model.pop_front());
                }
                Op::Bulk(values) => {
                    let fits = !values.is_empty() && values.len() <= CAP - model.len();
                    prop_assert_eq!(ring.write_slice(&values), fits);
                    if fits {
                        model.extend(values);
                    }
                }
                Op::Clear => {
                    ring.clear();
                    model.clear();
                    prop_assert!(ring.is_empty());
                }
            }
            check_state(&ring, &model);
        }
    }

    #[test]
    fn round_trip(values in prop::collection::vec(any::<u32>(), 0..=CAP)) {
        let mut ring = RingBuffer::<u32, CAP>::new();
        for v in &values {
            prop_assert!(ring.write(*v));
        }
        let out: Vec<u32> = ring.drain().collect();
        prop_assert_eq!(out, values);
    }

    #[test]
    fn bulk_equals_sequential(
        prefix in prop::collection::vec(any::<u8>(), 0..CAP),
        values in prop::collection::vec(any::<u8>(), 1..=CAP),
    ) {
        let mut bulk = RingBuffer::<u8, CAP>::new();
        let mut single = RingBuffer::<u8, CAP>::new();
        for v in &prefix {
            bulk.write(*v);
            single.write(*v);
        }
        // rotate the read cursor so the bulk write can wrap
        bulk.read();
        single.read();

        if bulk.write_slice(&values) {
            for v in &values {
                prop_assert!(single.write(*v));
            }
        } else {
            prop_assert!(single.free() < values.len());
        }
        prop_assert_eq!(bulk.count(), single.count());
        prop_assert!(bulk.iter().eq(single.iter()));
    }
}
