//! Tests for typed builds: completeness, order independence, re-setting,
//! value fidelity and optional fields after completion.

use proof_builder::*;
use std::marker::PhantomData;
use std::rc::Rc;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub label: String,
}

selectors! {
    pub mod point for Point {
        x: i32,
        y: i32,
        label: String,
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Sample {
    pub a: f64,
    pub b: String,
    pub c: Vec<u8>,
    pub tag: Option<char>,
    pub count: u64,
}

selectors! {
    pub mod sample for Sample {
        a: f64,
        b: String,
        c: Vec<u8>,
        tag: Option<char>,
        count: u64,
    }
}

#[derive(Default)]
pub struct Holder {
    pub shared: Rc<()>,
    pub n: u8,
}

selectors! {
    mod holder for Holder {
        shared: Rc<()>,
        n: u8,
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Slot<T> {
    pub item: T,
    pub count: u32,
}

selectors! {
    pub mod byte_slot for Slot<u8> {
        item: u8,
        count: u32,
    }
}

/// Selector for `item` on every `Slot<T>`.
pub struct SlotItem<T>(PhantomData<fn() -> T>);

impl<T> SlotItem<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: 'static> Field for SlotItem<T> {
    type Owner = Slot<T>;
    type Value = T;

    const NAME: &'static str = "item";
    const INDEX: usize = 0;

    fn get(target: &Slot<T>) -> &T {
        &target.item
    }

    fn get_mut(target: &mut Slot<T>) -> &mut T {
        &mut target.item
    }
}

/// Selector for `count` on every `Slot<T>`.
pub struct SlotCount<T>(PhantomData<fn() -> T>);

impl<T: 'static> Field for SlotCount<T> {
    type Owner = Slot<T>;
    type Value = u32;

    const NAME: &'static str = "count";
    const INDEX: usize = 1;

    fn get(target: &Slot<T>) -> &u32 {
        &target.count
    }

    fn get_mut(target: &mut Slot<T>) -> &mut u32 {
        &mut target.count
    }
}

fn slot_of<T: Default + 'static>(item: T, count: u32) -> Slot<T> {
    <required![Slot<T>; SlotItem<T>, SlotCount<T>]>::default()
        .set(SlotCount::<T>(PhantomData), count)
        .set(SlotItem::<T>::new(), item)
        .build()
}

type PointBuilder = required![Point; point::x, point::y];
type SampleBuilder = required![Sample; sample::a, sample::b, sample::c];

fn expected_sample() -> Sample {
    Sample {
        a: 0.1 + 0.2,
        b: "bee".to_string(),
        c: vec![1, 2, 3],
        tag: None,
        count: 0,
    }
}

fn c() -> Vec<u8> {
    vec![1, 2, 3]
}

#[test]
fn test_point_x_then_y() {
    let p = PointBuilder::default()
        .set(point::x, 3)
        .set(point::y, 4)
        .build();

    assert_eq!(
        p,
        Point {
            x: 3,
            y: 4,
            label: String::new()
        }
    );
}

#[test]
fn test_point_y_then_x() {
    let xy = PointBuilder::default()
        .set(point::x, 3)
        .set(point::y, 4)
        .build();
    let yx = PointBuilder::default()
        .set(point::y, 4)
        .set(point::x, 3)
        .build();

    assert_eq!(xy, yx);
}

#[test]
fn test_partial_build_still_pending() {
    let partial = PointBuilder::default().set(point::x, 3);

    assert_eq!(partial.remaining(), vec!["y"]);
    assert_eq!(<required![Point; point::y]>::PENDING, 1);
}

#[test]
fn test_all_orders_of_three_fields() {
    let a = 0.1 + 0.2;
    let b = || "bee".to_string();

    let results = [
        SampleBuilder::default()
            .set(sample::a, a)
            .set(sample::b, b())
            .set(sample::c, c())
            .build(),
        SampleBuilder::default()
            .set(sample::a, a)
            .set(sample::c, c())
            .set(sample::b, b())
            .build(),
        SampleBuilder::default()
            .set(sample::b, b())
            .set(sample::a, a)
            .set(sample::c, c())
            .build(),
        SampleBuilder::default()
            .set(sample::b, b())
            .set(sample::c, c())
            .set(sample::a, a)
            .build(),
        SampleBuilder::default()
            .set(sample::c, c())
            .set(sample::a, a)
            .set(sample::b, b())
            .build(),
        SampleBuilder::default()
            .set(sample::c, c())
            .set(sample::b, b())
            .set(sample::a, a)
            .build(),
    ];

    for result in results {
        assert_eq!(result, expected_sample());
    }
}

#[test]
fn test_intermediate_types_shrink() {
    let start = SampleBuilder::default();
    assert_eq!(start.remaining(), vec!["a", "b", "c"]);

    let after_b: required![Sample; sample::a, sample::c] = start.set(sample::b, "bee".into());
    assert_eq!(after_b.remaining(), vec!["a", "c"]);

    let after_c: required![Sample; sample::a] = after_b.set(sample::c, c());
    assert_eq!(after_c.remaining(), vec!["a"]);

    let done: Done<Sample> = after_c.set(sample::a, 0.1 + 0.2);
    assert_eq!(done.get(), &expected_sample());
}

#[test]
fn test_value_fidelity() {
    let a = f64::from_bits(0x3FB9_9999_9999_999A);
    let s = Sample {
        tag: Some('z'),
        count: u64::MAX,
        ..Sample::default()
    };

    let built = SampleBuilder::new(s)
        .set(sample::c, vec![0, 255])
        .set(sample::a, a)
        .set(sample::b, "ünïcødé".to_string())
        .build();

    assert_eq!(built.a.to_bits(), a.to_bits());
    assert_eq!(built.b, "ünïcødé");
    assert_eq!(built.c, vec![0, 255]);
    assert_eq!(built.tag, Some('z'));
    assert_eq!(built.count, u64::MAX);
}

#[test]
fn test_optional_fields_after_completion() {
    let p = PointBuilder::default()
        .set(point::x, 1)
        .set(point::y, 2)
        .set(point::label, "corner".to_string())
        .build();

    assert_eq!(p.label, "corner");
}

#[test]
fn test_resetting_after_completion_last_write_wins() {
    let p = PointBuilder::default()
        .set(point::x, 1)
        .set(point::y, 2)
        .set(point::x, 10)
        .set(point::x, 20)
        .build();

    assert_eq!(p.x, 20);
    assert_eq!(p.y, 2);
}

#[test]
fn test_untracked_before_completion() {
    let p = PointBuilder::default()
        .set_untracked(point::label, "early".to_string())
        .set(point::y, 2)
        .set_untracked(point::label, "later".to_string())
        .set(point::x, 1)
        .build();

    assert_eq!(p.label, "later");
}

#[test]
fn test_untracked_write_does_not_satisfy_required() {
    let partial = PointBuilder::default().set_untracked(point::x, 5);
    assert_eq!(partial.remaining(), vec!["x", "y"]);

    let p = partial.set(point::y, 6).set(point::x, 7).build();
    assert_eq!((p.x, p.y), (7, 6));
}

#[test]
fn test_persistent_access_on_done() {
    let mut done = PointBuilder::default().set(point::x, 1).set(point::y, 2);

    done.assign(point::label, "in place".to_string());
    assert_eq!(done.get().label, "in place");

    done.get_mut().y = 5;
    let p = done.build();
    assert_eq!((p.x, p.y), (1, 5));
}

#[test]
fn test_no_required_fields() {
    let p = <required![Point]>::new(Point::default())
        .set(point::label, "free".to_string())
        .build();

    assert_eq!(p.label, "free");
    assert_eq!(<required![Point]>::PENDING, 0);
}

#[test]
fn test_same_typed_fields_stay_distinct() {
    type Swap = required![Point; point::y, point::x];

    let p = Swap::default().set(point::x, 1).set(point::y, 2).build();
    assert_eq!((p.x, p.y), (1, 2));

    assert!(same_field::<point::x, point::x>());
    assert!(!same_field::<point::x, point::y>());
}

#[test]
fn test_single_instance_threaded_through() {
    let start = Point {
        label: "kept".to_string(),
        ..Point::default()
    };

    let p = PointBuilder::new(start)
        .set(point::y, 2)
        .set(point::x, 1)
        .build();

    assert_eq!(p.label, "kept");
}

#[test]
fn test_abandoned_build_drops_value() {
    let shared = Rc::new(());
    {
        let _partial = <required![Holder; holder::shared, holder::n]>::default()
            .set(holder::shared, Rc::clone(&shared));
        assert_eq!(Rc::strong_count(&shared), 2);
    }
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn test_selectors_for_generic_instantiation() {
    let slot = <required![Slot<u8>; byte_slot::count, byte_slot::item]>::default()
        .set(byte_slot::item, 9)
        .set(byte_slot::count, 2)
        .build();

    assert_eq!(slot, Slot { item: 9, count: 2 });
}

#[test]
fn test_hand_written_generic_selectors() {
    let text = slot_of("seven".to_string(), 7);
    assert_eq!(text.item, "seven");
    assert_eq!(text.count, 7);

    let partial = <required![Slot<i64>; SlotItem<i64>, SlotCount<i64>]>::default()
        .set(SlotItem::<i64>::new(), -1);
    assert_eq!(partial.remaining(), vec!["count"]);

    assert!(!same_field::<SlotItem<u8>, SlotItem<i64>>());
    assert_ne!(FieldId::of::<SlotItem<u8>>(), FieldId::of::<SlotItem<i64>>());
}
