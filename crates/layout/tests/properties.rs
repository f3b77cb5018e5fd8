//! Property-based invariant tests for the cool bar engine.
//!
//! Random sequences of create / destroy / drag / wrap / resize operations are
//! applied to a bar, then the following must hold:
//!
//! 1. Re-partitioning twice at the same width yields the same rows.
//! 2. The item order is a permutation of the creation indices.
//! 3. After layout every item is at least its minimum width.
//! 4. A row whose minimums fit the client width fills it exactly.
//! 5. Restoring a captured layout reproduces every item's bounds.
//! 6. Every finished gesture leaves requested widths at or above minimum.

use coolbar_core::{Event, ItemId, Rect, Size, Surface, PRIMARY_BUTTON};
use coolbar_layout::{CoolBar, ItemSpec, RecordingSurface};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Create { minimum: i32, height: i32 },
    Destroy(usize),
    MoveLeft(usize, i32),
    MoveRight(usize, i32),
    MoveUp(usize, i32),
    MoveDown(usize, i32),
    Drag { item: usize, dx: i32, dy: i32 },
    DoubleClick(usize),
    Wrap(Vec<usize>),
    Resize(i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (10..80i32, 10..40i32).prop_map(|(minimum, height)| Op::Create { minimum, height }),
        1 => any::<usize>().prop_map(Op::Destroy),
        2 => (any::<usize>(), 1..120i32).prop_map(|(i, px)| Op::MoveLeft(i, px)),
        2 => (any::<usize>(), 1..120i32).prop_map(|(i, px)| Op::MoveRight(i, px)),
        1 => (any::<usize>(), 0..320i32).prop_map(|(i, x)| Op::MoveUp(i, x)),
        1 => (any::<usize>(), 0..320i32).prop_map(|(i, x)| Op::MoveDown(i, x)),
        2 => (any::<usize>(), -80..80i32, -60..60i32)
            .prop_map(|(item, dx, dy)| Op::Drag { item, dx, dy }),
        1 => any::<usize>().prop_map(Op::DoubleClick),
        1 => proptest::collection::vec(any::<usize>(), 0..4).prop_map(Op::Wrap),
        1 => (30..320i32).prop_map(Op::Resize),
    ]
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(op(), 1..40)
}

/// Visual item `i % count`, if the bar has any items.
fn pick(bar: &CoolBar<RecordingSurface>, i: usize) -> Option<ItemId> {
    let items = bar.items();
    (!items.is_empty()).then(|| items[i % items.len()])
}

fn apply(bar: &mut CoolBar<RecordingSurface>, op: &Op) {
    match *op {
        Op::Create { minimum, height } => {
            let index = bar.item_count();
            let spec = ItemSpec::new(format!("item{index}"), minimum).preferred(minimum, height);
            bar.create_item(spec, index).unwrap();
        }
        Op::Destroy(i) => {
            if let Some(id) = pick(bar, i) {
                bar.destroy_item(id).unwrap();
            }
        }
        Op::MoveLeft(i, px) => {
            if let Some(id) = pick(bar, i) {
                bar.move_left(id, px).unwrap();
            }
        }
        Op::MoveRight(i, px) => {
            if let Some(id) = pick(bar, i) {
                bar.move_right(id, px).unwrap();
            }
        }
        Op::MoveUp(i, x) => {
            if let Some(id) = pick(bar, i) {
                bar.move_up(id, x).unwrap();
            }
        }
        Op::MoveDown(i, x) => {
            if let Some(id) = pick(bar, i) {
                bar.move_down(id, x).unwrap();
            }
        }
        Op::Drag { item, dx, dy } => {
            if let Some(id) = pick(bar, item) {
                let grip = bar.get(id).unwrap().grip();
                let (x, y) = (grip.x + 1, grip.y + 1);
                bar.handle_event(Event::Press { button: PRIMARY_BUTTON, x, y });
                bar.handle_event(Event::Move { x: x + dx, y: y + dy });
                bar.handle_event(Event::Release { button: PRIMARY_BUTTON, x: x + dx, y: y + dy });
            }
        }
        Op::DoubleClick(i) => {
            if let Some(id) = pick(bar, i) {
                let grip = bar.get(id).unwrap().grip();
                bar.handle_event(Event::DoubleClick { x: grip.x + 1, y: grip.y + 1 });
            }
        }
        Op::Wrap(ref indices) => {
            let count = bar.item_count();
            if count > 0 {
                let indices: Vec<usize> = indices.iter().map(|i| i % count).collect();
                bar.set_wrap_indices(&indices).unwrap();
            }
        }
        Op::Resize(width) => {
            bar.surface_mut().set_width(width);
            bar.handle_event(Event::Resize { width });
        }
    }
}

fn run(width: i32, ops: &[Op]) -> CoolBar<RecordingSurface> {
    let mut bar = CoolBar::new(RecordingSurface::new(width, 0));
    for op in ops {
        apply(&mut bar, op);
    }
    bar.relayout();
    bar
}

fn bounds(bar: &CoolBar<RecordingSurface>) -> Vec<Rect> {
    bar.items().iter().map(|&id| bar.get(id).unwrap().bounds()).collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Partitioning is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn wrap_items_is_idempotent(width in 30..320i32, ops in ops(), max in 20..400i32) {
        let mut bar = run(width, &ops);
        bar.wrap_items(Some(max));
        let first = bar.rows().to_vec();
        bar.wrap_items(Some(max));
        prop_assert_eq!(bar.rows(), &first[..]);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Visual order is a permutation of creation order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn item_order_is_a_permutation(width in 30..320i32, ops in ops()) {
        let mut bar = CoolBar::new(RecordingSurface::new(width, 0));
        for op in &ops {
            apply(&mut bar, op);
            let mut order = bar.item_order();
            order.sort_unstable();
            prop_assert_eq!(order, (0..bar.item_count()).collect::<Vec<_>>(), "after {:?}", op);
            prop_assert!(bar.rows().iter().all(|row| !row.is_empty()), "empty row after {:?}", op);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Minimum widths hold after layout
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn layout_respects_minimum_widths(width in 30..320i32, ops in ops()) {
        let bar = run(width, &ops);
        for id in bar.items() {
            let item = bar.get(id).unwrap();
            prop_assert!(
                item.size().width >= item.minimum_width(),
                "{} is {} wide, minimum {}", id, item.size().width, item.minimum_width()
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Rows that fit fill the client width
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fitting_rows_conserve_width(width in 30..320i32, ops in ops()) {
        let bar = run(width, &ops);
        let client = bar.surface().client_width();
        for row in bar.rows() {
            let items: Vec<_> = row.items().iter().map(|&id| bar.get(id).unwrap()).collect();
            let minimums: i32 = items.iter().map(|item| item.minimum_width()).sum();
            if minimums <= client {
                let total: i32 = items.iter().map(|item| item.size().width).sum();
                prop_assert_eq!(total, client);
            }
            let mut x = 0;
            for item in &items {
                prop_assert_eq!(item.bounds().x, x);
                x = item.bounds().right();
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Captured layouts restore exactly
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn captured_layout_round_trips(width in 30..320i32, ops in ops()) {
        let mut bar = run(width, &ops);
        let before = bounds(&bar);
        let saved = bar.item_layout();

        let (order, wraps, sizes) = (bar.item_order(), bar.wrap_indices(), bar.item_sizes());
        bar.set_item_layout(&order, &wraps, &sizes).unwrap();
        prop_assert_eq!(bounds(&bar), before.clone());
        prop_assert_eq!(bar.item_layout(), saved.clone());

        bar.apply_item_layout(&saved).unwrap();
        prop_assert_eq!(bounds(&bar), before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Requested widths never end below the minimum
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn requested_width_at_least_minimum(width in 30..320i32, ops in ops()) {
        let bar = run(width, &ops);
        for id in bar.items() {
            let item = bar.get(id).unwrap();
            prop_assert!(
                item.requested_width() >= item.minimum_width(),
                "{} requests {}, minimum {}", id, item.requested_width(), item.minimum_width()
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Scenarios
// ═════════════════════════════════════════════════════════════════════════

fn bar_with(width: i32, mins: &[i32]) -> (CoolBar<RecordingSurface>, Vec<ItemId>) {
    let mut bar = CoolBar::new(RecordingSurface::new(width, 0));
    let ids = mins
        .iter()
        .enumerate()
        .map(|(i, &min)| bar.create_item(ItemSpec::new(format!("item{i}"), min).preferred(min, 20), i).unwrap())
        .collect();
    bar.relayout();
    (bar, ids)
}

#[test]
fn three_small_items_fill_one_row() {
    let (mut bar, ids) = bar_with(100, &[20, 20, 20]);
    bar.wrap_items(Some(100));
    assert_eq!(bar.rows().len(), 1);
    bar.layout_items();
    let widths: Vec<i32> = ids.iter().map(|&id| bar.get(id).unwrap().size().width).collect();
    assert_eq!(widths, vec![20, 20, 60]);
}

#[test]
fn wide_items_each_take_a_row() {
    let (mut bar, _) = bar_with(50, &[30, 30, 30, 30]);
    bar.wrap_items(Some(50));
    let shape: Vec<usize> = bar.rows().iter().map(|row| row.len()).collect();
    assert_eq!(shape, vec![1, 1, 1, 1]);
}

#[test]
fn dragging_left_stops_at_the_neighbours_minimum() {
    let (mut bar, ids) = bar_with(100, &[20, 20, 20]);
    bar.set_item_sizes(&[Size::new(25, 20), Size::new(20, 20), Size::new(55, 20)]).unwrap();
    assert_eq!(bar.get(ids[1]).unwrap().bounds().x, 25);

    bar.handle_event(Event::Press { button: PRIMARY_BUTTON, x: 26, y: 1 });
    bar.handle_event(Event::Move { x: 11, y: 1 });
    bar.handle_event(Event::Release { button: PRIMARY_BUTTON, x: 11, y: 1 });

    assert_eq!(bar.get(ids[0]).unwrap().size().width, 20);
    assert_eq!(bar.get(ids[1]).unwrap().bounds().x, 20);
}

#[test]
fn wrap_indices_split_and_read_back() {
    let (mut bar, ids) = bar_with(200, &[20, 20, 20, 20]);
    bar.set_wrap_indices(&[2]).unwrap();
    let rows: Vec<&[ItemId]> = bar.rows().iter().map(|row| row.items()).collect();
    assert_eq!(rows, vec![&ids[..2], &ids[2..]]);
    assert_eq!(bar.wrap_indices(), vec![2]);
}
