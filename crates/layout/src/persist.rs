use crate::{bar::CoolBar, wrap::{Row, RowBreak}};
use coolbar_core::{CoolBarError, ItemLayout, Result, Size, Surface};
use tracing::debug;

impl<S: Surface> CoolBar<S> {
    /// For each visual position, the creation index of the item shown there.
    pub fn item_order(&self) -> Vec<usize> {
        self.items()
            .into_iter()
            .filter_map(|id| self.creation.iter().position(|&other| other == id))
            .collect()
    }

    /// Show the items in `order` (creation indices) as a single row.
    ///
    /// Wrap flags are kept, so the next layout may split the row again.
    pub fn set_item_order(&mut self, order: &[usize]) -> Result<()> {
        self.check_item_order(order)?;
        self.apply_item_order(order);
        self.relayout();
        Ok(())
    }

    /// Visual positions that start a row because of an explicit wrap.
    /// Position 0 always starts the first row and is never listed.
    pub fn wrap_indices(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        let mut next = 0;
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 && self.items[row.items[0]].wrap {
                indices.push(next);
            }
            next += row.items.len();
        }
        indices
    }

    /// Make exactly the items at the given visual positions start new rows.
    pub fn set_wrap_indices(&mut self, indices: &[usize]) -> Result<()> {
        self.check_wrap_indices(indices)?;
        self.apply_wrap_indices(indices);
        self.relayout();
        Ok(())
    }

    /// Item sizes in visual order.
    pub fn item_sizes(&self) -> Vec<Size> {
        self.items().into_iter().map(|id| self.items[id].size()).collect()
    }

    /// Apply `sizes` to the items in visual order.
    pub fn set_item_sizes(&mut self, sizes: &[Size]) -> Result<()> {
        self.check_item_sizes(sizes)?;
        self.apply_item_sizes(sizes);
        self.relayout();
        Ok(())
    }

    /// Restore order, wraps and sizes in one step.  Everything is validated
    /// before anything changes; the bar is laid out once at the end.
    pub fn set_item_layout(&mut self, order: &[usize], wrap_indices: &[usize], sizes: &[Size]) -> Result<()> {
        self.check_item_order(order)?;
        self.check_wrap_indices(wrap_indices)?;
        self.check_item_sizes(sizes)?;
        debug!(
            "restore layout: order {order:?}, wraps {wrap_indices:?}, {} sizes",
            sizes.len()
        );

        self.apply_item_order(order);
        self.apply_wrap_indices(wrap_indices);
        self.apply_item_sizes(sizes);
        self.relayout();
        Ok(())
    }

    /// Capture the displayed arrangement.
    pub fn item_layout(&self) -> ItemLayout {
        ItemLayout {
            order:        self.item_order(),
            wrap_indices: self.wrap_indices(),
            sizes:        self.item_sizes(),
        }
    }

    pub fn apply_item_layout(&mut self, layout: &ItemLayout) -> Result<()> {
        self.set_item_layout(&layout.order, &layout.wrap_indices, &layout.sizes)
    }

    // ── Validation ────────────────────────────────────────────────────────────

    fn check_item_order(&self, order: &[usize]) -> Result<()> {
        let count = self.creation.len();
        if order.len() != count {
            return Err(CoolBarError::InvalidArgument(format!(
                "item order has {} entries, bar has {count} items",
                order.len()
            )));
        }
        let mut seen = vec![false; count];
        for &index in order {
            if index >= count {
                return Err(CoolBarError::InvalidRange { index, len: count });
            }
            if std::mem::replace(&mut seen[index], true) {
                return Err(CoolBarError::InvalidArgument(format!(
                    "item order lists {index} twice"
                )));
            }
        }
        Ok(())
    }

    fn check_wrap_indices(&self, indices: &[usize]) -> Result<()> {
        let count = self.creation.len();
        match indices.iter().find(|&&index| index >= count) {
            Some(&index) => Err(CoolBarError::InvalidRange { index, len: count }),
            None => Ok(()),
        }
    }

    fn check_item_sizes(&self, sizes: &[Size]) -> Result<()> {
        let count = self.creation.len();
        if sizes.len() != count {
            return Err(CoolBarError::InvalidArgument(format!(
                "{} sizes given, bar has {count} items",
                sizes.len()
            )));
        }
        Ok(())
    }

    // ── Mutation (arguments already validated) ────────────────────────────────

    fn apply_item_order(&mut self, order: &[usize]) {
        let row = order.iter().map(|&index| self.creation[index]).collect();
        self.rows = vec![Row::new(row, RowBreak::First)];
    }

    fn apply_wrap_indices(&mut self, indices: &[usize]) {
        for &id in &self.creation {
            self.items[id].wrap = false;
        }
        let visual = self.items();
        for &index in indices {
            self.items[visual[index]].wrap = true;
        }
    }

    fn apply_item_sizes(&mut self, sizes: &[Size]) {
        for (id, &size) in self.items().into_iter().zip(sizes) {
            self.items[id].apply_size(size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{item::ItemSpec, surface::RecordingSurface};
    use coolbar_core::{ItemId, Rect};

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

    fn all_bounds(bar: &CoolBar<RecordingSurface>) -> Vec<Rect> {
        (0..bar.item_count())
            .map(|i| bar.get(bar.item(i).unwrap()).unwrap().bounds())
            .collect()
    }

    #[test]
    fn set_wrap_indices_splits_rows() {
        let (mut bar, ids) = bar_with(200, &[20, 20, 20, 20]);
        bar.set_wrap_indices(&[2]).unwrap();
        let rows: Vec<&[ItemId]> = bar.rows().iter().map(Row::items).collect();
        assert_eq!(rows, vec![&ids[..2], &ids[2..]]);
        assert_eq!(bar.wrap_indices(), vec![2]);
        assert_eq!(bar.rows()[1].start(), RowBreak::Explicit);
    }

    #[test]
    fn width_forced_rows_are_not_wrap_indices() {
        let (bar, _) = bar_with(50, &[30, 30, 30]);
        assert_eq!(bar.rows().len(), 3);
        assert!(bar.wrap_indices().is_empty());
    }

    #[test]
    fn zero_wrap_index_is_accepted_and_ignored() {
        let (mut bar, _) = bar_with(200, &[20, 20]);
        bar.set_wrap_indices(&[0]).unwrap();
        assert_eq!(bar.rows().len(), 1);
        assert!(bar.wrap_indices().is_empty());
    }

    #[test]
    fn set_item_order_rejects_bad_permutations() {
        let (mut bar, ids) = bar_with(200, &[20, 20, 20]);
        assert!(matches!(bar.set_item_order(&[0, 1]), Err(CoolBarError::InvalidArgument(_))));
        assert!(matches!(
            bar.set_item_order(&[0, 1, 3]),
            Err(CoolBarError::InvalidRange { index: 3, len: 3 })
        ));
        assert!(matches!(bar.set_item_order(&[0, 1, 1]), Err(CoolBarError::InvalidArgument(_))));
        assert_eq!(bar.items(), ids);

        bar.set_item_order(&[2, 1, 0]).unwrap();
        assert_eq!(bar.item_order(), vec![2, 1, 0]);
        assert_eq!(bar.items(), vec![ids[2], ids[1], ids[0]]);
    }

    #[test]
    fn set_item_order_keeps_wrap_flags() {
        let (mut bar, ids) = bar_with(200, &[20, 20, 20]);
        bar.set_wrap_indices(&[1]).unwrap();
        bar.set_item_order(&[1, 0, 2]).unwrap();
        // Item 1 still carries its wrap but now leads the bar; nothing wraps.
        assert_eq!(bar.items(), vec![ids[1], ids[0], ids[2]]);
        assert_eq!(bar.rows().len(), 1);
    }

    #[test]
    fn item_layout_validates_before_mutating() {
        let (mut bar, ids) = bar_with(200, &[20, 20, 20]);
        let before = all_bounds(&bar);
        let sizes = vec![Size::new(30, 20); 3];
        assert!(bar.set_item_layout(&[2, 1, 0], &[5], &sizes).is_err());
        assert!(bar.set_item_layout(&[2, 1, 0], &[1], &sizes[..2]).is_err());
        assert_eq!(bar.items(), ids);
        assert_eq!(all_bounds(&bar), before);
    }

    #[test]
    fn set_item_layout_applies_order_then_wraps_then_sizes() {
        let (mut bar, ids) = bar_with(200, &[20, 20, 20]);
        let sizes = [Size::new(50, 24), Size::new(30, 20), Size::new(40, 20)];
        bar.set_item_layout(&[2, 0, 1], &[2], &sizes).unwrap();

        assert_eq!(bar.items(), vec![ids[2], ids[0], ids[1]]);
        assert_eq!(bar.wrap_indices(), vec![2]);
        assert_eq!(bounds_of(&bar, ids[2]), Rect::new(0, 0, 50, 24));
        assert_eq!(bounds_of(&bar, ids[0]), Rect::new(50, 0, 150, 24));
        assert_eq!(bounds_of(&bar, ids[1]), Rect::new(0, 26, 200, 20));
        assert_eq!(bar.surface().size().height, 46);
    }

    fn bounds_of(bar: &CoolBar<RecordingSurface>, id: ItemId) -> Rect {
        bar.get(id).unwrap().bounds()
    }

    #[test]
    fn set_item_sizes_requires_one_size_per_item() {
        let (mut bar, _) = bar_with(200, &[20, 20]);
        assert!(bar.set_item_sizes(&[Size::new(30, 20)]).is_err());
        bar.set_item_sizes(&[Size::new(70, 20), Size::new(10, 20)]).unwrap();
        assert_eq!(bar.item_sizes(), vec![Size::new(70, 20), Size::new(130, 20)]);
    }

    #[test]
    fn captured_layout_round_trips() {
        let (mut bar, ids) = bar_with(120, &[20, 30, 20, 40]);
        bar.set_wrap_indices(&[3]).unwrap();
        bar.move_right(ids[1], 15).unwrap();
        bar.set_item_order(&[3, 1, 0, 2]).unwrap();
        bar.set_wrap_indices(&[2]).unwrap();
        bar.move_right(ids[1], 7).unwrap();

        let saved = bar.item_layout();
        let before = all_bounds(&bar);
        bar.apply_item_layout(&saved).unwrap();
        assert_eq!(bar.item_layout(), saved);
        assert_eq!(all_bounds(&bar), before);
    }
}
