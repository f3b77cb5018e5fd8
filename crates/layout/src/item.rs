use crate::GRIP_WIDTH;
use coolbar_config::ItemConfig;
use coolbar_core::{ItemId, Rect, Size};
use std::collections::HashMap;
use std::ops::{Index, IndexMut};

/// Construction parameters for a new item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSpec {
    pub label: String,
    /// Hard floor for the width, grip included.  Raised to [`GRIP_WIDTH`].
    pub minimum_width: i32,
    pub preferred_width: i32,
    pub preferred_height: i32,
}

impl ItemSpec {
    pub fn new(label: impl Into<String>, minimum_width: i32) -> Self {
        Self {
            label: label.into(),
            minimum_width,
            preferred_width: minimum_width,
            preferred_height: 0,
        }
    }

    #[must_use]
    pub fn preferred(mut self, width: i32, height: i32) -> Self {
        self.preferred_width = width;
        self.preferred_height = height;
        self
    }
}

impl From<&ItemConfig> for ItemSpec {
    fn from(cfg: &ItemConfig) -> Self {
        Self {
            label:            cfg.label.clone(),
            minimum_width:    cfg.minimum_width,
            preferred_width:  cfg.preferred_width,
            preferred_height: cfg.preferred_height,
        }
    }
}

/// One cool item.  Bounds are owned by the bar and only change through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub(crate) label: String,
    pub(crate) minimum_width: i32,
    pub(crate) preferred: Size,
    pub(crate) requested_width: i32,
    /// Begins a new row in the persisted arrangement.
    pub(crate) wrap: bool,
    /// The preferred size was set explicitly and is no longer tracked by
    /// `set_size`.
    pub(crate) ideal: bool,
    /// The item's own height.  Its bounds take the height of its row.
    pub(crate) height: i32,
    pub(crate) bounds: Rect,
}

impl Item {
    pub(crate) fn new(spec: ItemSpec) -> Self {
        let minimum_width = spec.minimum_width.max(GRIP_WIDTH);
        let height = spec.preferred_height.max(0);
        Self {
            label: spec.label,
            minimum_width,
            preferred: Size::new(spec.preferred_width.max(minimum_width), height),
            requested_width: minimum_width,
            wrap: false,
            ideal: false,
            height,
            bounds: Rect::new(0, 0, minimum_width, height),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn minimum_width(&self) -> i32 {
        self.minimum_width
    }

    pub fn preferred_size(&self) -> Size {
        self.preferred
    }

    pub fn requested_width(&self) -> i32 {
        self.requested_width
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn is_ideal(&self) -> bool {
        self.ideal
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    /// The draggable handle at the left edge of the item.
    pub fn grip(&self) -> Rect {
        Rect::new(self.bounds.x, self.bounds.y, GRIP_WIDTH, self.bounds.height)
    }

    /// Clamp and store an explicit size.  Non-ideal items also adopt it as
    /// their preferred size.
    pub(crate) fn apply_size(&mut self, size: Size) {
        let width = size.width.max(self.minimum_width);
        let height = size.height.max(0);
        if !self.ideal {
            self.preferred = Size::new(width, height);
        }
        self.height = height;
        self.bounds.width = width;
        self.bounds.height = height;
        self.requested_width = width;
    }

    pub(crate) fn set_width(&mut self, x: i32, width: i32) {
        self.bounds.x = x;
        self.bounds.width = width;
        self.requested_width = width;
    }
}

/// Items keyed by id.  Indexing panics on an unknown id, like slice
/// indexing; ids held in rows are always present.
#[derive(Debug, Clone, Default)]
pub(crate) struct ItemStore(HashMap<ItemId, Item>);

impl ItemStore {
    pub(crate) fn get(&self, id: ItemId) -> Option<&Item> {
        self.0.get(&id)
    }

    pub(crate) fn insert(&mut self, id: ItemId, item: Item) {
        self.0.insert(id, item);
    }

    pub(crate) fn remove(&mut self, id: ItemId) -> Option<Item> {
        self.0.remove(&id)
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<(ItemId, Item)> for ItemStore {
    fn from_iter<T: IntoIterator<Item = (ItemId, Item)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<ItemId> for ItemStore {
    type Output = Item;

    fn index(&self, id: ItemId) -> &Item {
        match self.0.get(&id) {
            Some(item) => item,
            None => panic!("no item {id} in store"),
        }
    }
}

impl IndexMut<ItemId> for ItemStore {
    fn index_mut(&mut self, id: ItemId) -> &mut Item {
        match self.0.get_mut(&id) {
            Some(item) => item,
            None => panic!("no item {id} in store"),
        }
    }
}
