use {crate::*, bitvec::prelude::*, static_assertions::const_assert};

type ItemBits = BitArr!(for ITEM_COUNT, in u16);

// A floor packs one bit per element and kind slot into a single `u16`.
const_assert!(ITEM_COUNT <= u16::BITS as usize);

/// An unordered collection of items on one floor. Floors are never mutated after construction:
/// `add` and `remove` build new values, so floors can be shared freely between states.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Floor(ItemBits);

impl Floor {
    pub fn new<I: IntoIterator<Item = Item>>(items: I) -> Self {
        Self::default().add(items)
    }

    /// Union of the current contents and `items`. Items already present collapse to their single
    /// canonical value.
    pub fn add<I: IntoIterator<Item = Item>>(self, items: I) -> Self {
        let mut floor: Self = self;

        for item in items {
            floor.0.set(item.index(), true);
        }

        floor
    }

    /// The current contents with `items` subtracted. Removing a non-member is a no-op for that
    /// member.
    pub fn remove<I: IntoIterator<Item = Item>>(self, items: I) -> Self {
        let mut floor: Self = self;

        for item in items {
            floor.0.set(item.index(), false);
        }

        floor
    }

    pub fn contains(self, item: Item) -> bool {
        self.0[item.index()]
    }

    pub fn iter(self) -> impl Iterator<Item = Item> {
        Item::iter_all().filter(move |item| self.contains(*item))
    }

    pub fn iter_generators(self) -> impl Iterator<Item = Item> {
        self.iter().filter(|item| item.kind == ItemKind::Generator)
    }

    pub fn iter_microchips(self) -> impl Iterator<Item = Item> {
        self.iter().filter(|item| item.kind == ItemKind::Microchip)
    }

    pub fn len(self) -> usize {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0_usize
    }

    /// A floor is possible iff it holds no generator, or every microchip on it is shielded by its
    /// own element's generator. Safety is local to the floor: only co-located generators endanger
    /// a microchip.
    pub fn is_possible(self) -> bool {
        self.iter_generators().next().is_none()
            || self
                .iter_microchips()
                .all(|microchip| self.contains(Item::generator(microchip.element)))
    }
}
