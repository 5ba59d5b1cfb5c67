use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Number of distinct items that can exist across the whole facility: one generator and one
/// microchip per element.
pub const ITEM_COUNT: usize = Element::COUNT * ItemKind::COUNT;

#[derive(Clone, Copy, Debug, EnumCount, EnumIter, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Element {
    Thulium,
    Plutonium,
    Strontium,
    Promethium,
    Ruthenium,
}

impl Element {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Thulium => "Tm",
            Self::Plutonium => "Pu",
            Self::Strontium => "Sr",
            Self::Promethium => "Pm",
            Self::Ruthenium => "Ru",
        }
    }
}

#[derive(Clone, Copy, Debug, EnumCount, EnumIter, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ItemKind {
    Generator,
    Microchip,
}

impl ItemKind {
    pub const fn symbol(self) -> char {
        match self {
            Self::Generator => 'G',
            Self::Microchip => 'M',
        }
    }
}

/// An element paired with a kind. Items carry no identity beyond their value: two items of the
/// same element and kind are the same item.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Item {
    pub element: Element,
    pub kind: ItemKind,
}

impl Item {
    pub const fn new(element: Element, kind: ItemKind) -> Self {
        Self { element, kind }
    }

    pub const fn generator(element: Element) -> Self {
        Self::new(element, ItemKind::Generator)
    }

    pub const fn microchip(element: Element) -> Self {
        Self::new(element, ItemKind::Microchip)
    }

    /// Bit position of this item within a `Floor`.
    pub(crate) const fn index(self) -> usize {
        self.element as usize * ItemKind::COUNT + self.kind as usize
    }

    pub fn iter_all() -> impl Iterator<Item = Self> {
        Element::iter().flat_map(|element| ItemKind::iter().map(move |kind| Self { element, kind }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_dense_and_distinct() {
        let indices: Vec<usize> = Item::iter_all().map(Item::index).collect();

        assert_eq!(indices, (0_usize..ITEM_COUNT).collect::<Vec<usize>>());
    }
}
