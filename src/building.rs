use crate::*;

/// Floor count of the concrete puzzle instance.
pub const FLOOR_COUNT: usize = 4_usize;

/// An attempted construction would place the same item on two floors. This is never corrected
/// silently: the caller holds a bug, not a puzzle instance.
#[derive(Debug, Eq, PartialEq)]
pub enum InvariantViolation {
    DuplicateItem { floor: usize, item: Item },
}

/// An ordered sequence of `N` floors. Buildings are immutable values: every move constructs a new
/// one, and equality and hashing are structural, floor by floor.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Building<const N: usize = FLOOR_COUNT>([Floor; N]);

impl<const N: usize> Building<N> {
    /// Constructs a building from floors known to be pairwise disjoint (move generation and
    /// tests). External configurations should come through `try_new`.
    pub fn new(floors: [Floor; N]) -> Self {
        Self(floors)
    }

    pub fn try_new(floors: [Floor; N]) -> Result<Self, InvariantViolation> {
        let mut seen: Floor = Floor::default();

        for (floor_index, floor) in floors.into_iter().enumerate() {
            if let Some(item) = floor.iter().find(|item| seen.contains(*item)) {
                return Err(InvariantViolation::DuplicateItem {
                    floor: floor_index,
                    item,
                });
            }

            seen = seen.add(floor.iter());
        }

        Ok(Self(floors))
    }

    pub fn floors(&self) -> &[Floor; N] {
        &self.0
    }

    /// Union of all floors. Moves only relocate items, so this is constant across every building
    /// reachable from a given one.
    pub fn item_set(self) -> Floor {
        self.0
            .into_iter()
            .fold(Floor::default(), |item_set, floor| {
                item_set.add(floor.iter())
            })
    }

    pub fn is_possible(self) -> bool {
        self.0.into_iter().all(Floor::is_possible)
    }

    fn iter_neighboring_floors(position: usize) -> impl Iterator<Item = usize> {
        (position > 0_usize)
            .then(|| position - 1_usize)
            .into_iter()
            .chain((position + 1_usize < N).then(|| position + 1_usize))
    }

    /// Unordered choices of one or two items from the floor at `position`.
    fn iter_cargo(self, position: usize) -> impl Iterator<Item = (Item, Option<Item>)> {
        let floor: Floor = self.0[position];

        floor.iter().flat_map(move |item_a| {
            [(item_a, None)].into_iter().chain(
                floor
                    .iter()
                    .filter_map(move |item_b| (item_b > item_a).then_some((item_a, Some(item_b)))),
            )
        })
    }

    fn move_cargo(self, from: usize, to: usize, cargo: [Option<Item>; 2_usize]) -> Self {
        let mut floors: [Floor; N] = self.0;

        floors[from] = floors[from].remove(cargo.into_iter().flatten());
        floors[to] = floors[to].add(cargo.into_iter().flatten());

        Self(floors)
    }

    /// Every legal elevator trip out of `position`: a cargo of one or two items carried one floor
    /// up or down, kept iff every floor of the resulting building remains possible. Trips that
    /// would leave the `[0, N)` range are omitted here rather than reported.
    pub fn get_possible_buildings(self, position: usize) -> impl Iterator<Item = (usize, Self)> {
        self.iter_cargo(position).flat_map(move |(item_a, item_b)| {
            Self::iter_neighboring_floors(position).filter_map(move |destination| {
                let building: Self =
                    self.move_cargo(position, destination, [Some(item_a), item_b]);

                building.is_possible().then_some((destination, building))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TM_GENERATOR: Item = Item::generator(Element::Thulium);
    const TM_MICROCHIP: Item = Item::microchip(Element::Thulium);
    const PU_GENERATOR: Item = Item::generator(Element::Plutonium);
    const PU_MICROCHIP: Item = Item::microchip(Element::Plutonium);

    fn building(floors: [&[Item]; 4]) -> Building {
        Building::new(floors.map(|items| Floor::new(items.iter().copied())))
    }

    #[test]
    fn test_try_new() {
        assert_eq!(
            Building::try_new(*building([&[TM_GENERATOR], &[], &[TM_GENERATOR], &[]]).floors()),
            Err(InvariantViolation::DuplicateItem {
                floor: 2_usize,
                item: TM_GENERATOR,
            })
        );

        let disjoint: Building = building([&[TM_GENERATOR], &[TM_MICROCHIP], &[], &[]]);

        assert_eq!(Building::try_new(*disjoint.floors()), Ok(disjoint));
    }

    #[test]
    fn test_is_possible() {
        assert!(building([&[], &[], &[], &[]]).is_possible());
        assert!(building([&[TM_GENERATOR, TM_MICROCHIP], &[PU_GENERATOR], &[], &[]]).is_possible());
        assert!(!building([&[TM_MICROCHIP, PU_GENERATOR], &[], &[], &[]]).is_possible());
    }

    #[test]
    fn test_get_possible_buildings_with_no_generators() {
        // Two unshielded microchips alone: each may ride up alone, or both together.
        let start: Building = building([&[TM_MICROCHIP, PU_MICROCHIP], &[], &[], &[]]);
        let candidates: Vec<(usize, Building)> = start.get_possible_buildings(0_usize).collect();

        assert_eq!(candidates.len(), 3_usize);

        for expected in [
            (1_usize, building([&[PU_MICROCHIP], &[TM_MICROCHIP], &[], &[]])),
            (1_usize, building([&[TM_MICROCHIP], &[PU_MICROCHIP], &[], &[]])),
            (
                1_usize,
                building([&[], &[TM_MICROCHIP, PU_MICROCHIP], &[], &[]]),
            ),
        ] {
            assert!(candidates.contains(&expected));
        }
    }

    #[test]
    fn test_get_possible_buildings_respects_safety() {
        // Worked-example start: only the thulium microchip can join its generator one floor up.
        let start: Building = building([
            &[TM_MICROCHIP, PU_MICROCHIP],
            &[TM_GENERATOR],
            &[PU_GENERATOR],
            &[],
        ]);
        let candidates: Vec<(usize, Building)> = start.get_possible_buildings(0_usize).collect();

        assert_eq!(
            candidates,
            vec![(
                1_usize,
                building([
                    &[PU_MICROCHIP],
                    &[TM_GENERATOR, TM_MICROCHIP],
                    &[PU_GENERATOR],
                    &[],
                ]),
            )]
        );
    }

    #[test]
    fn test_get_possible_buildings_conserve_items_and_stay_in_range() {
        let start: Building =
            building([&[PU_MICROCHIP], &[TM_GENERATOR, TM_MICROCHIP], &[PU_GENERATOR], &[]]);
        let item_set: Floor = start.item_set();

        for position in 0_usize..FLOOR_COUNT {
            for (destination, candidate) in start.get_possible_buildings(position) {
                assert!(destination < FLOOR_COUNT);
                assert_eq!(position.abs_diff(destination), 1_usize);
                assert!(candidate.is_possible());
                assert_eq!(candidate.item_set(), item_set);
            }
        }
    }
}
