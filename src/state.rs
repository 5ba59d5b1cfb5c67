use {
    crate::*,
    std::fmt::{Display, Formatter, Result as FmtResult},
    strum::IntoEnumIterator,
};

/// Elevator position plus full building configuration: the search's unit of visitation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct State<const N: usize = FLOOR_COUNT> {
    pub position: usize,
    pub building: Building<N>,
}

impl<const N: usize> State<N> {
    pub fn new(position: usize, building: Building<N>) -> Self {
        Self { position, building }
    }

    pub fn iter_neighbors(self) -> impl Iterator<Item = Self> {
        self.building
            .get_possible_buildings(self.position)
            .map(|(position, building)| Self { position, building })
    }

    /// The state the shuffle drives toward: every item of this building on the top floor, with
    /// the elevator alongside.
    pub fn assembly_goal(self) -> Self {
        let mut floors: [Floor; N] = [Floor::default(); N];

        floors[N - 1_usize] = self.building.item_set();

        Self {
            position: N - 1_usize,
            building: Building::new(floors),
        }
    }
}

impl<const N: usize> Display for State<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for position in (0_usize..N).rev() {
            write!(
                f,
                "F{} {} ",
                position + 1_usize,
                if position == self.position { 'E' } else { '.' }
            )?;

            let floor: Floor = self.building.floors()[position];

            for element in Element::iter() {
                for kind in ItemKind::iter() {
                    if floor.contains(Item::new(element, kind)) {
                        write!(f, "{}{} ", element.symbol(), kind.symbol())?;
                    } else {
                        write!(f, "... ")?;
                    }
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
