use crate::{Element::*, *};

/// Initial arrangement of the radioisotope testing facility: the elevator and three generators on
/// the first floor, the plutonium and strontium microchips one floor above their generators, and
/// the promethium and ruthenium pairs together on the third floor.
pub fn testing_facility() -> State<FLOOR_COUNT> {
    State::new(
        0_usize,
        Building::new([
            Floor::new([
                Item::generator(Thulium),
                Item::microchip(Thulium),
                Item::generator(Plutonium),
                Item::generator(Strontium),
            ]),
            Floor::new([Item::microchip(Plutonium), Item::microchip(Strontium)]),
            Floor::new([
                Item::generator(Promethium),
                Item::microchip(Promethium),
                Item::generator(Ruthenium),
                Item::microchip(Ruthenium),
            ]),
            Floor::default(),
        ]),
    )
}
