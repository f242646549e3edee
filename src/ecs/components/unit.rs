use bevy_ecs::component::Component;

use crate::model::WorldPos;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position(pub WorldPos);

/// Build cost of a unit.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Valued {
    pub cost: i32,
}

/// Overrides the sell value otherwise derived from [`Valued`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CustomSellValue {
    pub value: i32,
}

/// Sell value of a unit: the custom override if present, else its cost, else 0.
pub fn sell_value(valued: Option<&Valued>, custom: Option<&CustomSellValue>) -> i32 {
    match (custom, valued) {
        (Some(custom), _) => custom.value,
        (None, Some(valued)) => valued.cost,
        (None, None) => 0,
    }
}
