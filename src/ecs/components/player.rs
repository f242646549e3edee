use bevy_ecs::component::Component;

use crate::model::Color;

/// Marker for owner entities (players/factions).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerColor(pub Color);

/// Per-owner cash ledger.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerResources {
    pub cash: i64,
    /// Running total of positive changes.
    pub earned: i64,
    /// Running total of negative changes, as a positive number.
    pub spent: i64,
}

impl PlayerResources {
    pub fn with_cash(cash: i64) -> Self {
        Self {
            cash,
            ..Self::default()
        }
    }

    /// Apply a cash delta. Saturates instead of overflowing.
    pub fn change_cash(&mut self, amount: i64) {
        self.cash = self.cash.saturating_add(amount);
        if amount >= 0 {
            self.earned = self.earned.saturating_add(amount);
        } else {
            self.spent = self.spent.saturating_add(amount.saturating_neg());
        }
    }
}
