use bevy_ecs::component::Component;

use crate::model::{Color, WorldPos};

/// Transient rising text shown in the world, e.g. a bounty announcement.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct FloatingText {
    pub position: WorldPos,
    pub color: Color,
    pub text: String,
    /// Ticks left before the text is removed.
    pub remaining: u32,
}

/// Render a cash delta the way floating text shows it: `+$50`, `-$20`.
pub fn format_cash_tick(amount: i64) -> String {
    let sign = if amount < 0 { '-' } else { '+' };
    format!("{sign}${}", amount.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cash_tick_formatting() {
        assert_eq!(format_cash_tick(50), "+$50");
        assert_eq!(format_cash_tick(0), "+$0");
        assert_eq!(format_cash_tick(-20), "-$20");
        assert_eq!(format_cash_tick(i64::MIN), "-$9223372036854775808");
    }
}
