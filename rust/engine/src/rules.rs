use crate::player::Action;

/// Actions offered when the dealer shows a ten-valued card or an Ace.
pub fn insurance_actions() -> Vec<Action> {
    vec![Action::Insure, Action::Skip]
}

/// Actions offered for a splittable pair.
pub fn split_actions() -> Vec<Action> {
    vec![Action::Split, Action::Skip]
}

/// Actions available for a hand still in play.
///
/// Hit and stand are always offered. Double-down needs enough bankroll to
/// match the hand's bet. Surrender is only offered as the first action of a
/// round in which no split happened.
///
/// # Examples
///
/// ```
/// use blackjack_engine::player::Action;
/// use blackjack_engine::rules::play_actions;
///
/// assert_eq!(
///     play_actions(true, true),
///     vec![Action::Hit, Action::Stand, Action::DoubleDown, Action::Surrender]
/// );
/// assert_eq!(play_actions(false, false), vec![Action::Hit, Action::Stand]);
/// ```
pub fn play_actions(can_double: bool, can_surrender: bool) -> Vec<Action> {
    let mut allowed = vec![Action::Hit, Action::Stand];
    if can_double {
        allowed.push(Action::DoubleDown);
    }
    if can_surrender {
        allowed.push(Action::Surrender);
    }
    allowed
}
