use std::io;

use crate::money::Money;
use crate::round::Round;
use crate::session::{SessionStatus, SessionSummary};

/// Observer notified after each state change of a session. Implementations
/// query the round for whatever they display; every hook defaults to doing
/// nothing.
pub trait Presenter {
    fn round_started(&mut self, _status: &SessionStatus) -> io::Result<()> {
        Ok(())
    }

    /// Initial cards are out; only the dealer's up-card should be shown.
    fn table_dealt(&mut self, _round: &Round) -> io::Result<()> {
        Ok(())
    }

    /// A split, hit or double changed the player's hands.
    fn hands_updated(&mut self, _round: &Round) -> io::Result<()> {
        Ok(())
    }

    fn surrendered(&mut self, _hand: usize, _refund: Money) -> io::Result<()> {
        Ok(())
    }

    fn round_settled(&mut self, _round: &Round, _bankroll: Money) -> io::Result<()> {
        Ok(())
    }

    fn session_finished(&mut self, _summary: &SessionSummary) -> io::Result<()> {
        Ok(())
    }
}
