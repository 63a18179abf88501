use lotto_game::SimulationEvent;
use lotto_game::constants::{
    LABEL_PLAYER_DRAW, LABEL_RANDOM_DRAW, MSG_LIFESPAN_EXCEEDED, MSG_WON,
};
use std::io::{self, Write};

/// Print the console line(s) for one simulation event.
pub fn write_event<W: Write + ?Sized>(out: &mut W, event: &SimulationEvent<'_>) -> io::Result<()> {
    match event {
        SimulationEvent::RoundDrawn { player, draw, .. } => {
            writeln!(out, "{LABEL_PLAYER_DRAW}{player}")?;
            writeln!(out, "{LABEL_RANDOM_DRAW}{draw}")
        }
        SimulationEvent::Milestone(milestone) => writeln!(out, "{milestone}"),
        SimulationEvent::Won { .. } => writeln!(out, "{MSG_WON}"),
        SimulationEvent::LifespanExceeded { .. } => writeln!(out, "{MSG_LIFESPAN_EXCEEDED}"),
    }
}
