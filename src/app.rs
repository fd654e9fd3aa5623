use crate::clock::FrameClock;
use crate::config::Config;
use crate::game::Game;
use crate::input::TerminalEvents;
use crate::render::TerminalSink;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Wires the game up to the terminal
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    tile_width: u16,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(config: &Config, rng: R) -> App<R> {
        App {
            game: Game::new(&config.game, rng),
            tile_width: config.tile_width,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: Terminal<B>) -> io::Result<()> {
        let mut sink = TerminalSink::new(terminal, self.game.board(), self.tile_width);
        self.game
            .run(&mut TerminalEvents, &mut sink, &mut FrameClock::new())
    }
}
