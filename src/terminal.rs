//! Line-oriented front end: one move or command per line on stdin.

use std::io::{self, BufRead, Write};

use board::{RenderTarget, RuleConfig};
use log::debug;

use crate::session::{GameSession, Outcome};

const HELP: &str = "Type a move as x1y1x2y2 (e.g. 4143) or as two squares (e.g. e2e4).
Commands: board, html, new, help, quit";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

pub struct Terminal {
    session: GameSession,
}

impl Terminal {
    pub fn new(config: RuleConfig) -> Self {
        Self {
            session: GameSession::new(config),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Stops on `quit`, when a king is taken, or at end of input
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        self.show_board(&mut out)?;
        writeln!(out, "{HELP}")?;
        self.prompt(&mut out)?;

        for line in input.lines() {
            let line = line?;
            if self.handle_line(line.trim(), &mut out)? == Flow::Stop {
                break;
            }
        }
        out.flush()
    }

    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        match line {
            "" => return Ok(Flow::Continue),
            "quit" | "exit" => return Ok(Flow::Stop),
            "help" => writeln!(out, "{HELP}")?,
            "board" => self.show_board(out)?,
            "html" => {
                if let Some(html) = self.session.board().render(RenderTarget::Html) {
                    writeln!(out, "{html}")?;
                }
            }
            "new" => {
                self.session.restart();
                self.show_board(out)?;
            }
            _ => match self.session.submit(line) {
                Ok(Outcome::Continue { .. }) => self.show_board(out)?,
                Ok(Outcome::Won(side)) => {
                    self.show_board(out)?;
                    writeln!(out, "{side} wins!")?;
                    return Ok(Flow::Stop);
                }
                Err(e) => {
                    debug!("`{line}` refused: {e:?}");
                    writeln!(out, "{e}")?;
                }
            },
        }
        self.prompt(out)?;
        Ok(Flow::Continue)
    }

    fn show_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(text) = self.session.board().render(RenderTarget::Console) {
            writeln!(out, "{text}")?;
        }
        Ok(())
    }

    fn prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{} to move", self.session.side_to_move())
    }
}
