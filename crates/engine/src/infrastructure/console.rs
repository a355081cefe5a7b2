//! Console narrator.
//!
//! Writes each narration as one line, optionally wrapped in ANSI colour codes.
//! Colour is decoration only; the text between the codes is always the plain
//! narration.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use skirmish_domain::{CombatEvent, SpecialAction};

use crate::infrastructure::ports::{Narration, NarratorPort};

const RESET: &str = "\x1b[0m";
const BLUE: &str = "\x1b[34m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// Narrator writing to any `Write` sink (stdout in the binary).
pub struct ConsoleNarrator<W: Write + Send> {
    out: Mutex<W>,
    color: bool,
}

impl ConsoleNarrator<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write + Send> ConsoleNarrator<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            color,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

fn color_for(line: &Narration) -> Option<&'static str> {
    match line {
        Narration::Event(CombatEvent::Attacked { .. }) => Some(BLUE),
        Narration::Event(CombatEvent::SpecialAction { action, .. }) => Some(match action {
            SpecialAction::SwordStrike => YELLOW,
            SpecialAction::Backstab => GREEN,
            SpecialAction::PhaseThroughWalls => CYAN,
        }),
        _ => None,
    }
}

impl<W: Write + Send> NarratorPort for ConsoleNarrator<W> {
    fn narrate(&self, line: &Narration) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let result = match color_for(line).filter(|_| self.color) {
            Some(color) => writeln!(out, "{color}{line}{RESET}"),
            None => writeln!(out, "{line}"),
        };
        if let Err(e) = result.and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "Failed to write narration");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::Section;
    use skirmish_domain::CharacterName;

    fn name(s: &str) -> CharacterName {
        CharacterName::new(s).expect("valid name")
    }

    fn render(color: bool, lines: &[Narration]) -> String {
        let narrator = ConsoleNarrator::new(Vec::new(), color);
        for line in lines {
            narrator.narrate(line);
        }
        String::from_utf8(narrator.into_inner()).expect("utf-8")
    }

    #[test]
    fn plain_output_is_one_line_per_narration() {
        let output = render(
            false,
            &[
                Narration::PlayerGold(0),
                CombatEvent::Attacked {
                    attacker: name("Grunt"),
                    target: name("Hero"),
                }
                .into(),
                Narration::Section(Section::SpecialActions),
            ],
        );

        assert_eq!(
            output,
            "Player Gold: 0\nGrunt attacks Hero\n\n=== Special Actions ===\n"
        );
    }

    #[test]
    fn colour_wraps_attacks_and_special_actions_only() {
        let output = render(
            true,
            &[
                CombatEvent::Attacked {
                    attacker: name("Hero"),
                    target: name("Grunt"),
                }
                .into(),
                CombatEvent::SpecialAction {
                    name: name("Grunt"),
                    action: SpecialAction::Backstab,
                }
                .into(),
                CombatEvent::Moved { name: name("Hero") }.into(),
            ],
        );

        assert_eq!(
            output,
            "\x1b[34mHero attacks Grunt\x1b[0m\n\
             \x1b[32mGrunt performs a sneaky backstab!\x1b[0m\n\
             Hero moves.\n"
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_do_not_panic() {
        let narrator = ConsoleNarrator::new(BrokenPipe, false);
        narrator.narrate(&Narration::InitFailed);
    }
}
