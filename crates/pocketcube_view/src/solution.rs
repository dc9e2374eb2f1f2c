use pocketcube_core::{CubeEngine, EngineError, EngineResult, TurnId, notation};

/// Text shown while the solve display is disabled. The surrounding spaces are
/// part of the string.
pub const SOLVE_DISABLED_TEXT: &str = " (Check \"Solve\" To Find Solution) ";
/// Text shown when solving is enabled and the cube is already solved.
pub const SOLVED_TEXT: &str = "(Solved)";

/// Solution text region shown beside the cube.
///
/// While the solve toggle is off, the text is a fixed placeholder. While it
/// is on, every refresh runs the engine's solver synchronously and formats
/// the resulting move sequence; a solved cube shows [`SOLVED_TEXT`] instead
/// of an empty list. The move sequence itself is never retained.
#[derive(Debug)]
pub struct SolutionDisplay {
    enabled: bool,
    text: String,
}

impl SolutionDisplay {
    /// Constructs a display with solving disabled and no text.
    pub fn new() -> Self {
        Self {
            enabled: false,
            text: String::new(),
        }
    }

    /// Returns the current display text.
    pub fn text(&self) -> &str {
        &self.text
    }
    /// Returns whether solving is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
    /// Enables or disables solving. Takes effect at the next refresh.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Recomputes the display text, solving the cube if solving is enabled.
    pub fn refresh(&mut self, engine: &mut dyn CubeEngine) -> EngineResult {
        if !self.enabled {
            self.text = SOLVE_DISABLED_TEXT.to_owned();
            return Ok(());
        }
        let count = engine.solve_cube()?;
        let turns = decode_solution(count, engine.solve_buffer()?)?;
        log::debug!("solver returned {count} moves");
        self.text = if turns.is_empty() {
            SOLVED_TEXT.to_owned()
        } else {
            notation::format_move_list(turns)
        };
        Ok(())
    }

    /// Replaces the display text with a visible error marker.
    pub fn show_error(&mut self, error: &EngineError) {
        self.text = format!("(Engine Error: {error})");
    }
}

impl Default for SolutionDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes the solve buffer into turns, validating its length against the
/// move count the solver reported.
fn decode_solution(count: usize, buffer: &[u8]) -> Result<Vec<TurnId>, EngineError> {
    if buffer.len() != count {
        return Err(EngineError::BufferSizeMismatch {
            expected: count,
            actual: buffer.len(),
        });
    }
    buffer
        .iter()
        .map(|&byte| TurnId::from_repr(byte).ok_or(EngineError::InvalidTurnId(byte)))
        .collect()
}

#[cfg(test)]
mod tests {
    use pocketcube_engine::FakeEngine;
    use pretty_assertions::assert_eq;

    use super::*;

    fn ready_engine() -> FakeEngine {
        let mut engine = FakeEngine::new();
        engine.init().unwrap();
        engine
    }

    #[test]
    fn test_disabled_shows_placeholder_without_solving() {
        let mut engine = ready_engine();
        // A queued malformed solution would fail any solve; a disabled
        // refresh must never get that far.
        engine.queue_raw_solution(vec![255], 1);

        let mut display = SolutionDisplay::new();
        assert_eq!("", display.text());
        display.refresh(&mut engine).unwrap();
        assert_eq!(" (Check \"Solve\" To Find Solution) ", display.text());

        display.set_enabled(true);
        assert_eq!(
            Err(EngineError::InvalidTurnId(255)),
            display.refresh(&mut engine),
        );
    }

    #[test]
    fn test_solved_cube_text() {
        let mut engine = ready_engine();
        let mut display = SolutionDisplay::new();
        display.set_enabled(true);
        display.refresh(&mut engine).unwrap();
        assert_eq!("(Solved)", display.text());
    }

    #[test]
    fn test_move_sequence_text() {
        let mut engine = ready_engine();
        engine.queue_solution(&[TurnId::U, TurnId::RPrime, TurnId::F]);
        let mut display = SolutionDisplay::new();
        display.set_enabled(true);
        display.refresh(&mut engine).unwrap();
        assert_eq!("U, R', F", display.text());
    }

    #[test]
    fn test_buffer_length_must_match_count() {
        let mut engine = ready_engine();
        engine.queue_raw_solution(vec![0, 1], 3);
        let mut display = SolutionDisplay::new();
        display.set_enabled(true);
        assert_eq!(
            Err(EngineError::BufferSizeMismatch {
                expected: 3,
                actual: 2,
            }),
            display.refresh(&mut engine),
        );
    }

    #[test]
    fn test_error_marker_text() {
        let mut display = SolutionDisplay::new();
        display.show_error(&EngineError::InvalidTurnId(12));
        assert_eq!("(Engine Error: invalid turn ID 12)", display.text());
    }
}
