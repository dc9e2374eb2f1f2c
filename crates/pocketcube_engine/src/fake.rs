use pocketcube_core::{
    CubeEngine, EngineError, EngineResult, FRAME_BYTE_COUNT, FRAME_WIDTH, TurnId,
};

/// Deterministic in-process cube engine.
///
/// The fake tracks exactly what the view layer can observe through the engine
/// boundary: an initialization flag, the turn history, the last rotation, and
/// the buffers behind the query entry points. It performs no cube logic;
/// "solving" returns the turn history undone in reverse order, which is
/// always a correct solution even if rarely an optimal one.
///
/// Test knobs allow scripting each buffer, including deliberately malformed
/// contents for exercising the error paths.
#[derive(Debug)]
pub struct FakeEngine {
    initialized: bool,
    init_count: usize,
    turns: Vec<TurnId>,
    colors: Vec<u8>,
    queued_solution: Option<(Vec<u8>, usize)>,
    solution: Vec<u8>,
    pitch: f64,
    yaw: f64,
    frame: Vec<u8>,
    draw_count: usize,
}

impl FakeEngine {
    /// Constructs an uninitialized fake engine with a solved-pattern color
    /// snapshot: four stickers of color `f` on each face `f`.
    pub fn new() -> Self {
        Self {
            initialized: false,
            init_count: 0,
            turns: vec![],
            colors: (0..6).flat_map(|f| [f; 4]).collect(),
            queued_solution: None,
            solution: vec![],
            pitch: 0.0,
            yaw: 0.0,
            frame: vec![0; FRAME_BYTE_COUNT],
            draw_count: 0,
        }
    }

    /// Replaces the color snapshot served by `cubie_colors`. Any length is
    /// accepted so tests can provoke size mismatches.
    pub fn set_cubie_colors(&mut self, colors: impl Into<Vec<u8>>) {
        self.colors = colors.into();
    }

    /// Queues a solution for the next `solve_cube` call instead of deriving
    /// one from the turn history.
    pub fn queue_solution(&mut self, turns: &[TurnId]) {
        let bytes: Vec<u8> = turns.iter().map(|&t| t as u8).collect();
        let count = bytes.len();
        self.queued_solution = Some((bytes, count));
    }

    /// Queues raw solve-buffer bytes and a separately chosen reported move
    /// count for the next `solve_cube` call. The two need not agree.
    pub fn queue_raw_solution(&mut self, bytes: Vec<u8>, reported_count: usize) {
        self.queued_solution = Some((bytes, reported_count));
    }

    /// Resizes the frame buffer so `image_data_buffer` reports the wrong
    /// length.
    pub fn set_frame_buffer_len(&mut self, len: usize) {
        self.frame = vec![0; len];
    }

    /// Returns every turn executed so far, oldest first.
    pub fn turn_history(&self) -> &[TurnId] {
        &self.turns
    }

    /// Returns how many times `init` has been called.
    pub fn init_count(&self) -> usize {
        self.init_count
    }

    /// Returns how many times `draw` has been called.
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    /// Returns the most recent rotation, as `(pitch, yaw)`.
    pub fn rotation(&self) -> (f64, f64) {
        (self.pitch, self.yaw)
    }

    fn check_init(&self) -> EngineResult {
        if self.initialized {
            Ok(())
        } else {
            Err(EngineError::EngineUnavailable)
        }
    }
}

impl Default for FakeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeEngine for FakeEngine {
    fn init(&mut self) -> EngineResult {
        self.initialized = true;
        self.init_count += 1;
        log::trace!("fake engine initialized");
        Ok(())
    }

    fn execute_turn(&mut self, turn: TurnId) -> EngineResult {
        self.check_init()?;
        self.turns.push(turn);
        log::trace!("fake engine executed {turn}");
        Ok(())
    }

    fn solve_cube(&mut self) -> EngineResult<usize> {
        self.check_init()?;
        let (bytes, count) = match self.queued_solution.take() {
            Some(queued) => queued,
            None => {
                let bytes: Vec<u8> =
                    self.turns.iter().rev().map(|t| t.inverse() as u8).collect();
                let count = bytes.len();
                (bytes, count)
            }
        };
        self.solution = bytes;
        log::debug!("fake solve reported {count} moves");
        Ok(count)
    }

    fn solve_buffer(&self) -> EngineResult<&[u8]> {
        self.check_init()?;
        Ok(&self.solution)
    }

    fn cubie_colors(&self) -> EngineResult<&[u8]> {
        self.check_init()?;
        Ok(&self.colors)
    }

    fn set_rotation(&mut self, pitch: f64, yaw: f64) -> EngineResult {
        self.check_init()?;
        self.pitch = pitch;
        self.yaw = yaw;
        Ok(())
    }

    fn draw(&mut self) -> EngineResult {
        self.check_init()?;
        self.draw_count += 1;
        // Cheap stand-in for the rasterizer: a flat fill that varies with the
        // rotation and the move count, so a redraw is observable.
        let shade = ((self.pitch + self.yaw) * 100.0).rem_euclid(256.0) as u8;
        let moves = (self.turns.len() % 256) as u8;
        for (i, px) in self.frame.chunks_exact_mut(4).enumerate() {
            let row = (i / FRAME_WIDTH as usize) as u8;
            px.copy_from_slice(&[shade, moves, row, 0xff]);
        }
        Ok(())
    }

    fn image_data_buffer(&self) -> EngineResult<&[u8]> {
        self.check_init()?;
        Ok(&self.frame)
    }
}

#[cfg(test)]
mod tests {
    use pocketcube_core::CUBIE_COLOR_COUNT;

    use super::*;

    #[test]
    fn test_entry_points_require_init() {
        let mut engine = FakeEngine::new();
        assert_eq!(
            Err(EngineError::EngineUnavailable),
            engine.execute_turn(TurnId::U),
        );
        assert_eq!(Err(EngineError::EngineUnavailable), engine.solve_cube());
        assert_eq!(
            Err(EngineError::EngineUnavailable),
            engine.cubie_colors().map(<[u8]>::to_vec),
        );
        assert_eq!(
            Err(EngineError::EngineUnavailable),
            engine.set_rotation(0.0, 0.0),
        );
        assert_eq!(Err(EngineError::EngineUnavailable), engine.draw());

        engine.init().unwrap();
        assert_eq!(Ok(()), engine.execute_turn(TurnId::U));
    }

    #[test]
    fn test_fresh_engine_is_solved() {
        let mut engine = FakeEngine::new();
        engine.init().unwrap();
        assert_eq!(Ok(0), engine.solve_cube());
        assert_eq!(Ok(&[][..]), engine.solve_buffer());
    }

    #[test]
    fn test_solve_undoes_history_in_reverse() {
        let mut engine = FakeEngine::new();
        engine.init().unwrap();
        for turn in [TurnId::U, TurnId::R, TurnId::FPrime] {
            engine.execute_turn(turn).unwrap();
        }
        assert_eq!(Ok(3), engine.solve_cube());
        // [U, R, F'] reversed and inverted is [F, R', U'].
        let expected = [TurnId::F as u8, TurnId::RPrime as u8, TurnId::UPrime as u8];
        assert_eq!(Ok(&expected[..]), engine.solve_buffer());
    }

    #[test]
    fn test_queued_solution_is_consumed_once() {
        let mut engine = FakeEngine::new();
        engine.init().unwrap();
        engine.execute_turn(TurnId::D).unwrap();
        engine.queue_solution(&[TurnId::U, TurnId::RPrime, TurnId::F]);
        assert_eq!(Ok(3), engine.solve_cube());
        assert_eq!(Ok(&[0_u8, 9, 2][..]), engine.solve_buffer());
        // The next solve falls back to the history again.
        assert_eq!(Ok(1), engine.solve_cube());
        assert_eq!(Ok(&[TurnId::DPrime as u8][..]), engine.solve_buffer());
    }

    #[test]
    fn test_default_color_snapshot_shape() {
        let mut engine = FakeEngine::new();
        engine.init().unwrap();
        let colors = engine.cubie_colors().unwrap();
        assert_eq!(CUBIE_COLOR_COUNT, colors.len());
        for (i, &byte) in colors.iter().enumerate() {
            assert_eq!((i / 4) as u8, byte);
        }
    }

    #[test]
    fn test_draw_overwrites_whole_frame() {
        let mut engine = FakeEngine::new();
        engine.init().unwrap();
        engine.set_rotation(0.5, 1.0).unwrap();
        engine.draw().unwrap();
        let frame_a = engine.image_data_buffer().unwrap().to_vec();
        assert_eq!(FRAME_BYTE_COUNT, frame_a.len());

        engine.set_rotation(2.5, 1.0).unwrap();
        engine.draw().unwrap();
        let frame_b = engine.image_data_buffer().unwrap().to_vec();
        assert_eq!(FRAME_BYTE_COUNT, frame_b.len());
        assert_ne!(frame_a, frame_b);
        assert_eq!(2, engine.draw_count());
    }
}
