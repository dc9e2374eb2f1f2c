use image::RgbaImage;
use pocketcube_core::{CubeEngine, EngineError, EngineResult, OrientationId, TurnId};
use rand::Rng;

use crate::frame::FrameCompositor;
use crate::mesh::FaceletMesh;
use crate::prefs::ViewPreferences;
use crate::rotation::{DragController, RotationState};
use crate::solution::SolutionDisplay;

/// Owner of all interaction and presentation state for one cube view.
///
/// The controller holds the engine exclusively and funnels every pointer
/// event, discrete action, and tick through it one at a time. Hosts that run
/// a tick thread share the controller as an
/// `Arc<parking_lot::Mutex<ViewController>>` (see
/// [`TickDriver`](crate::TickDriver)); from the engine's point of view the
/// calls are still strictly sequential.
///
/// Engine errors are fatal: the first one is latched, the frame blanks, the
/// solution text region shows the error, and every later engine-touching
/// operation returns the latched error without reaching the engine.
#[derive(Debug)]
pub struct ViewController {
    engine: Box<dyn CubeEngine>,
    drag: DragController,
    mesh: FaceletMesh,
    solution: SolutionDisplay,
    frame: FrameCompositor,
    prefs: ViewPreferences,
    fatal: Option<EngineError>,
}

impl ViewController {
    /// Constructs a controller over `engine`, initializing it and filling
    /// the mesh from its current state.
    ///
    /// If startup fails, the controller is returned in its error state
    /// rather than dropped, so the failure stays visible.
    pub fn new(engine: Box<dyn CubeEngine>, prefs: ViewPreferences) -> Self {
        let mut this = Self {
            engine,
            drag: DragController::new(prefs.baseline(), prefs.drag_sensitivity),
            mesh: FaceletMesh::new(),
            solution: SolutionDisplay::new(),
            frame: FrameCompositor::new(),
            prefs,
            fatal: None,
        };
        let startup = this.startup();
        let _ = this.latch(startup);
        this
    }

    fn startup(&mut self) -> EngineResult {
        self.engine.init()?;
        self.refresh_mesh()
    }

    /// Returns the latched fatal error, if the controller has failed.
    pub fn error(&self) -> Option<&EngineError> {
        self.fatal.as_ref()
    }

    /// Returns the unfolded mesh.
    pub fn mesh(&self) -> &FaceletMesh {
        &self.mesh
    }
    /// Returns the current solution text.
    pub fn solution_text(&self) -> &str {
        self.solution.text()
    }
    /// Returns whether the solve display is enabled.
    pub fn is_solve_enabled(&self) -> bool {
        self.solution.is_enabled()
    }
    /// Returns the latest composited frame.
    pub fn frame(&self) -> &RgbaImage {
        self.frame.image()
    }
    /// Returns the current viewpoint rotation.
    pub fn rotation(&self) -> RotationState {
        self.drag.rotation()
    }
    /// Returns the active preferences.
    pub fn prefs(&self) -> &ViewPreferences {
        &self.prefs
    }

    /// Forwards a pointer press over the canvas to the drag controller.
    pub fn on_press(&mut self) {
        self.drag.on_press();
    }
    /// Forwards a pointer release to the drag controller.
    pub fn on_release(&mut self) {
        self.drag.on_release();
    }
    /// Forwards pointer movement in pixels to the drag controller.
    pub fn on_move(&mut self, dx: f64, dy: f64) {
        self.drag.on_move(dx, dy);
    }
    /// Resets the viewpoint to the baseline rotation.
    pub fn on_reset(&mut self) {
        self.drag.on_reset();
    }

    /// Executes one face turn, then refreshes the mesh and the solution
    /// text.
    pub fn turn(&mut self, turn: TurnId) -> EngineResult {
        self.check_usable()?;
        let result = self.turn_inner(turn);
        self.latch(result)
    }

    /// Reorients the whole cube: two face turns, each with its own full
    /// refresh.
    pub fn orient(&mut self, orientation: OrientationId) -> EngineResult {
        self.check_usable()?;
        log::trace!("orient {orientation}");
        let [a, b] = orientation.turns();
        let mut result = self.turn_inner(a);
        if result.is_ok() {
            result = self.turn_inner(b);
        }
        self.latch(result)
    }

    /// Scrambles the cube with `scramble_moves` uniformly random turns,
    /// refreshing the display once at the end.
    pub fn scramble(&mut self) -> EngineResult {
        self.scramble_with_rng(&mut rand::rng())
    }

    /// Scrambles like [`ViewController::scramble()`], drawing moves from
    /// `rng`.
    pub fn scramble_with_rng(&mut self, rng: &mut impl Rng) -> EngineResult {
        self.check_usable()?;
        let n = self.prefs.scramble_moves;
        log::info!("scrambling with {n} random moves");
        let result = self.scramble_inner(rng, n);
        self.latch(result)
    }

    fn scramble_inner(&mut self, rng: &mut impl Rng, n: usize) -> EngineResult {
        if n == 0 {
            return Ok(());
        }
        // Only the last move goes through `turn_inner`, so the mesh and
        // solution refresh exactly once per scramble.
        for _ in 0..n - 1 {
            self.engine.execute_turn(random_turn(rng))?;
        }
        self.turn_inner(random_turn(rng))
    }

    /// Enables or disables the solution display, refreshing its text
    /// immediately.
    pub fn set_solve_enabled(&mut self, enabled: bool) -> EngineResult {
        self.check_usable()?;
        self.solution.set_enabled(enabled);
        let result = self.solution.refresh(self.engine.as_mut());
        self.latch(result)
    }

    /// Runs one tick of the redraw loop: pushes the current rotation to the
    /// engine, renders, and composites the new frame.
    pub fn tick(&mut self) -> EngineResult {
        self.check_usable()?;
        let result = self.tick_inner();
        self.latch(result)
    }

    fn tick_inner(&mut self) -> EngineResult {
        let rotation = self.drag.rotation();
        self.engine.set_rotation(rotation.pitch(), rotation.yaw())?;
        self.engine.draw()?;
        let bytes = self.engine.image_data_buffer()?;
        self.frame.compose(bytes)
    }

    fn turn_inner(&mut self, turn: TurnId) -> EngineResult {
        log::trace!("turn {turn}");
        self.engine.execute_turn(turn)?;
        self.refresh()
    }

    /// Refreshes the mesh and the solution text from the engine.
    fn refresh(&mut self) -> EngineResult {
        self.refresh_mesh()?;
        self.solution.refresh(self.engine.as_mut())
    }

    fn refresh_mesh(&mut self) -> EngineResult {
        let colors = self.engine.cubie_colors()?;
        self.mesh.refresh(colors)
    }

    fn check_usable(&self) -> EngineResult {
        match &self.fatal {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    /// Passes `result` through, latching any error: the frame blanks, the
    /// solution text shows the error, and the controller stops accepting
    /// operations.
    fn latch<T>(&mut self, result: EngineResult<T>) -> EngineResult<T> {
        if let Err(error) = &result {
            log::error!("cube engine failed: {error}");
            self.frame.clear();
            self.solution.show_error(error);
            self.fatal = Some(error.clone());
        }
        result
    }
}

/// Returns a uniformly random turn.
fn random_turn(rng: &mut impl Rng) -> TurnId {
    let byte = rng.random_range(0..12_u8);
    TurnId::from_repr(byte).expect("turn byte in catalog range")
}
