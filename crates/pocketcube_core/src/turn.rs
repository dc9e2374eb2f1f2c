use strum::{Display, FromRepr, VariantArray};

/// Face turn accepted by the engine, in engine byte order.
///
/// The first six variants are clockwise quarter turns; the last six are their
/// counterclockwise inverses. Each variant's discriminant is exactly the byte
/// the engine uses for that turn, so raw engine bytes convert via
/// [`TurnId::from_repr()`].
#[derive(Debug, Display, FromRepr, VariantArray, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TurnId {
    /// Clockwise turn of the up face.
    U = 0,
    /// Clockwise turn of the left face.
    L = 1,
    /// Clockwise turn of the front face.
    F = 2,
    /// Clockwise turn of the right face.
    R = 3,
    /// Clockwise turn of the back face.
    B = 4,
    /// Clockwise turn of the down face.
    D = 5,
    /// Counterclockwise turn of the up face.
    #[strum(serialize = "U'")]
    UPrime = 6,
    /// Counterclockwise turn of the left face.
    #[strum(serialize = "L'")]
    LPrime = 7,
    /// Counterclockwise turn of the front face.
    #[strum(serialize = "F'")]
    FPrime = 8,
    /// Counterclockwise turn of the right face.
    #[strum(serialize = "R'")]
    RPrime = 9,
    /// Counterclockwise turn of the back face.
    #[strum(serialize = "B'")]
    BPrime = 10,
    /// Counterclockwise turn of the down face.
    #[strum(serialize = "D'")]
    DPrime = 11,
}
impl TurnId {
    /// Returns the turn that undoes this one.
    ///
    /// Inverse pairs sit 6 apart in the byte catalog: `U` (0) pairs with `U'`
    /// (6), and so on.
    pub fn inverse(self) -> TurnId {
        match self {
            TurnId::U => TurnId::UPrime,
            TurnId::L => TurnId::LPrime,
            TurnId::F => TurnId::FPrime,
            TurnId::R => TurnId::RPrime,
            TurnId::B => TurnId::BPrime,
            TurnId::D => TurnId::DPrime,
            TurnId::UPrime => TurnId::U,
            TurnId::LPrime => TurnId::L,
            TurnId::FPrime => TurnId::F,
            TurnId::RPrime => TurnId::R,
            TurnId::BPrime => TurnId::B,
            TurnId::DPrime => TurnId::D,
        }
    }
}

/// Whole-cube reorientation, performed as an ordered pair of face turns.
///
/// Turning opposite faces in opposite directions rotates the whole cube
/// without changing which stickers are adjacent.
#[derive(Debug, Display, VariantArray, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OrientationId {
    /// Rotate the cube leftward about the vertical axis.
    Left,
    /// Rotate the cube rightward about the vertical axis.
    Right,
    /// Rotate the cube upward about the horizontal axis.
    Up,
    /// Rotate the cube downward about the horizontal axis.
    Down,
}
impl OrientationId {
    /// Returns the turn pair that performs this reorientation, in execution
    /// order.
    pub fn turns(self) -> [TurnId; 2] {
        match self {
            OrientationId::Left => [TurnId::U, TurnId::DPrime],
            OrientationId::Right => [TurnId::UPrime, TurnId::D],
            OrientationId::Up => [TurnId::R, TurnId::LPrime],
            OrientationId::Down => [TurnId::RPrime, TurnId::L],
        }
    }
}

/// Cube face, in engine order.
///
/// The engine's color snapshot is face-major in this order, four stickers per
/// face.
#[derive(Debug, Display, FromRepr, VariantArray, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    /// Up face.
    U = 0,
    /// Left face.
    L = 1,
    /// Front face.
    F = 2,
    /// Right face.
    R = 3,
    /// Back face.
    B = 4,
    /// Down face.
    D = 5,
}
