// src/nav/mod.rs
pub mod approach;
pub mod fleet;
pub mod heading;
pub mod position;
pub mod search;
pub mod validator;

pub use approach::{approach, FlightPath, Move};
pub use fleet::{step_fleet, StepRequest};
pub use heading::{valid_angle, Heading};
pub use position::Position;
pub use search::{move_towards, HeadingSearch};
pub use validator::{check_move, is_valid_move, MoveCheck};
