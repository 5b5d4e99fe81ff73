mod pointer;
mod wheel;

pub use pointer::{wire_hover_flag, wire_pointer_move};
pub use wheel::{wire_wheel, WheelWiring};
