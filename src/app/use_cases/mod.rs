//! Use-Cases: fachliche Operationen auf dem AppState.

pub mod camera;
pub mod markers;
