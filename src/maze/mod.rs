//! Maze grid and generation.

pub mod generator;
