pub mod cli;
pub mod commands;
pub mod composer;
pub mod halo;
pub mod mask;
