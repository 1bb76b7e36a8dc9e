pub mod helpers;
pub mod roster;
