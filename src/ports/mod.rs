//! Ports (trait boundaries) between the battle core and its drivers.
//!
//! Strategies plug into the battle runner through [`Playstyle`]; anything
//! that wants to watch a battle unfold implements [`Observer`].

pub mod observer;
pub mod playstyle;

pub use observer::Observer;
pub use playstyle::Playstyle;
