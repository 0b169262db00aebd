//! Button debounce, lamp outputs, and hardware initialisation.

pub mod button;
pub mod hw_init;
pub mod lamp;
