pub mod virtual_keys;
pub mod flags;
pub mod scancode;
pub mod keyboard_type;

pub use virtual_keys::*;
pub use flags::*;
pub use scancode::*;
pub use keyboard_type::*;
