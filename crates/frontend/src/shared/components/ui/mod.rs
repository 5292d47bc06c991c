pub mod button;
pub mod input;
pub mod radio;

pub use button::Button;
pub use input::Input;
pub use radio::RadioGroup;
