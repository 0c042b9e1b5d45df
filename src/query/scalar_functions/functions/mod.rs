pub mod text_impl;
pub use text_impl::*;

pub mod time_impl;
pub use time_impl::*;

pub mod math_impl;
pub use math_impl::*;
