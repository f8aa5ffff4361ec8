pub mod get_ops;
pub mod projection;
pub mod set_ops;

pub use get_ops::{contains, get, get_as, get_mut, get_or};
pub use projection::{filter, filter_into, omit, omit_into, Projection};
pub use set_ops::{set, set_or_init};
