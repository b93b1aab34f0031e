pub mod print_plan;
pub mod propagate;

pub use print_plan::{format_plan, print_plan};
pub use propagate::propagate;
