//! SQL script fragments: guard/body pairs for the dynamic-statement templating engine.

mod composer;
mod fragment;
mod template;
pub use fragment::*;
pub use template::*;
