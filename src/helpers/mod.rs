//! Helper functions shared by the template and generator layers

mod html;
mod url;

pub use html::*;
pub use url::*;
