//! Publishing collaborators for gazette.
//!
//! [`BloggerClient`] publishes posts through the Blogger v3 REST API;
//! [`ImgbbHost`] uploads generated images to imgbb so posts can embed a
//! hosted URL. Both are thin reqwest clients behind the interface traits.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blogger;
mod imgbb;

pub use blogger::BloggerClient;
pub use imgbb::ImgbbHost;
