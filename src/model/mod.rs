mod hackathon;
mod nav;
mod notice;
mod profile;
mod route;

pub use hackathon::*;
pub use nav::*;
pub use notice::*;
pub use profile::*;
pub use route::*;
