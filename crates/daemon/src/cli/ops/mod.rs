pub mod health;
pub mod ls;
pub mod serve;
pub mod version;

pub use health::Health;
pub use ls::Ls;
pub use serve::Serve;
pub use version::Version;
