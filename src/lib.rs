pub mod action;
pub mod ec2;
pub mod error;
pub mod maestro;

pub use action::InstanceAction;
pub use error::MaestroError;
pub use maestro::Maestro;
