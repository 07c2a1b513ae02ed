//! Service code module - Decoding of the magnetic stripe service code.
//!
//! Contains the [`ServiceCode`] value object, the three position enums and
//! the [`ServiceCodeType`] trait they share.

mod authorization;
mod interchange;
mod pin_requirements;
#[allow(clippy::module_inception)]
mod service_code;
mod service_code_type;
mod summary;

pub use authorization::ServiceCode2;
pub use interchange::ServiceCode1;
pub use pin_requirements::ServiceCode3;
pub use service_code::ServiceCode;
pub use service_code_type::{DigitTable, ServiceCodeType};
pub use summary::{PositionSummary, ServiceCodeSummary};
