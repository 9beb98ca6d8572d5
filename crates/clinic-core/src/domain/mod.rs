//! 클리닉 운영을 위한 도메인 모델.

mod billing;
mod identity;
mod role;

pub use billing::*;
pub use identity::*;
pub use role::*;
