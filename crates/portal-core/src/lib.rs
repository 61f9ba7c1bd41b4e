//! # Portal Core
//!
//! 医院门户系统的核心模块，提供基础数据结构、错误定义、表单校验和通用工具。

pub mod error;
pub mod models;
pub mod utils;
pub mod validators;

pub use error::{PortalError, Result};
pub use models::*;
