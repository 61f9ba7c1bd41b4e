//! # Portal Access
//!
//! 访问控制层：路由表、会话授权门与凭据导出边界。
//! 路由解析与授权判定是纯函数，便于穷举测试。

pub mod clipboard;
pub mod gate;
pub mod routes;

pub use clipboard::{export_credentials, CredentialSink, StdoutSink};
pub use gate::{resolve, RouteDecision};
pub use routes::Route;
