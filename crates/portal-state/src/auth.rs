//! 会话切片
//!
//! 整个进程同一时刻只存在一个会话。凭据核验不在这里发生，
//! 由会话服务完成后再派发成功/失败动作。

use portal_core::{Role, SessionUser};
use serde::{Deserialize, Serialize};

/// 会话切片的状态转移动作
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AuthAction {
    /// 开始登录：置 loading，清空错误
    LoginStart,
    /// 登录成功：写入会话身份
    LoginSuccess { user: SessionUser, role: Role },
    /// 登录失败：记录单一的扁平错误信息
    LoginFailure(String),
    /// 退出登录
    Logout,
    /// 清除错误横幅
    ClearError,
}

/// 会话状态
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub role: Option<Role>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// 应用一个会话动作
    pub fn apply(&mut self, action: AuthAction) {
        match action {
            AuthAction::LoginStart => {
                self.loading = true;
                self.error = None;
            }
            AuthAction::LoginSuccess { user, role } => {
                tracing::info!("Session established for {} as {}", user.id, role);
                self.loading = false;
                self.is_authenticated = true;
                self.user = Some(user);
                self.role = Some(role);
                self.error = None;
            }
            AuthAction::LoginFailure(message) => {
                tracing::warn!("Login failed: {}", message);
                self.loading = false;
                self.error = Some(message);
                self.is_authenticated = false;
                self.user = None;
                self.role = None;
            }
            AuthAction::Logout => {
                if let Some(user) = &self.user {
                    tracing::info!("Session closed for {}", user.id);
                }
                self.user = None;
                self.role = None;
                self.is_authenticated = false;
                self.error = None;
            }
            AuthAction::ClearError => {
                self.error = None;
            }
        }
    }
}
