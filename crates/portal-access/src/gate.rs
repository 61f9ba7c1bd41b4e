//! 授权门
//!
//! 每次导航先过这里：根据会话状态决定渲染还是重定向。
//! 仪表盘角色不匹配时重定向到该仪表盘的登录页，而不是
//! 当前用户自己的仪表盘（沿用既有行为）。

use crate::routes::Route;
use portal_state::AuthState;

/// 授权门的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
}

/// 判定一次导航
pub fn resolve(auth: &AuthState, path: &str) -> RouteDecision {
    let Some(route) = Route::parse(path) else {
        tracing::debug!("Unknown path {}, redirecting home", path);
        return RouteDecision::Redirect(Route::Home);
    };

    let session_role = auth.is_authenticated.then_some(auth.role).flatten();

    match route {
        Route::Home => match session_role {
            Some(role) => RouteDecision::Redirect(Route::Dashboard(role)),
            None => RouteDecision::Render(route),
        },
        Route::Login(role) | Route::Signup(role) => {
            if session_role == Some(role) {
                RouteDecision::Redirect(Route::Dashboard(role))
            } else {
                RouteDecision::Render(route)
            }
        }
        Route::Dashboard(role) => {
            if session_role == Some(role) {
                RouteDecision::Render(route)
            } else {
                tracing::debug!("Unauthorized access to {}, redirecting to login", path);
                RouteDecision::Redirect(Route::Login(role))
            }
        }
    }
}
