//! 路由表
//!
//! 封闭的路由集合：首页、三种角色的登录页、患者/医生注册页、
//! 三种角色的仪表盘。管理员没有注册页。

use portal_core::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 门户的全部路由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Home,
    Login(Role),
    Signup(Role),
    Dashboard(Role),
}

impl Route {
    /// 解析路径；不在路由表里的路径返回 None
    pub fn parse(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Home),
            "/admin/login" => Some(Route::Login(Role::Admin)),
            "/doctor/login" => Some(Route::Login(Role::Doctor)),
            "/patient/login" => Some(Route::Login(Role::Patient)),
            "/doctor/signup" => Some(Route::Signup(Role::Doctor)),
            "/patient/signup" => Some(Route::Signup(Role::Patient)),
            "/admin-dashboard" => Some(Route::Dashboard(Role::Admin)),
            "/doctor-dashboard" => Some(Route::Dashboard(Role::Doctor)),
            "/patient-dashboard" => Some(Route::Dashboard(Role::Patient)),
            _ => None,
        }
    }

    /// 路由对应的路径字符串
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login(role) => format!("/{role}/login"),
            Route::Signup(role) => format!("/{role}/signup"),
            Route::Dashboard(role) => format!("/{role}-dashboard"),
        }
    }

    /// 路由绑定的角色（首页无角色）
    pub fn role(&self) -> Option<Role> {
        match self {
            Route::Home => None,
            Route::Login(role) | Route::Signup(role) | Route::Dashboard(role) => Some(*role),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_path_round_trip() {
        let routes = [
            Route::Home,
            Route::Login(Role::Admin),
            Route::Login(Role::Doctor),
            Route::Login(Role::Patient),
            Route::Signup(Role::Doctor),
            Route::Signup(Role::Patient),
            Route::Dashboard(Role::Admin),
            Route::Dashboard(Role::Doctor),
            Route::Dashboard(Role::Patient),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_admin_has_no_signup() {
        assert_eq!(Route::parse("/admin/signup"), None);
    }

    #[test]
    fn test_unknown_paths_do_not_parse() {
        for path in ["", "/unknown", "/patient", "/patient/login/", "/PATIENT/login"] {
            assert_eq!(Route::parse(path), None, "{path}");
        }
    }
}
