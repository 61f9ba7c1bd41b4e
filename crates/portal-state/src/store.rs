//! 状态容器
//!
//! 一个显式持有四个切片的应用状态结构，取代全局单例；
//! 每个动作恰好路由到拥有对应集合的那个切片。

use crate::{
    appointments::{AppointmentAction, AppointmentState},
    auth::{AuthAction, AuthState},
    doctors::{DoctorAction, DoctorState},
    patients::{PatientAction, PatientState},
    seed,
};
use serde::{Deserialize, Serialize};

/// 顶层动作，封闭和类型，穷尽路由
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Action {
    Auth(AuthAction),
    Doctors(DoctorAction),
    Patients(PatientAction),
    Appointments(AppointmentAction),
}

/// 应用状态：四个互不共享数据的切片
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub auth: AuthState,
    pub doctors: DoctorState,
    pub patients: PatientState,
    pub appointments: AppointmentState,
}

impl AppState {
    /// 空状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 带种子数据的初始状态（进程重启即回到这里）
    pub fn seeded() -> Self {
        seed::seeded_state()
    }

    /// 同步地将一个动作应用到拥有它的切片上
    ///
    /// 单线程事件驱动：每次派发运行到完成，期间没有其他事件插入。
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Auth(action) => self.auth.apply(action),
            Action::Doctors(action) => self.doctors.apply(action),
            Action::Patients(action) => self.patients.apply(action),
            Action::Appointments(action) => self.appointments.apply(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_routes_to_owning_slice() {
        let mut state = AppState::new();
        state.dispatch(Action::Auth(AuthAction::LoginStart));
        assert!(state.auth.loading);
        // 其余切片不受影响
        assert!(state.doctors.doctors.is_empty());
        assert!(state.appointments.appointments.is_empty());
    }

    #[test]
    fn test_seeded_state_collections() {
        let state = AppState::seeded();
        assert_eq!(state.doctors.doctors.len(), 3);
        assert_eq!(state.doctors.pending_requests.len(), 2);
        assert_eq!(state.patients.patients.len(), 3);
        assert_eq!(state.patients.prescriptions.len(), 4);
        assert!(!state.appointments.appointments.is_empty());
        assert!(!state.auth.is_authenticated);
    }
}
