//! # Portal State
//!
//! 门户系统的状态容器，包括：
//! - 四个独立切片（会话、医生、患者、预约），各自持有自己的集合
//! - 封闭的动作和枚举与穷尽匹配的归约函数
//! - 种子数据（进程重启后状态重置）
//! - 状态持久化边界（load/save 接口）

pub mod appointments;
pub mod auth;
pub mod doctors;
pub mod patients;
pub mod seed;
pub mod storage;
pub mod store;

pub use appointments::{AppointmentAction, AppointmentState};
pub use auth::{AuthAction, AuthState};
pub use doctors::{DoctorAction, DoctorState};
pub use patients::{PatientAction, PatientState};
pub use storage::{EphemeralStore, JsonFileStore, StateStore};
pub use store::{Action, AppState};
