//! # Portal Workflow
//!
//! 门户系统的业务流程与派生视图，包括：
//! - 会话服务：凭据核验、登录/注册流程
//! - 预约排程：可约时段计算与挂号
//! - 用药依从：每日服药行展开与漏服统计
//! - 审批流程：医生申请的批准与驳回
//! - 延迟边界：可注入的模拟网络延迟

pub mod adherence;
pub mod approval;
pub mod latency;
pub mod scheduling;
pub mod session;
pub mod views;

pub use adherence::{dose_rows, mark_dose, missed_count, taken_count, DoseRow};
pub use approval::{ApprovalService, IssuedCredentials};
pub use latency::{FixedLatency, LatencySimulator, NoLatency};
pub use scheduling::{available_slots, book_appointment};
pub use session::{SessionManager, SignupDoctorForm, SignupPatientForm};
pub use views::{
    admin_overview, cancel_appointment, complete_appointment, doctor_completed_appointments,
    doctor_todays_appointments, doctor_upcoming_appointments, lookup_patient,
    patient_past_appointments, patient_upcoming_appointments, select_patient, write_prescription,
    AdminOverview,
};
