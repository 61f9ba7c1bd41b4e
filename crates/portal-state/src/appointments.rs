//! 预约切片
//!
//! 追加预约时不做冲突检查，调用方必须先用可约时段视图过滤；
//! 同一 (医生, 日期, 时间) 至多一条非取消预约由预约流程保证。

use portal_core::{Appointment, AppointmentStatus};
use serde::{Deserialize, Serialize};

/// 预约切片的状态转移动作
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppointmentAction {
    /// 追加预约（无写入时冲突检查）
    Add(Appointment),
    /// 按ID更新状态，可选地覆盖备注；找不到则不做任何事
    UpdateStatus {
        id: String,
        status: AppointmentStatus,
        notes: Option<String>,
    },
    /// 取消预约（status=Cancelled 的快捷方式，不改备注）
    Cancel { id: String },
}

/// 预约切片状态
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentState {
    pub appointments: Vec<Appointment>,
}

impl AppointmentState {
    /// 应用一个预约切片动作
    pub fn apply(&mut self, action: AppointmentAction) {
        match action {
            AppointmentAction::Add(appointment) => {
                tracing::info!(
                    "Booked appointment {} for {} with {} at {} {}",
                    appointment.id,
                    appointment.patient_id,
                    appointment.doctor_id,
                    appointment.date,
                    appointment.time
                );
                self.appointments.push(appointment);
            }
            AppointmentAction::UpdateStatus { id, status, notes } => {
                if let Some(appointment) = self.appointments.iter_mut().find(|a| a.id == id) {
                    tracing::info!("Appointment {} status -> {:?}", id, status);
                    appointment.status = status;
                    if let Some(notes) = notes {
                        appointment.notes = notes;
                    }
                } else {
                    tracing::warn!("Status update for unknown appointment {}", id);
                }
            }
            AppointmentAction::Cancel { id } => {
                if let Some(appointment) = self.appointments.iter_mut().find(|a| a.id == id) {
                    tracing::info!("Appointment {} cancelled", id);
                    appointment.status = AppointmentStatus::Cancelled;
                }
            }
        }
    }

    /// 按ID查找预约
    pub fn find(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }
}
