//! 派生视图
//!
//! 各仪表盘从状态按日期和状态切出自己的预约列表；
//! 这里只读派生，不修改任何切片（完成/取消两个助手除外）。

use chrono::NaiveDate;
use portal_core::utils::generate_prescription_id;
use portal_core::{
    Appointment, AppointmentStatus, Medicine, Patient, PortalError, Prescription, Result,
};
use portal_state::{Action, AppState, AppointmentAction, PatientAction};
use serde::Serialize;

/// 管理端首页的汇总数字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminOverview {
    pub total_doctors: usize,
    pub total_patients: usize,
    pub pending_requests: usize,
    pub total_appointments: usize,
}

/// 管理端汇总
pub fn admin_overview(state: &AppState) -> AdminOverview {
    AdminOverview {
        total_doctors: state.doctors.doctors.len(),
        total_patients: state.patients.patients.len(),
        pending_requests: state.doctors.pending_requests.len(),
        total_appointments: state.appointments.appointments.len(),
    }
}

/// 患者端：未来预约（今天及以后、仍为已排状态）
pub fn patient_upcoming_appointments<'a>(
    state: &'a AppState,
    patient_id: &str,
    today: NaiveDate,
) -> Vec<&'a Appointment> {
    state
        .appointments
        .appointments
        .iter()
        .filter(|a| {
            a.patient_id == patient_id
                && a.date >= today
                && a.status == AppointmentStatus::Scheduled
        })
        .collect()
}

/// 患者端：历史预约（已完成或已取消）
pub fn patient_past_appointments<'a>(
    state: &'a AppState,
    patient_id: &str,
) -> Vec<&'a Appointment> {
    state
        .appointments
        .appointments
        .iter()
        .filter(|a| {
            a.patient_id == patient_id
                && matches!(
                    a.status,
                    AppointmentStatus::Completed | AppointmentStatus::Cancelled
                )
        })
        .collect()
}

/// 医生端：今天的已排预约
pub fn doctor_todays_appointments<'a>(
    state: &'a AppState,
    doctor_id: &str,
    today: NaiveDate,
) -> Vec<&'a Appointment> {
    state
        .appointments
        .appointments
        .iter()
        .filter(|a| {
            a.doctor_id == doctor_id && a.date == today && a.status == AppointmentStatus::Scheduled
        })
        .collect()
}

/// 医生端：今天之后的已排预约
pub fn doctor_upcoming_appointments<'a>(
    state: &'a AppState,
    doctor_id: &str,
    today: NaiveDate,
) -> Vec<&'a Appointment> {
    state
        .appointments
        .appointments
        .iter()
        .filter(|a| {
            a.doctor_id == doctor_id && a.date > today && a.status == AppointmentStatus::Scheduled
        })
        .collect()
}

/// 医生端：已完成的诊疗记录
pub fn doctor_completed_appointments<'a>(
    state: &'a AppState,
    doctor_id: &str,
) -> Vec<&'a Appointment> {
    state
        .appointments
        .appointments
        .iter()
        .filter(|a| a.doctor_id == doctor_id && a.status == AppointmentStatus::Completed)
        .collect()
}

/// 按患者ID查找档案；输入大写规范化后精确匹配
pub fn lookup_patient<'a>(state: &'a AppState, patient_id: &str) -> Option<&'a Patient> {
    let patient_id = patient_id.trim().to_uppercase();
    state.patients.patients.iter().find(|p| p.id == patient_id)
}

/// 管理端检索并选中患者；命中时记入 current_patient，未命中时清空
pub fn select_patient(state: &mut AppState, patient_id: &str) -> Option<Patient> {
    let found = lookup_patient(state, patient_id).cloned();
    state.dispatch(Action::Patients(PatientAction::SetCurrentPatient(
        found.as_ref().map(|p| p.id.clone()),
    )));
    found
}

/// 医生为某次预约开处方
pub fn write_prescription(
    state: &mut AppState,
    appointment_id: &str,
    medicines: Vec<Medicine>,
) -> Result<Prescription> {
    let appointment = state
        .appointments
        .find(appointment_id)
        .ok_or_else(|| PortalError::NotFound(format!("Appointment {appointment_id} not found")))?;

    let prescription = Prescription {
        id: generate_prescription_id(),
        patient_id: appointment.patient_id.clone(),
        doctor_id: appointment.doctor_id.clone(),
        doctor_name: appointment.doctor_name.clone(),
        appointment_id: appointment.id.clone(),
        date: appointment.date,
        medicines,
    };

    state.dispatch(Action::Patients(PatientAction::AddPrescription(
        prescription.clone(),
    )));
    Ok(prescription)
}

/// 医生完成诊疗并写诊疗备注
pub fn complete_appointment(state: &mut AppState, appointment_id: &str, notes: &str) {
    state.dispatch(Action::Appointments(AppointmentAction::UpdateStatus {
        id: appointment_id.to_string(),
        status: AppointmentStatus::Completed,
        notes: Some(notes.to_string()),
    }));
}

/// 取消预约，保留已有备注
pub fn cancel_appointment(state: &mut AppState, appointment_id: &str) {
    state.dispatch(Action::Appointments(AppointmentAction::Cancel {
        id: appointment_id.to_string(),
    }));
}
