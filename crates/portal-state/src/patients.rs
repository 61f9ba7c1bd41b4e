//! 患者切片
//!
//! 打卡记录是一个三层映射：患者ID → 日期 → 药品键("药名-HH:MM") → 记录，
//! 缺失的中间层在首次写入时惰性创建。

use chrono::NaiveDate;
use portal_core::{Patient, Prescription, TrackerEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 患者切片的状态转移动作
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PatientAction {
    /// 追加患者，ID由调用方预先生成
    AddPatient(Patient),
    /// 选中当前患者（用于管理端查看）
    SetCurrentPatient(Option<String>),
    /// 打卡记录插入或更新
    UpdateMedicineTracker {
        patient_id: String,
        date: NaiveDate,
        medicine_key: String,
        taken: bool,
        time: Option<String>,
    },
    /// 追加处方
    AddPrescription(Prescription),
}

/// 患者切片状态
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientState {
    pub patients: Vec<Patient>,
    pub current_patient: Option<String>,
    pub prescriptions: Vec<Prescription>,
    pub medicine_tracker: HashMap<String, HashMap<NaiveDate, HashMap<String, TrackerEntry>>>,
}

impl PatientState {
    /// 应用一个患者切片动作
    pub fn apply(&mut self, action: PatientAction) {
        match action {
            PatientAction::AddPatient(patient) => {
                tracing::info!("Registered patient {}", patient.id);
                self.patients.push(patient);
            }
            PatientAction::SetCurrentPatient(patient_id) => {
                self.current_patient = patient_id;
            }
            PatientAction::UpdateMedicineTracker {
                patient_id,
                date,
                medicine_key,
                taken,
                time,
            } => {
                tracing::debug!(
                    "Tracker update for {} on {}: {} taken={}",
                    patient_id,
                    date,
                    medicine_key,
                    taken
                );
                self.medicine_tracker
                    .entry(patient_id)
                    .or_default()
                    .entry(date)
                    .or_default()
                    .insert(medicine_key, TrackerEntry { taken, time });
            }
            PatientAction::AddPrescription(prescription) => {
                tracing::info!(
                    "Added prescription {} for patient {}",
                    prescription.id,
                    prescription.patient_id
                );
                self.prescriptions.push(prescription);
            }
        }
    }

    /// 查询某患者某天某药品键的打卡记录
    pub fn tracker_entry(
        &self,
        patient_id: &str,
        date: NaiveDate,
        medicine_key: &str,
    ) -> Option<&TrackerEntry> {
        self.medicine_tracker
            .get(patient_id)?
            .get(&date)?
            .get(medicine_key)
    }
}
