//! 用药依从
//!
//! 把患者的每张处方按 (药品 × 服药时间点) 展开成行，并与当天的
//! 打卡记录连接；时间点为零填充 HH:MM，按字典序排序即按时间排序。
//! 漏服判定：未打卡且时间点严格早于当前时刻。

use chrono::NaiveDate;
use portal_core::Medicine;
use portal_state::{Action, AppState, PatientAction};
use serde::Serialize;

/// 一行待服药记录（某药品在某个时间点的一次剂量）
#[derive(Debug, Clone, Serialize)]
pub struct DoseRow {
    /// 打卡键："药名-HH:MM"
    pub medicine_key: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
    pub timing: String,
    pub taken: bool,
    /// 实际服药时间（打卡时记录）
    pub taken_at: Option<String>,
    pub prescription_id: String,
    pub prescription_date: NaiveDate,
    pub doctor_name: String,
}

/// 展开患者某一天的所有剂量行，按时间点排序
pub fn dose_rows(state: &AppState, patient_id: &str, date: NaiveDate) -> Vec<DoseRow> {
    let mut rows: Vec<DoseRow> = Vec::new();

    for prescription in state
        .patients
        .prescriptions
        .iter()
        .filter(|p| p.patient_id == patient_id)
    {
        for medicine in &prescription.medicines {
            for timing in &medicine.timings {
                let medicine_key = medicine_key(medicine, timing);
                let entry = state.patients.tracker_entry(patient_id, date, &medicine_key);
                rows.push(DoseRow {
                    medicine_key,
                    name: medicine.name.clone(),
                    dosage: medicine.dosage.clone(),
                    frequency: medicine.frequency.clone(),
                    duration: medicine.duration.clone(),
                    instructions: medicine.instructions.clone(),
                    timing: timing.clone(),
                    taken: entry.map(|e| e.taken).unwrap_or(false),
                    taken_at: entry.and_then(|e| e.time.clone()),
                    prescription_id: prescription.id.clone(),
                    prescription_date: prescription.date,
                    doctor_name: prescription.doctor_name.clone(),
                });
            }
        }
    }

    rows.sort_by(|a, b| a.timing.cmp(&b.timing));
    rows
}

/// 已服剂量数
pub fn taken_count(rows: &[DoseRow]) -> usize {
    rows.iter().filter(|row| row.taken).count()
}

/// 漏服剂量数：未服且时间点严格早于 now（HH:MM）
pub fn missed_count(rows: &[DoseRow], now: &str) -> usize {
    rows.iter()
        .filter(|row| !row.taken && row.timing.as_str() < now)
        .count()
}

/// 打卡或取消打卡一剂药
pub fn mark_dose(
    state: &mut AppState,
    patient_id: &str,
    date: NaiveDate,
    medicine_name: &str,
    timing: &str,
    taken: bool,
    now: &str,
) {
    state.dispatch(Action::Patients(PatientAction::UpdateMedicineTracker {
        patient_id: patient_id.to_string(),
        date,
        medicine_key: format!("{medicine_name}-{timing}"),
        taken,
        time: taken.then(|| now.to_string()),
    }));
}

fn medicine_key(medicine: &Medicine, timing: &str) -> String {
    format!("{}-{}", medicine.name, timing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::utils::today;

    #[test]
    fn test_rows_expand_per_medicine_per_timing() {
        let state = AppState::seeded();
        let rows = dose_rows(&state, "PAT001", today());

        // presc001: Lisinopril@09:00 + Amlodipine@20:00; presc002: Ibuprofen ×3
        assert_eq!(rows.len(), 5);
        // 字典序即时间序
        let timings: Vec<&str> = rows.iter().map(|r| r.timing.as_str()).collect();
        assert_eq!(timings, ["08:00", "09:00", "14:00", "20:00", "20:00"]);
    }

    #[test]
    fn test_rows_join_todays_tracker() {
        let state = AppState::seeded();
        let rows = dose_rows(&state, "PAT001", today());

        let lisinopril = rows
            .iter()
            .find(|r| r.medicine_key == "Lisinopril-09:00")
            .unwrap();
        assert!(lisinopril.taken);
        assert_eq!(lisinopril.taken_at.as_deref(), Some("09:15"));
        // 行内携带完整的药品字段
        assert_eq!(lisinopril.dosage, "10mg");
        assert_eq!(lisinopril.duration, "30 days");
        assert_eq!(lisinopril.doctor_name, "Dr. Sarah Johnson");

        let amlodipine = rows
            .iter()
            .find(|r| r.medicine_key == "Amlodipine-20:00")
            .unwrap();
        assert!(!amlodipine.taken);
        assert!(amlodipine.taken_at.is_none());
    }

    #[test]
    fn test_missed_is_strictly_before_now() {
        let state = AppState::seeded();
        let rows = dose_rows(&state, "PAT001", today());

        // 种子数据里 08:00 与 14:00 的 Ibuprofen 未打卡
        assert_eq!(missed_count(&rows, "07:00"), 0);
        assert_eq!(missed_count(&rows, "08:00"), 0); // 等于不算漏服
        assert_eq!(missed_count(&rows, "08:01"), 1);
        assert_eq!(missed_count(&rows, "15:00"), 2);
        // 20:00 的 Amlodipine 与 Ibuprofen 同样未打卡
        assert_eq!(missed_count(&rows, "23:59"), 4);
    }

    #[test]
    fn test_mark_dose_round_trip() {
        let mut state = AppState::seeded();
        let date = today();

        mark_dose(&mut state, "PAT001", date, "Amlodipine", "20:00", true, "20:05");
        let rows = dose_rows(&state, "PAT001", date);
        let amlodipine = rows
            .iter()
            .find(|r| r.medicine_key == "Amlodipine-20:00")
            .unwrap();
        assert!(amlodipine.taken);
        assert_eq!(amlodipine.taken_at.as_deref(), Some("20:05"));

        mark_dose(&mut state, "PAT001", date, "Amlodipine", "20:00", false, "20:06");
        let rows = dose_rows(&state, "PAT001", date);
        let amlodipine = rows
            .iter()
            .find(|r| r.medicine_key == "Amlodipine-20:00")
            .unwrap();
        assert!(!amlodipine.taken);
        assert!(amlodipine.taken_at.is_none());
    }

    #[test]
    fn test_taken_count_seeded_today() {
        let state = AppState::seeded();
        let rows = dose_rows(&state, "PAT002", today());
        assert_eq!(rows.len(), 2);
        assert_eq!(taken_count(&rows), 1);
    }
}
