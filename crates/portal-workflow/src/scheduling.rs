//! 预约排程
//!
//! 可约时段 = 医生在该工作日配置的时段，去掉当天已被非取消预约
//! 占用的时段（按 HH:MM 字符串精确比较），排序后返回。
//! 挂号本身不做写入时冲突检查：并发双订的裁决策略悬而未决，
//! 当前依赖调用方先用本视图过滤。

use chrono::{NaiveDate, Utc};
use portal_core::utils::{generate_appointment_id, weekday_name};
use portal_core::{Appointment, AppointmentStatus, PortalError, Result};
use portal_state::{Action, AppointmentAction, AppState};

/// 计算某医生某天的可预约时段
///
/// 医生当天无排班时返回空表（不是错误）；结果已排序，与配置顺序无关。
pub fn available_slots(state: &AppState, doctor_id: &str, date: NaiveDate) -> Vec<String> {
    let Some(doctor) = state.doctors.doctors.iter().find(|d| d.id == doctor_id) else {
        return Vec::new();
    };

    let day = weekday_name(date);
    let Some(day_availability) = doctor.availability.iter().find(|a| a.day == day) else {
        return Vec::new();
    };

    let booked: Vec<&str> = state
        .appointments
        .appointments
        .iter()
        .filter(|a| {
            a.doctor_id == doctor_id && a.date == date && a.status != AppointmentStatus::Cancelled
        })
        .map(|a| a.time.as_str())
        .collect();

    let mut slots: Vec<String> = day_availability
        .slots
        .iter()
        .filter(|slot| !booked.contains(&slot.as_str()))
        .cloned()
        .collect();
    slots.sort();
    slots
}

/// 挂号：解析患者和医生姓名，生成预约ID并追加记录
pub fn book_appointment(
    state: &mut AppState,
    patient_id: &str,
    doctor_id: &str,
    date: NaiveDate,
    time: &str,
    reason: &str,
    appointment_type: &str,
) -> Result<Appointment> {
    let patient = state
        .patients
        .patients
        .iter()
        .find(|p| p.id == patient_id)
        .ok_or_else(|| PortalError::NotFound(format!("Patient {patient_id} not found")))?;
    let doctor = state
        .doctors
        .doctors
        .iter()
        .find(|d| d.id == doctor_id)
        .ok_or_else(|| PortalError::NotFound(format!("Doctor {doctor_id} not found")))?;

    let appointment = Appointment {
        id: generate_appointment_id(),
        patient_id: patient.id.clone(),
        patient_name: patient.name.clone(),
        doctor_id: doctor.id.clone(),
        doctor_name: doctor.name.clone(),
        date,
        time: time.to_string(),
        appointment_type: appointment_type.to_string(),
        status: AppointmentStatus::Scheduled,
        reason: reason.to_string(),
        notes: String::new(),
        booked_at: Some(Utc::now()),
    };

    state.dispatch(Action::Appointments(AppointmentAction::Add(
        appointment.clone(),
    )));
    Ok(appointment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration, Weekday};
    use portal_core::utils::today;
    use portal_state::DoctorAction;

    /// 今天之后的第一个周一
    fn next_monday() -> NaiveDate {
        let mut date = today() + Duration::days(1);
        while date.weekday() != Weekday::Mon {
            date += Duration::days(1);
        }
        date
    }

    #[test]
    fn test_available_slots_exclude_booked_non_cancelled() {
        let mut state = AppState::seeded();
        let monday = next_monday();

        // doc001 周一时段 [09:00,10:00,11:00,14:00,15:00]，预约占用 10:00
        book_appointment(
            &mut state,
            "PAT001",
            "doc001",
            monday,
            "10:00",
            "Follow-up",
            "Consultation",
        )
        .unwrap();

        assert_eq!(
            available_slots(&state, "doc001", monday),
            ["09:00", "11:00", "14:00", "15:00"]
        );
    }

    #[test]
    fn test_cancelled_booking_frees_the_slot() {
        let mut state = AppState::seeded();
        let monday = next_monday();

        let appointment = book_appointment(
            &mut state,
            "PAT001",
            "doc001",
            monday,
            "10:00",
            "Follow-up",
            "Consultation",
        )
        .unwrap();
        state.dispatch(Action::Appointments(AppointmentAction::Cancel {
            id: appointment.id,
        }));

        assert_eq!(
            available_slots(&state, "doc001", monday),
            ["09:00", "10:00", "11:00", "14:00", "15:00"]
        );
    }

    #[test]
    fn test_slots_sorted_regardless_of_configured_order() {
        let mut state = AppState::seeded();
        let monday = next_monday();

        state.dispatch(Action::Doctors(DoctorAction::UpdateAvailability {
            doctor_id: "doc001".to_string(),
            availability: vec![portal_core::DayAvailability {
                day: "Monday".to_string(),
                slots: vec!["15:00".into(), "09:00".into(), "11:00".into()],
            }],
        }));

        assert_eq!(
            available_slots(&state, "doc001", monday),
            ["09:00", "11:00", "15:00"]
        );
    }

    #[test]
    fn test_no_availability_for_weekday_is_empty_not_error() {
        let state = AppState::seeded();
        // doc001 没有周末排班
        let mut date = today() + Duration::days(1);
        while date.weekday() != Weekday::Sun {
            date += Duration::days(1);
        }
        assert!(available_slots(&state, "doc001", date).is_empty());
        // 未知医生同样得到空表
        assert!(available_slots(&state, "doc999", date).is_empty());
    }

    #[test]
    fn test_book_appointment_unknown_ids() {
        let mut state = AppState::seeded();
        let monday = next_monday();
        assert!(book_appointment(
            &mut state,
            "PAT999",
            "doc001",
            monday,
            "09:00",
            "x",
            "Consultation"
        )
        .is_err());
        assert!(book_appointment(
            &mut state,
            "PAT001",
            "doc999",
            monday,
            "09:00",
            "x",
            "Consultation"
        )
        .is_err());
    }
}
