//! 种子数据
//!
//! 无持久化后端，进程启动时从这里构建初始集合；
//! “今天”的预约和打卡记录在构建时按本地日期计算。

use crate::{
    appointments::AppointmentState, auth::AuthState, doctors::DoctorState,
    patients::PatientState, store::AppState,
};
use chrono::{NaiveDate, TimeZone, Utc};
use portal_core::utils::today;
use portal_core::{
    Appointment, AppointmentStatus, Credentials, DayAvailability, Doctor, DoctorRequest,
    DoctorStatus, EmergencyContact, MedicalRecord, Medicine, Patient, Prescription, TrackerEntry,
};
use std::collections::HashMap;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn day(day: &str, slots: &[&str]) -> DayAvailability {
    DayAvailability {
        day: day.to_string(),
        slots: slots.iter().map(|s| s.to_string()).collect(),
    }
}

fn seed_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: "doc001".into(),
            name: "Dr. Sarah Johnson".into(),
            email: "doctor@hospital.com".into(),
            specialty: "Cardiology".into(),
            phone: "+1-555-0123".into(),
            status: DoctorStatus::Approved,
            license_number: "MD123456".into(),
            hospital_affiliation: "City General Hospital".into(),
            experience: "10-15 years".into(),
            qualifications: "MD, FACC".into(),
            clinic_address: "123 Medical Center Dr, Healthcare District".into(),
            availability: vec![
                day("Monday", &["09:00", "10:00", "11:00", "14:00", "15:00"]),
                day("Tuesday", &["09:00", "10:00", "11:00", "14:00", "15:00"]),
                day("Wednesday", &["09:00", "10:00", "11:00"]),
                day("Thursday", &["14:00", "15:00", "16:00"]),
                day("Friday", &["09:00", "10:00", "11:00", "14:00"]),
            ],
            credentials: Credentials {
                email: "doctor@hospital.com".into(),
                password: "doctor123".into(),
            },
            created_at: None,
        },
        Doctor {
            id: "doc002".into(),
            name: "Dr. Michael Chen".into(),
            email: "michael.chen@hospital.com".into(),
            specialty: "Neurology".into(),
            phone: "+1-555-0124".into(),
            status: DoctorStatus::Approved,
            license_number: "MD789012".into(),
            hospital_affiliation: "City General Hospital".into(),
            experience: "15+ years".into(),
            qualifications: "MD, PhD, FAAN".into(),
            clinic_address: "456 Neurology Wing, Medical Center".into(),
            availability: vec![
                day("Monday", &["10:00", "11:00", "15:00", "16:00"]),
                day("Tuesday", &["09:00", "10:00", "14:00", "15:00"]),
                day("Wednesday", &["11:00", "14:00", "15:00", "16:00"]),
                day("Thursday", &["09:00", "10:00", "11:00", "14:00"]),
                day("Friday", &["10:00", "11:00", "15:00", "16:00"]),
            ],
            credentials: Credentials {
                email: "michael.chen@hospital.com".into(),
                password: "chen123".into(),
            },
            created_at: None,
        },
        Doctor {
            id: "doc003".into(),
            name: "Dr. Emily Rodriguez".into(),
            email: "emily.rodriguez@hospital.com".into(),
            specialty: "Pediatrics".into(),
            phone: "+1-555-0125".into(),
            status: DoctorStatus::Approved,
            license_number: "MD345678".into(),
            hospital_affiliation: "Children's Hospital Wing".into(),
            experience: "5-10 years".into(),
            qualifications: "MD, Board Certified Pediatrics".into(),
            clinic_address: "789 Pediatrics Department, Medical Center".into(),
            availability: vec![
                day("Monday", &["08:00", "09:00", "10:00", "11:00", "14:00"]),
                day("Tuesday", &["08:00", "09:00", "10:00", "14:00", "15:00"]),
                day("Wednesday", &["09:00", "10:00", "11:00", "14:00", "15:00"]),
                day("Thursday", &["08:00", "09:00", "10:00", "11:00"]),
                day("Friday", &["08:00", "09:00", "14:00", "15:00"]),
            ],
            credentials: Credentials {
                email: "emily.rodriguez@hospital.com".into(),
                password: "emily123".into(),
            },
            created_at: None,
        },
    ]
}

fn seed_requests() -> Vec<DoctorRequest> {
    vec![
        DoctorRequest {
            id: "req001".into(),
            name: "Dr. James Wilson".into(),
            email: "james.wilson@email.com".into(),
            specialty: "Orthopedics".into(),
            phone: "+1-555-0126".into(),
            license_number: "MD901234".into(),
            hospital_affiliation: "Sports Medicine Center".into(),
            experience: "10-15 years".into(),
            qualifications: "MD, Orthopedic Surgery Board Certified".into(),
            clinic_address: "321 Sports Medicine Dr, Athletic District".into(),
            submitted_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            status: DoctorStatus::Pending,
        },
        DoctorRequest {
            id: "req002".into(),
            name: "Dr. Lisa Thompson".into(),
            email: "lisa.thompson@email.com".into(),
            specialty: "Dermatology".into(),
            phone: "+1-555-0127".into(),
            license_number: "MD567890".into(),
            hospital_affiliation: "Skin Care Clinic".into(),
            experience: "5-10 years".into(),
            qualifications: "MD, Dermatology Board Certified".into(),
            clinic_address: "654 Dermatology Center, Medical Plaza".into(),
            submitted_at: Utc.with_ymd_and_hms(2024, 1, 16, 14, 20, 0).unwrap(),
            status: DoctorStatus::Pending,
        },
    ]
}

fn seed_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "PAT001".into(),
            name: "John Smith".into(),
            email: "patient@email.com".into(),
            password: "patient123".into(),
            phone: "+1-555-0101".into(),
            date_of_birth: date(1985, 6, 15),
            address: "123 Main St, City, State 12345".into(),
            emergency_contact: EmergencyContact {
                name: "Jane Smith".into(),
                phone: "+1-555-0102".into(),
                relation: "Spouse".into(),
            },
            medical_history: vec![
                MedicalRecord {
                    date: date(2024, 1, 10),
                    diagnosis: "Hypertension".into(),
                    doctor: "Dr. Sarah Johnson".into(),
                    notes: "Blood pressure elevated, prescribed medication. Patient should monitor BP daily.".into(),
                },
                MedicalRecord {
                    date: date(2024, 1, 8),
                    diagnosis: "Tension Headaches".into(),
                    doctor: "Dr. Michael Chen".into(),
                    notes: "Stress-related headaches. Recommended stress management and regular sleep schedule.".into(),
                },
            ],
            created_at: None,
        },
        Patient {
            id: "PAT002".into(),
            name: "Mary Wilson".into(),
            email: "mary.wilson@email.com".into(),
            password: "mary123".into(),
            phone: "+1-555-0201".into(),
            date_of_birth: date(1978, 3, 22),
            address: "456 Oak Avenue, Downtown, State 54321".into(),
            emergency_contact: EmergencyContact {
                name: "Robert Wilson".into(),
                phone: "+1-555-0202".into(),
                relation: "Spouse".into(),
            },
            medical_history: vec![MedicalRecord {
                date: date(2024, 1, 12),
                diagnosis: "Routine Check-up".into(),
                doctor: "Dr. Sarah Johnson".into(),
                notes: "All vitals normal. Continue current heart medication.".into(),
            }],
            created_at: None,
        },
        Patient {
            id: "PAT003".into(),
            name: "David Brown".into(),
            email: "david.brown@email.com".into(),
            password: "david123".into(),
            phone: "+1-555-0301".into(),
            date_of_birth: date(1965, 11, 8),
            address: "789 Pine Street, Suburb, State 67890".into(),
            emergency_contact: EmergencyContact {
                name: "Sarah Brown".into(),
                phone: "+1-555-0302".into(),
                relation: "Daughter".into(),
            },
            medical_history: vec![MedicalRecord {
                date: date(2024, 1, 5),
                diagnosis: "Vitamin B12 Deficiency".into(),
                doctor: "Dr. Michael Chen".into(),
                notes: "Started B12 supplements. Memory concerns resolved with treatment.".into(),
            }],
            created_at: None,
        },
    ]
}

struct AppointmentSeed {
    id: &'static str,
    patient: (&'static str, &'static str),
    doctor: (&'static str, &'static str),
    date: NaiveDate,
    time: &'static str,
    appointment_type: &'static str,
    status: AppointmentStatus,
    reason: &'static str,
    notes: &'static str,
}

fn seed_appointments(today: NaiveDate) -> Vec<Appointment> {
    let rows = vec![
        // 今天的已排预约
        AppointmentSeed {
            id: "apt001",
            patient: ("PAT001", "John Smith"),
            doctor: ("doc001", "Dr. Sarah Johnson"),
            date: today,
            time: "10:00",
            appointment_type: "Consultation",
            status: AppointmentStatus::Scheduled,
            reason: "Follow-up for hypertension medication",
            notes: "",
        },
        AppointmentSeed {
            id: "apt002",
            patient: ("PAT002", "Mary Wilson"),
            doctor: ("doc001", "Dr. Sarah Johnson"),
            date: today,
            time: "11:00",
            appointment_type: "Consultation",
            status: AppointmentStatus::Scheduled,
            reason: "Chest pain evaluation",
            notes: "",
        },
        AppointmentSeed {
            id: "apt010",
            patient: ("PAT002", "Mary Wilson"),
            doctor: ("doc002", "Dr. Michael Chen"),
            date: today,
            time: "14:00",
            appointment_type: "Consultation",
            status: AppointmentStatus::Scheduled,
            reason: "Follow-up neurological assessment",
            notes: "",
        },
        AppointmentSeed {
            id: "apt011",
            patient: ("PAT003", "David Brown"),
            doctor: ("doc002", "Dr. Michael Chen"),
            date: today,
            time: "15:00",
            appointment_type: "Check-up",
            status: AppointmentStatus::Scheduled,
            reason: "Memory improvement follow-up",
            notes: "",
        },
        AppointmentSeed {
            id: "apt012",
            patient: ("PAT001", "John Smith"),
            doctor: ("doc003", "Dr. Emily Rodriguez"),
            date: today,
            time: "09:00",
            appointment_type: "Consultation",
            status: AppointmentStatus::Scheduled,
            reason: "General health consultation",
            notes: "",
        },
        // 未来预约
        AppointmentSeed {
            id: "apt003",
            patient: ("PAT001", "John Smith"),
            doctor: ("doc002", "Dr. Michael Chen"),
            date: date(2024, 1, 25),
            time: "15:00",
            appointment_type: "Consultation",
            status: AppointmentStatus::Scheduled,
            reason: "Neurological consultation for headaches",
            notes: "",
        },
        AppointmentSeed {
            id: "apt004",
            patient: ("PAT003", "David Brown"),
            doctor: ("doc001", "Dr. Sarah Johnson"),
            date: date(2024, 1, 26),
            time: "09:00",
            appointment_type: "Check-up",
            status: AppointmentStatus::Scheduled,
            reason: "Annual cardiac screening",
            notes: "",
        },
        // 已完成
        AppointmentSeed {
            id: "apt005",
            patient: ("PAT001", "John Smith"),
            doctor: ("doc001", "Dr. Sarah Johnson"),
            date: date(2024, 1, 10),
            time: "14:00",
            appointment_type: "Consultation",
            status: AppointmentStatus::Completed,
            reason: "Initial hypertension diagnosis",
            notes: "Blood pressure 150/95. Prescribed Lisinopril 10mg daily. Follow-up in 2 weeks.",
        },
        AppointmentSeed {
            id: "apt006",
            patient: ("PAT001", "John Smith"),
            doctor: ("doc002", "Dr. Michael Chen"),
            date: date(2024, 1, 8),
            time: "16:00",
            appointment_type: "Consultation",
            status: AppointmentStatus::Completed,
            reason: "Persistent headaches",
            notes: "Tension headaches. Prescribed Ibuprofen. Stress management recommended.",
        },
        AppointmentSeed {
            id: "apt007",
            patient: ("PAT002", "Mary Wilson"),
            doctor: ("doc001", "Dr. Sarah Johnson"),
            date: date(2024, 1, 12),
            time: "11:00",
            appointment_type: "Check-up",
            status: AppointmentStatus::Completed,
            reason: "Routine cardiac check-up",
            notes: "Normal ECG. Blood pressure stable. Continue current medication.",
        },
        AppointmentSeed {
            id: "apt008",
            patient: ("PAT003", "David Brown"),
            doctor: ("doc002", "Dr. Michael Chen"),
            date: date(2024, 1, 5),
            time: "10:30",
            appointment_type: "Consultation",
            status: AppointmentStatus::Completed,
            reason: "Memory concerns",
            notes: "Cognitive assessment normal. Vitamin B12 deficiency found. Started supplements.",
        },
        AppointmentSeed {
            id: "apt013",
            patient: ("PAT002", "Mary Wilson"),
            doctor: ("doc002", "Dr. Michael Chen"),
            date: date(2024, 1, 11),
            time: "11:00",
            appointment_type: "Consultation",
            status: AppointmentStatus::Completed,
            reason: "Neurological assessment",
            notes: "No abnormalities found. Recommended lifestyle changes for stress management.",
        },
        AppointmentSeed {
            id: "apt014",
            patient: ("PAT003", "David Brown"),
            doctor: ("doc003", "Dr. Emily Rodriguez"),
            date: date(2024, 1, 9),
            time: "14:00",
            appointment_type: "Check-up",
            status: AppointmentStatus::Completed,
            reason: "General wellness check",
            notes: "All vitals normal for age. Continue current supplements.",
        },
        // 已取消
        AppointmentSeed {
            id: "apt009",
            patient: ("PAT002", "Mary Wilson"),
            doctor: ("doc002", "Dr. Michael Chen"),
            date: date(2024, 1, 15),
            time: "13:00",
            appointment_type: "Consultation",
            status: AppointmentStatus::Cancelled,
            reason: "Neurological consultation",
            notes: "Patient cancelled due to scheduling conflict",
        },
    ];

    rows.into_iter()
        .map(|row| Appointment {
            id: row.id.into(),
            patient_id: row.patient.0.into(),
            patient_name: row.patient.1.into(),
            doctor_id: row.doctor.0.into(),
            doctor_name: row.doctor.1.into(),
            date: row.date,
            time: row.time.into(),
            appointment_type: row.appointment_type.into(),
            status: row.status,
            reason: row.reason.into(),
            notes: row.notes.into(),
            booked_at: None,
        })
        .collect()
}

fn medicine(
    name: &str,
    dosage: &str,
    frequency: &str,
    duration: &str,
    instructions: &str,
    timings: &[&str],
) -> Medicine {
    Medicine {
        name: name.to_string(),
        dosage: dosage.to_string(),
        frequency: frequency.to_string(),
        duration: duration.to_string(),
        instructions: instructions.to_string(),
        timings: timings.iter().map(|t| t.to_string()).collect(),
    }
}

fn seed_prescriptions() -> Vec<Prescription> {
    vec![
        Prescription {
            id: "presc001".into(),
            patient_id: "PAT001".into(),
            doctor_id: "doc001".into(),
            doctor_name: "Dr. Sarah Johnson".into(),
            appointment_id: "apt005".into(),
            date: date(2024, 1, 10),
            medicines: vec![
                medicine(
                    "Lisinopril",
                    "10mg",
                    "Once daily",
                    "30 days",
                    "Take with water, preferably in the morning. Monitor blood pressure.",
                    &["09:00"],
                ),
                medicine(
                    "Amlodipine",
                    "5mg",
                    "Once daily",
                    "30 days",
                    "Take in the evening with or without food.",
                    &["20:00"],
                ),
            ],
        },
        Prescription {
            id: "presc002".into(),
            patient_id: "PAT001".into(),
            doctor_id: "doc002".into(),
            doctor_name: "Dr. Michael Chen".into(),
            appointment_id: "apt006".into(),
            date: date(2024, 1, 8),
            medicines: vec![medicine(
                "Ibuprofen",
                "400mg",
                "As needed",
                "14 days",
                "Take with food. Maximum 3 times daily for headache relief.",
                &["08:00", "14:00", "20:00"],
            )],
        },
        Prescription {
            id: "presc003".into(),
            patient_id: "PAT002".into(),
            doctor_id: "doc001".into(),
            doctor_name: "Dr. Sarah Johnson".into(),
            appointment_id: "apt007".into(),
            date: date(2024, 1, 12),
            medicines: vec![medicine(
                "Metoprolol",
                "25mg",
                "Twice daily",
                "60 days",
                "Take with meals. Do not stop suddenly.",
                &["08:00", "20:00"],
            )],
        },
        Prescription {
            id: "presc004".into(),
            patient_id: "PAT003".into(),
            doctor_id: "doc002".into(),
            doctor_name: "Dr. Michael Chen".into(),
            appointment_id: "apt008".into(),
            date: date(2024, 1, 5),
            medicines: vec![medicine(
                "Vitamin B12",
                "1000mcg",
                "Once daily",
                "90 days",
                "Take with breakfast. Continue for 3 months then recheck levels.",
                &["08:00"],
            )],
        },
    ]
}

fn entry(taken: bool, time: Option<&str>) -> TrackerEntry {
    TrackerEntry {
        taken,
        time: time.map(|t| t.to_string()),
    }
}

fn seed_tracker(
    today: NaiveDate,
) -> HashMap<String, HashMap<NaiveDate, HashMap<String, TrackerEntry>>> {
    let mut tracker: HashMap<String, HashMap<NaiveDate, HashMap<String, TrackerEntry>>> =
        HashMap::new();

    let pat001 = tracker.entry("PAT001".into()).or_default();
    pat001.insert(
        today,
        HashMap::from([
            ("Lisinopril-09:00".into(), entry(true, Some("09:15"))),
            ("Amlodipine-20:00".into(), entry(false, None)),
        ]),
    );
    pat001.insert(
        date(2024, 1, 15),
        HashMap::from([
            ("Lisinopril-09:00".into(), entry(true, Some("09:10"))),
            ("Amlodipine-20:00".into(), entry(true, Some("20:30"))),
            ("Ibuprofen-08:00".into(), entry(false, None)),
            ("Ibuprofen-14:00".into(), entry(true, Some("14:15"))),
            ("Ibuprofen-20:00".into(), entry(false, None)),
        ]),
    );
    pat001.insert(
        date(2024, 1, 14),
        HashMap::from([
            ("Lisinopril-09:00".into(), entry(true, Some("09:05"))),
            ("Amlodipine-20:00".into(), entry(true, Some("20:00"))),
            ("Ibuprofen-08:00".into(), entry(true, Some("08:30"))),
            ("Ibuprofen-14:00".into(), entry(false, None)),
            ("Ibuprofen-20:00".into(), entry(true, Some("21:00"))),
        ]),
    );

    tracker.entry("PAT002".into()).or_default().insert(
        today,
        HashMap::from([
            ("Metoprolol-08:00".into(), entry(true, Some("08:00"))),
            ("Metoprolol-20:00".into(), entry(false, None)),
        ]),
    );

    tracker.entry("PAT003".into()).or_default().insert(
        today,
        HashMap::from([("Vitamin B12-08:00".into(), entry(true, Some("08:15")))]),
    );

    tracker
}

/// 构建完整的种子状态
pub fn seeded_state() -> AppState {
    let today = today();
    AppState {
        auth: AuthState::default(),
        doctors: DoctorState {
            doctors: seed_doctors(),
            pending_requests: seed_requests(),
        },
        patients: PatientState {
            patients: seed_patients(),
            current_patient: None,
            prescriptions: seed_prescriptions(),
            medicine_tracker: seed_tracker(today),
        },
        appointments: AppointmentState {
            appointments: seed_appointments(today),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_disjoint_between_doctors_and_requests() {
        let state = seeded_state();
        for request in &state.doctors.pending_requests {
            assert!(state.doctors.doctors.iter().all(|d| d.id != request.id));
        }
    }

    #[test]
    fn test_seed_doc001_monday_slots() {
        let state = seeded_state();
        let doc001 = state
            .doctors
            .doctors
            .iter()
            .find(|d| d.id == "doc001")
            .unwrap();
        let monday = doc001
            .availability
            .iter()
            .find(|a| a.day == "Monday")
            .unwrap();
        assert_eq!(monday.slots, ["09:00", "10:00", "11:00", "14:00", "15:00"]);
    }

    #[test]
    fn test_seed_today_rows_use_seed_date() {
        let state = seeded_state();
        let today = today();
        let apt001 = state.appointments.find("apt001").unwrap();
        assert_eq!(apt001.date, today);
        assert!(state.patients.medicine_tracker["PAT001"].contains_key(&today));
    }

    #[test]
    fn test_seed_prescriptions_reference_seed_patients() {
        let state = seeded_state();
        for prescription in &state.patients.prescriptions {
            assert!(state
                .patients
                .patients
                .iter()
                .any(|p| p.id == prescription.patient_id));
        }
    }
}
