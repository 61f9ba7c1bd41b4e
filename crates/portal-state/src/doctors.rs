//! 医生切片
//!
//! 同一个ID只会存在于 doctors 或 pending_requests 其中之一：
//! 审批消费申请并追加一名携带全新ID与凭据的医生。

use chrono::Utc;
use portal_core::{DayAvailability, Doctor, DoctorRequest, DoctorStatus};
use serde::{Deserialize, Serialize};

/// 医生切片的状态转移动作
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DoctorAction {
    /// 直接追加一名医生
    AddDoctor(Doctor),
    /// 追加一份待审批申请
    AddRequest(DoctorRequest),
    /// 整表替换某位医生的出诊时间（不做合并）
    UpdateAvailability {
        doctor_id: String,
        availability: Vec<DayAvailability>,
    },
    /// 审批通过：按ID移除申请（不存在则跳过移除），追加医生并盖上批准时间戳
    ApproveRequest { request_id: String, doctor: Doctor },
    /// 驳回申请：按ID移除，不存在则不做任何事
    RejectRequest { request_id: String },
}

/// 医生切片状态
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorState {
    pub doctors: Vec<Doctor>,
    pub pending_requests: Vec<DoctorRequest>,
}

impl DoctorState {
    /// 应用一个医生切片动作
    pub fn apply(&mut self, action: DoctorAction) {
        match action {
            DoctorAction::AddDoctor(doctor) => {
                tracing::info!("Added doctor {} ({})", doctor.id, doctor.specialty);
                self.doctors.push(doctor);
            }
            DoctorAction::AddRequest(request) => {
                tracing::info!("Received doctor application {} from {}", request.id, request.email);
                self.pending_requests.push(request);
            }
            DoctorAction::UpdateAvailability {
                doctor_id,
                availability,
            } => {
                if let Some(doctor) = self.doctors.iter_mut().find(|d| d.id == doctor_id) {
                    tracing::info!(
                        "Replaced availability for doctor {} ({} days)",
                        doctor_id,
                        availability.len()
                    );
                    doctor.availability = availability;
                } else {
                    tracing::warn!("Availability update for unknown doctor {}", doctor_id);
                }
            }
            DoctorAction::ApproveRequest { request_id, mut doctor } => {
                if let Some(pos) = self.pending_requests.iter().position(|r| r.id == request_id) {
                    self.pending_requests.remove(pos);
                } else {
                    // 申请不存在时仍追加医生，与原有行为保持一致
                    tracing::warn!("Approved request {} was not pending", request_id);
                }
                doctor.status = DoctorStatus::Approved;
                doctor.created_at = Some(Utc::now());
                tracing::info!("Approved request {} as doctor {}", request_id, doctor.id);
                self.doctors.push(doctor);
            }
            DoctorAction::RejectRequest { request_id } => {
                if let Some(pos) = self.pending_requests.iter().position(|r| r.id == request_id) {
                    self.pending_requests.remove(pos);
                    tracing::info!("Rejected doctor request {}", request_id);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::Credentials;

    fn sample_doctor(id: &str) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: "Dr. James Wilson".to_string(),
            email: "james.wilson@email.com".to_string(),
            specialty: "Orthopedics".to_string(),
            phone: "+1-555-0126".to_string(),
            status: DoctorStatus::Pending,
            license_number: "MD901234".to_string(),
            hospital_affiliation: "Sports Medicine Center".to_string(),
            experience: "10-15 years".to_string(),
            qualifications: "MD".to_string(),
            clinic_address: "321 Sports Medicine Dr".to_string(),
            availability: vec![],
            credentials: Credentials {
                email: "james.wilson@email.com".to_string(),
                password: "aB3dE5fG7".to_string(),
            },
            created_at: None,
        }
    }

    fn sample_request(id: &str) -> DoctorRequest {
        DoctorRequest {
            id: id.to_string(),
            name: "Dr. James Wilson".to_string(),
            email: "james.wilson@email.com".to_string(),
            specialty: "Orthopedics".to_string(),
            phone: "+1-555-0126".to_string(),
            license_number: "MD901234".to_string(),
            hospital_affiliation: "Sports Medicine Center".to_string(),
            experience: "10-15 years".to_string(),
            qualifications: "MD".to_string(),
            clinic_address: "321 Sports Medicine Dr".to_string(),
            submitted_at: Utc::now(),
            status: DoctorStatus::Pending,
        }
    }

    #[test]
    fn test_approve_moves_request_into_doctors() {
        let mut state = DoctorState::default();
        state.apply(DoctorAction::AddRequest(sample_request("req001")));

        state.apply(DoctorAction::ApproveRequest {
            request_id: "req001".to_string(),
            doctor: sample_doctor("doc456"),
        });

        // 申请消失，医生以新ID、批准状态和时间戳出现
        assert!(state.pending_requests.iter().all(|r| r.id != "req001"));
        let doctor = state.doctors.iter().find(|d| d.id == "doc456").unwrap();
        assert_eq!(doctor.status, DoctorStatus::Approved);
        assert!(doctor.created_at.is_some());
    }

    #[test]
    fn test_approve_missing_request_still_appends() {
        let mut state = DoctorState::default();
        state.apply(DoctorAction::ApproveRequest {
            request_id: "req999".to_string(),
            doctor: sample_doctor("doc456"),
        });
        assert_eq!(state.doctors.len(), 1);
    }

    #[test]
    fn test_reject_is_noop_when_absent() {
        let mut state = DoctorState::default();
        state.apply(DoctorAction::AddRequest(sample_request("req001")));

        state.apply(DoctorAction::RejectRequest {
            request_id: "req404".to_string(),
        });
        assert_eq!(state.pending_requests.len(), 1);

        state.apply(DoctorAction::RejectRequest {
            request_id: "req001".to_string(),
        });
        assert!(state.pending_requests.is_empty());
        assert!(state.doctors.is_empty());
    }

    #[test]
    fn test_update_availability_replaces_whole_table() {
        let mut state = DoctorState::default();
        let mut doctor = sample_doctor("doc456");
        doctor.availability = vec![DayAvailability {
            day: "Monday".to_string(),
            slots: vec!["09:00".to_string(), "10:00".to_string()],
        }];
        state.apply(DoctorAction::AddDoctor(doctor));

        state.apply(DoctorAction::UpdateAvailability {
            doctor_id: "doc456".to_string(),
            availability: vec![DayAvailability {
                day: "Friday".to_string(),
                slots: vec!["14:00".to_string()],
            }],
        });

        let doctor = &state.doctors[0];
        assert_eq!(doctor.availability.len(), 1);
        assert_eq!(doctor.availability[0].day, "Friday");

        // 未知医生：不做任何事
        state.apply(DoctorAction::UpdateAvailability {
            doctor_id: "doc999".to_string(),
            availability: vec![],
        });
        assert_eq!(state.doctors[0].availability[0].day, "Friday");
    }
}
