//! 审批流程
//!
//! 批准医生入驻申请时生成系统凭据（医生ID + 随机初始密码），
//! 登录邮箱沿用申请人自己的邮箱。新医生排班为空，需自行配置。

use crate::latency::LatencySimulator;
use chrono::Utc;
use portal_core::utils::{generate_doctor_id, generate_password};
use portal_core::{Credentials, Doctor, DoctorStatus, PortalError, Result};
use portal_state::{Action, AppState, DoctorAction};
use serde::Serialize;

/// 批准时签发的登录凭据，交给管理端转发给医生
#[derive(Debug, Clone, Serialize)]
pub struct IssuedCredentials {
    pub doctor_id: String,
    pub email: String,
    pub password: String,
}

/// 医生申请审批服务
pub struct ApprovalService<L: LatencySimulator> {
    latency: L,
}

impl<L: LatencySimulator> ApprovalService<L> {
    pub fn new(latency: L) -> Self {
        Self { latency }
    }

    /// 批准申请：签发凭据，申请出队，医生入列
    pub async fn approve(&self, state: &mut AppState, request_id: &str) -> Result<IssuedCredentials> {
        let request = state
            .doctors
            .pending_requests
            .iter()
            .find(|r| r.id == request_id)
            .cloned()
            .ok_or_else(|| PortalError::NotFound(format!("Doctor request {request_id} not found")))?;

        self.latency.simulate().await;

        let doctor_id = generate_doctor_id();
        let password = generate_password();
        tracing::info!(
            "Approving request {} for {}: issued doctor id {}",
            request.id,
            request.name,
            doctor_id
        );

        let doctor = Doctor {
            id: doctor_id.clone(),
            name: request.name,
            email: request.email.clone(),
            specialty: request.specialty,
            phone: request.phone,
            status: DoctorStatus::Approved,
            license_number: request.license_number,
            hospital_affiliation: request.hospital_affiliation,
            experience: request.experience,
            qualifications: request.qualifications,
            clinic_address: request.clinic_address,
            availability: vec![],
            credentials: Credentials {
                email: request.email.clone(),
                password: password.clone(),
            },
            created_at: Some(Utc::now()),
        };

        state.dispatch(Action::Doctors(DoctorAction::ApproveRequest {
            request_id: request_id.to_string(),
            doctor,
        }));

        Ok(IssuedCredentials {
            doctor_id,
            email: request.email,
            password,
        })
    }

    /// 驳回申请：从队列移除，不保留记录
    pub async fn reject(&self, state: &mut AppState, request_id: &str) -> Result<()> {
        self.latency.simulate().await;
        tracing::info!("Rejecting doctor request {}", request_id);
        state.dispatch(Action::Doctors(DoctorAction::RejectRequest {
            request_id: request_id.to_string(),
        }));
        Ok(())
    }
}
