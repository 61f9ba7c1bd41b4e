//! 会话服务
//!
//! 凭据核验发生在这里而不是会话切片里：规范化邮箱后按角色查找
//! 精确匹配的 (邮箱, 密码) 记录，再派发成功或失败动作。
//! 失败只有一种口径（无效凭据），不区分“用户不存在”和“密码错误”。

use crate::latency::LatencySimulator;
use chrono::{NaiveDate, Utc};
use portal_core::utils::{generate_patient_id, generate_request_id};
use portal_core::{
    Credentials, DoctorRequest, DoctorStatus, EmergencyContact, Patient, Role, SessionUser,
};
use portal_state::{Action, AppState, AuthAction, DoctorAction, PatientAction};

/// 患者注册表单（字段级校验由视图层完成）
#[derive(Debug, Clone)]
pub struct SignupPatientForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub emergency_contact: EmergencyContact,
}

/// 医生入驻申请表单
#[derive(Debug, Clone)]
pub struct SignupDoctorForm {
    pub name: String,
    pub email: String,
    pub specialty: String,
    pub phone: String,
    pub license_number: String,
    pub hospital_affiliation: String,
    pub experience: String,
    pub qualifications: String,
    pub clinic_address: String,
}

/// 会话服务
pub struct SessionManager<L: LatencySimulator> {
    latency: L,
    admin: Credentials,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl<L: LatencySimulator> SessionManager<L> {
    pub fn new(latency: L, admin: Credentials) -> Self {
        Self { latency, admin }
    }

    /// 按角色登录；结果写入会话切片（成功身份或扁平错误信息）
    pub async fn login(&self, state: &mut AppState, role: Role, email: &str, password: &str) {
        state.dispatch(Action::Auth(AuthAction::LoginStart));
        self.latency.simulate().await;

        let email = normalize_email(email);
        let matched = match role {
            Role::Admin => (normalize_email(&self.admin.email) == email
                && self.admin.password == password)
                .then(|| SessionUser {
                    id: "admin001".to_string(),
                    email: self.admin.email.clone(),
                    name: "System Administrator".to_string(),
                }),
            Role::Doctor => state
                .doctors
                .doctors
                .iter()
                .find(|d| {
                    normalize_email(&d.credentials.email) == email
                        && d.credentials.password == password
                })
                .map(|d| SessionUser {
                    id: d.id.clone(),
                    email: d.email.clone(),
                    name: d.name.clone(),
                }),
            Role::Patient => state
                .patients
                .patients
                .iter()
                .find(|p| normalize_email(&p.email) == email && p.password == password)
                .map(|p| SessionUser {
                    id: p.id.clone(),
                    email: p.email.clone(),
                    name: p.name.clone(),
                }),
        };

        let action = match matched {
            Some(user) => AuthAction::LoginSuccess { user, role },
            // 患者端的失败文案与其他角色不同，沿用各自的提示语
            None => AuthAction::LoginFailure(match role {
                Role::Patient => "Invalid email or password".to_string(),
                _ => format!("Invalid {role} credentials"),
            }),
        };
        state.dispatch(Action::Auth(action));
    }

    /// 退出登录
    pub fn logout(&self, state: &mut AppState) {
        state.dispatch(Action::Auth(AuthAction::Logout));
    }

    /// 患者注册：生成ID、追加记录、随即自动登录；返回新患者ID
    pub async fn signup_patient(&self, state: &mut AppState, form: SignupPatientForm) -> String {
        let patient_id = generate_patient_id();
        let patient = Patient {
            id: patient_id.clone(),
            name: form.name.clone(),
            email: form.email.clone(),
            password: form.password,
            phone: form.phone,
            date_of_birth: form.date_of_birth,
            address: form.address,
            emergency_contact: form.emergency_contact,
            medical_history: vec![],
            created_at: Some(Utc::now()),
        };
        state.dispatch(Action::Patients(PatientAction::AddPatient(patient)));

        self.latency.simulate().await;
        state.dispatch(Action::Auth(AuthAction::LoginSuccess {
            user: SessionUser {
                id: patient_id.clone(),
                email: form.email,
                name: form.name,
            },
            role: Role::Patient,
        }));
        patient_id
    }

    /// 医生入驻申请：生成申请ID并进入待审批队列；返回申请ID
    pub async fn signup_doctor(&self, state: &mut AppState, form: SignupDoctorForm) -> String {
        let request_id = generate_request_id();
        let request = DoctorRequest {
            id: request_id.clone(),
            name: form.name,
            email: form.email,
            specialty: form.specialty,
            phone: form.phone,
            license_number: form.license_number,
            hospital_affiliation: form.hospital_affiliation,
            experience: form.experience,
            qualifications: form.qualifications,
            clinic_address: form.clinic_address,
            submitted_at: Utc::now(),
            status: DoctorStatus::Pending,
        };

        self.latency.simulate().await;
        state.dispatch(Action::Doctors(DoctorAction::AddRequest(request)));
        request_id
    }
}
