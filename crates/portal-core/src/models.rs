//! 核心数据模型定义
//!
//! 所有集合均驻留内存，切片之间只通过ID互相引用，从不共享对象。

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 用户角色
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 管理员 - 审批医生申请
    Admin,
    /// 医生 - 管理预约和出诊时间
    Doctor,
    /// 患者 - 预约挂号、用药打卡
    Patient,
}

impl Role {
    /// 路由路径中使用的小写角色名
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Patient => "patient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 会话中的用户身份
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// 登录凭据（按需求明文存储与比对）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// 医生状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DoctorStatus {
    Approved,
    Pending,
}

/// 某个工作日的可预约时段，时间为零填充的 HH:MM 字符串
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayAvailability {
    /// 工作日名称（Monday..Sunday）
    pub day: String,
    pub slots: Vec<String>,
}

/// 医生信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub specialty: String,
    pub phone: String,
    pub status: DoctorStatus,
    pub license_number: String,
    pub hospital_affiliation: String,
    pub experience: String,
    pub qualifications: String,
    pub clinic_address: String,
    /// 仅限本人修改，整表替换而非合并
    pub availability: Vec<DayAvailability>,
    pub credentials: Credentials,
    pub created_at: Option<DateTime<Utc>>,
}

/// 待审批的医生申请，审批通过后晋升为 Doctor（使用新生成的ID与凭据）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub specialty: String,
    pub phone: String,
    pub license_number: String,
    pub hospital_affiliation: String,
    pub experience: String,
    pub qualifications: String,
    pub clinic_address: String,
    pub submitted_at: DateTime<Utc>,
    pub status: DoctorStatus,
}

/// 紧急联系人
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relation: String,
}

/// 历史病历记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub date: NaiveDate,
    pub diagnosis: String,
    pub doctor: String,
    pub notes: String,
}

/// 患者信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub emergency_contact: EmergencyContact,
    pub medical_history: Vec<MedicalRecord>,
    pub created_at: Option<DateTime<Utc>>,
}

/// 预约状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// 预约记录
///
/// patient_name/doctor_name 是创建时拷贝的冗余字段，便于展示，不参与任何查找。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date: NaiveDate,
    /// 零填充的 HH:MM 字符串，时段冲突按字符串精确比较
    pub time: String,
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub reason: String,
    pub notes: String,
    pub booked_at: Option<DateTime<Utc>>,
}

/// 处方中的单个药品
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medicine {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
    /// 每日服药时间点（HH:MM）
    pub timings: Vec<String>,
}

/// 处方，创建后不再修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub appointment_id: String,
    pub date: NaiveDate,
    pub medicines: Vec<Medicine>,
}

/// 用药打卡记录，按 (患者, 日期, 药品+时间点) 惰性创建，从不删除
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerEntry {
    pub taken: bool,
    /// 实际服药时间（HH:MM），未服时为 None
    pub time: Option<String>,
}
