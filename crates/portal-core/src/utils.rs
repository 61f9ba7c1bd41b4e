//! 通用工具函数
//!
//! ID生成沿用带前缀的短随机ID空间，碰撞概率视为可忽略，不做去重保护。

use chrono::{Datelike, Local, NaiveDate, Weekday};
use rand::Rng;

const PASSWORD_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// 生成患者ID（PAT + 4位数字）
pub fn generate_patient_id() -> String {
    format!("PAT{}", rand::thread_rng().gen_range(1000..10000))
}

/// 生成医生ID（doc + 3位数字）
pub fn generate_doctor_id() -> String {
    format!("doc{}", rand::thread_rng().gen_range(100..1000))
}

/// 生成预约ID（apt + 4位数字）
pub fn generate_appointment_id() -> String {
    format!("apt{}", rand::thread_rng().gen_range(1000..10000))
}

/// 生成处方ID（presc + 4位数字）
pub fn generate_prescription_id() -> String {
    format!("presc{}", rand::thread_rng().gen_range(1000..10000))
}

/// 生成医生申请ID（req + 3~4位数字）
pub fn generate_request_id() -> String {
    format!("req{}", rand::thread_rng().gen_range(100..1100))
}

/// 生成初始登录密码：8位大小写字母数字 + 1~2位数字后缀
pub fn generate_password() -> String {
    let mut rng = rand::thread_rng();
    let mut password: String = (0..8)
        .map(|_| PASSWORD_CHARSET[rng.gen_range(0..PASSWORD_CHARSET.len())] as char)
        .collect();
    password.push_str(&rng.gen_range(0..100).to_string());
    password
}

/// 日期对应的工作日名称（Monday..Sunday）
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// 本地当前日期
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// 本地当前时刻，零填充 HH:MM
pub fn current_time_hhmm() -> String {
    Local::now().format("%H:%M").to_string()
}

/// 排班编辑使用的标准时段表：09:00~17:00 整点，跳过13:00午休
pub fn standard_time_slots() -> Vec<String> {
    (9..=17)
        .filter(|hour| *hour != 13)
        .map(|hour| format!("{hour:02}:00"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_prefixes_and_lengths() {
        assert!(generate_patient_id().starts_with("PAT"));
        assert_eq!(generate_patient_id().len(), 7);
        assert!(generate_doctor_id().starts_with("doc"));
        assert_eq!(generate_doctor_id().len(), 6);
        assert!(generate_appointment_id().starts_with("apt"));
        assert!(generate_prescription_id().starts_with("presc"));
        assert!(generate_request_id().starts_with("req"));
    }

    #[test]
    fn test_generated_password_shape() {
        for _ in 0..50 {
            let password = generate_password();
            // 8位随机字符 + 1~2位数字后缀
            assert!(password.len() == 9 || password.len() == 10);
            assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
            assert!(password[8..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_weekday_name() {
        // 2024-01-15 是周一
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(weekday_name(date), "Monday");
        assert_eq!(weekday_name(date.succ_opt().unwrap()), "Tuesday");
    }

    #[test]
    fn test_standard_time_slots_skip_lunch() {
        let slots = standard_time_slots();
        assert_eq!(slots.first().map(String::as_str), Some("09:00"));
        assert_eq!(slots.last().map(String::as_str), Some("17:00"));
        assert!(!slots.contains(&"13:00".to_string()));
        assert_eq!(slots.len(), 8);
    }
}
