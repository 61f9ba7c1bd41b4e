//! 表单校验
//!
//! 纯谓词函数，只返回真假，从不抛错；错误提示由视图层按字段展示。

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

use crate::utils::today;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("valid phone regex"))
}

/// 邮箱格式校验
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// 电话号码校验：可选 + 前缀，至少10位数字/空格/横线/括号
pub fn validate_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

/// 密码长度不小于6
pub fn validate_password(password: &str) -> bool {
    password.len() >= 6
}

/// 必填字段：去除首尾空白后非空
pub fn validate_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 出生日期校验：按年份差计算的年龄在 0..=120 之间
pub fn validate_date_of_birth(date_of_birth: NaiveDate) -> bool {
    let age = today().year() - date_of_birth.year();
    (0..=120).contains(&age)
}

/// 预约日期校验：不早于今天
pub fn validate_appointment_date(date: NaiveDate) -> bool {
    date >= today()
}
