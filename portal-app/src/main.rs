//! 医院门户演示程序
//!
//! 加载（或播种）状态后按脚本走一遍核心流程：
//! 授权门判定、管理员审批签发凭据、患者挂号与用药打卡。

mod config;

use chrono::{Datelike, Duration, Weekday};
use clap::Parser;
use config::PortalConfig;
use portal_access::{export_credentials, resolve, RouteDecision, StdoutSink};
use portal_core::utils::{current_time_hhmm, today};
use portal_core::{Credentials, Role};
use portal_state::{AppState, EphemeralStore, JsonFileStore, StateStore};
use portal_workflow::{
    admin_overview, available_slots, book_appointment, dose_rows, mark_dose, missed_count,
    taken_count, ApprovalService, FixedLatency, SessionManager,
};
use tracing::{info, warn};

/// 门户演示命令行参数
#[derive(Parser, Debug)]
#[command(name = "portal-app")]
#[command(about = "医院门户演示：角色会话、审批、预约与用药打卡")]
struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    config: Option<String>,

    /// 状态快照文件路径（覆盖配置）
    #[arg(short, long)]
    state_file: Option<String>,

    /// 日志级别
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(&args.log_level)
        .init();

    let config = PortalConfig::load(args.config.as_deref())?;
    info!("Starting {}...", config.app.name);

    // 选择持久化后端
    let state_file = args.state_file.or(config.storage.state_file.clone());
    let store: Box<dyn StateStore> = match &state_file {
        Some(path) => {
            info!("Persisting state snapshots to {}", path);
            Box::new(JsonFileStore::new(path))
        }
        None => {
            info!("Running with in-memory state only");
            Box::new(EphemeralStore)
        }
    };

    // 加载快照，否则播种
    let mut state = match store.load().await? {
        Some(state) => {
            info!("Loaded state snapshot");
            state
        }
        None => {
            info!("No snapshot found, seeding initial data");
            AppState::seeded()
        }
    };

    let latency = FixedLatency::from_millis(config.effective_delay_ms());
    let sessions = SessionManager::new(
        latency.clone(),
        Credentials {
            email: config.app.admin_email.clone(),
            password: config.app.admin_password.clone(),
        },
    );
    let approvals = ApprovalService::new(latency);

    // 未登录访问仪表盘会被授权门拦下
    if let RouteDecision::Redirect(route) = resolve(&state.auth, "/admin-dashboard") {
        info!("Anonymous /admin-dashboard redirected to {}", route);
    }

    // 管理员登录并查看汇总
    sessions
        .login(
            &mut state,
            Role::Admin,
            &config.app.admin_email,
            &config.app.admin_password,
        )
        .await;
    if let Some(error) = &state.auth.error {
        anyhow::bail!("Admin login failed: {error}");
    }
    let overview = admin_overview(&state);
    info!(
        "Admin overview: {} doctors, {} patients, {} pending requests, {} appointments",
        overview.total_doctors,
        overview.total_patients,
        overview.pending_requests,
        overview.total_appointments
    );

    // 审批队首的医生申请并导出签发的凭据
    if let Some(request_id) = state.doctors.pending_requests.first().map(|r| r.id.clone()) {
        let issued = approvals.approve(&mut state, &request_id).await?;
        info!("Approved request {}, issued doctor id {}", request_id, issued.doctor_id);
        export_credentials(
            &Credentials {
                email: issued.email,
                password: issued.password,
            },
            &StdoutSink,
            &StdoutSink,
        )?;
    } else {
        warn!("No pending doctor requests to approve");
    }
    sessions.logout(&mut state);

    // 患者登录、查询时段并挂号
    sessions
        .login(&mut state, Role::Patient, "patient@email.com", "patient123")
        .await;
    if let Some(error) = &state.auth.error {
        anyhow::bail!("Patient login failed: {error}");
    }

    let monday = next_monday();
    let slots = available_slots(&state, "doc001", monday);
    info!("doc001 slots on {}: {:?}", monday, slots);
    if let Some(slot) = slots.first() {
        let appointment = book_appointment(
            &mut state,
            "PAT001",
            "doc001",
            monday,
            slot,
            "Follow-up for hypertension medication",
            "Consultation",
        )?;
        info!(
            "Booked {} with {} at {} {}",
            appointment.id, appointment.doctor_name, appointment.date, appointment.time
        );
    }

    // 今天的用药打卡
    let now = current_time_hhmm();
    let rows = dose_rows(&state, "PAT001", today());
    info!(
        "Today's doses for PAT001: {} total, {} taken, {} missed",
        rows.len(),
        taken_count(&rows),
        missed_count(&rows, &now)
    );
    if let Some(row) = rows.iter().find(|r| !r.taken) {
        mark_dose(
            &mut state,
            "PAT001",
            today(),
            &row.name,
            &row.timing,
            true,
            &now,
        );
        info!("Marked {} ({}) as taken at {}", row.name, row.timing, now);
    }
    sessions.logout(&mut state);

    // 保存快照
    store.save(&state).await?;
    info!("Done");
    Ok(())
}

/// 今天之后的第一个周一
fn next_monday() -> chrono::NaiveDate {
    let mut date = today() + Duration::days(1);
    while date.weekday() != Weekday::Mon {
        date += Duration::days(1);
    }
    date
}
