use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 預設的日誌過濾字串，`level` 來自設定檔 `[logging]`
pub fn default_filter(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (true, _) => "calculator=debug,info".to_string(),
        (false, Some(level)) => format!("calculator={}", level),
        (false, None) => "calculator=info".to_string(),
    }
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, level)));

    // stdout 只輸出計算結果，日誌寫到 stderr。
    // 已有全域 subscriber 時 (例如測試中重複呼叫) 保留原本的，忽略錯誤。
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
