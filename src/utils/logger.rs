use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const QUIET_FILTER: &str = "travel_assistant=warn";
const VERBOSE_FILTER: &str = "travel_assistant=debug,info";
const JSON_FILTER: &str = "travel_assistant=info";

/// `RUST_LOG` 優先，否則用預設值
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// CLI 預設只印 warn 以上，stdout 留給搜尋結果與評論列表
pub fn init_cli_logger(verbose: bool) {
    let filter = env_filter(if verbose { VERBOSE_FILTER } else { QUIET_FILTER });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

/// `--json-logs` 或 `[logging] json = true`：查詢、評分、重算等事件以 JSON 寫到 stderr
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter(JSON_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .json()
                .with_current_span(false),
        )
        .init();
}
