use std::sync::Arc;
use textile_reconcile::{api, create_pool, AppConfig, PgReceiptRepository, ReconciliationService};
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置
    let config = AppConfig::load()?;

    // 初始化日志 - 本地时间格式, RUST_LOG 优先
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();

    info!("Starting server with config: {:?}", config);

    // 创建数据库连接池
    let pool = create_pool(&config.database).await?;
    info!("Database pool created");

    let repository = Arc::new(PgReceiptRepository::new(pool));
    let service = Arc::new(ReconciliationService::new(repository));

    let app = api::router(service);

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET  /api/recebimentos/:id/conciliar/    - three-way reconciliation (JSON)");
    info!("  GET  /api/recebimentos/:id/conciliar.csv - three-way reconciliation (CSV)");
    info!("  POST /api/conciliacoes/batch             - batch reconciliation");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
