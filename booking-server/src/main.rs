use booking_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 日志)
    dotenv::dotenv().ok();

    // 2. 加载配置
    let config = Config::from_env();

    init_logger_with_file(Some(config.log_level.as_str()), config.log_dir.as_deref());

    // 打印横幅
    print_banner();

    tracing::info!("🍽️ Cafe Fausse booking server starting...");

    // 3. 初始化服务器状态
    let state = ServerState::initialize(&config).await;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
