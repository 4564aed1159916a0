// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sprite_scraper::application::use_cases::scrape_sprites_use_case::ScrapeSpritesUseCase;
use sprite_scraper::config::settings::Settings;
use sprite_scraper::domain::services::catalog_service::CatalogService;
use sprite_scraper::domain::services::image_service::ImageService;
use sprite_scraper::engines::chromium_engine::ChromiumSession;
use sprite_scraper::engines::reqwest_engine::ReqwestImageClient;
use sprite_scraper::infrastructure::repositories::checkpoint_repo_impl::CsvCheckpointRepository;
use sprite_scraper::utils::telemetry;
use std::sync::Arc;
use tracing::{info, warn};

/// 主函数
///
/// 执行一次完整的抓取与恢复。单个实体失败只会提前结束本次运行，
/// 退出码仍为0；检查点写入失败时以非0退出
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting sprite-scraper...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Initialize components
    let catalog = CatalogService::new(&settings.catalog)?;
    let client = Arc::new(ReqwestImageClient::new(&settings.http)?);
    let checkpoints = Arc::new(CsvCheckpointRepository::new(
        &settings.output.checkpoint_path,
    ));
    let use_case = ScrapeSpritesUseCase::new(
        catalog,
        ImageService::new(client),
        checkpoints,
        &settings.output.images_dir,
    );

    // 4. Acquire browser
    let mut session = ChromiumSession::launch(&settings.browser).await?;

    // 5. Run, then release the browser on every exit path
    let outcome = use_case.run(&mut session).await;
    if let Err(e) = session.close().await {
        warn!("Failed to release browser session: {}", e);
    }
    let report = outcome?;

    match &report.aborted {
        None => info!(
            "Finished: {} entities, {} images saved under {}",
            report.completed.len(),
            report.images_downloaded,
            use_case.images_dir().display()
        ),
        Some(e) => warn!(
            "Run stopped early at {}: {} ({} entities completed)",
            report
                .last_attempted
                .as_ref()
                .map(|name| name.as_str())
                .unwrap_or("-"),
            e,
            report.completed.len()
        ),
    }

    Ok(())
}
