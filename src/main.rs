use candidate_dashboard::{
    build_dashboard,
    config::{get_config, init_config},
    telemetry,
    utils::time::{format_naive_date, today},
};
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config()?;
    telemetry::init(config.log_format);

    let dashboard = build_dashboard(config)?;
    let _sweeper = {
        let every = Duration::from_secs(60);
        (
            dashboard.repository().all_cache().spawn_sweeper(every),
            dashboard.repository().page_cache().spawn_sweeper(every),
        )
    };

    info!("Loading candidates from {}", config.api_base_url);

    match dashboard.current_list_view().await {
        Ok(view) => {
            info!(
                shown = view.items.len(),
                total = view.total,
                total_pages = view.total_pages,
                "List view ready"
            );
            for c in &view.items {
                info!(
                    "{:>5}  {:<24} {:<26} {:<10} {}",
                    c.id,
                    c.name,
                    c.role,
                    c.status,
                    format_naive_date(c.applied_date)
                );
            }
        }
        Err(e) => warn!("{}", e.display_message()),
    }

    match dashboard.stats(today()).await {
        Ok(stats) => info!(
            total = stats.total,
            hired = stats.hired,
            rejected = stats.rejected,
            applied_this_week = stats.applied_this_week,
            "Candidate stats"
        ),
        Err(e) => warn!("{}", e.display_message()),
    }

    Ok(())
}
