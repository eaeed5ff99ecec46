mod common;

use anyhow::Result;
use inventory_api::config::TokenDelivery;
use reqwest::StatusCode;

#[tokio::test]
async fn root_endpoint_describes_service() -> Result<()> {
    let server = common::spawn_server(TokenDelivery::Body).await?;

    let res = reqwest::get(server.url("/")).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["name"], "Inventory API");
    assert!(body["endpoints"]["login"].is_string());
    Ok(())
}

#[tokio::test]
async fn health_reports_unreachable_database() -> Result<()> {
    let server = common::spawn_server(TokenDelivery::Body).await?;

    let res = reqwest::get(server.url("/health")).await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "unavailable");
    Ok(())
}
