use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::routes;
use server::AppState;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = routes::build_router(AppState::in_memory(), tower_http::cors::CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_customer_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let base = format!("{}/api/v1/customers", app.base_url);

    let res = c.post(&base).json(&json!({"FirstName": "John", "LastName": "Doe"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created: Value = res.json().await?;
    let id = created["Id"].as_str().expect("id").to_string();

    let res = c.head(format!("{base}/{id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c
        .put(format!("{base}/{id}"))
        .json(&json!({"Id": id, "FirstName": "John", "LastName": "Smith", "Age": 33}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["LastName"], "Smith");

    let res = c.delete(format!("{base}/{id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{base}/{id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["Code"], 404);
    assert_eq!(body["Description"], format!("Not found customer id: {id}"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn e2e_concurrent_creates_are_all_stored() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let url = format!("{}/api/v1/entities", app.base_url);

    let mut handles = Vec::new();
    for i in 0..32 {
        let c = c.clone();
        let url = url.clone();
        handles.push(tokio::spawn(async move {
            c.post(&url).json(&json!({"Name": format!("item-{i}"), "AvailableQuantity": i})).send().await
        }));
    }
    for h in handles {
        assert_eq!(h.await??.status(), HttpStatusCode::OK);
    }

    let list: Vec<Value> = c.get(&url).send().await?.json().await?;
    assert_eq!(list.len(), 32);
    Ok(())
}
