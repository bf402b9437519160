use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use models::pet::{NewPet, Pet};
use server::{routes, state::StoreState};
use service::errors::ServiceError;
use service::pets::{InMemoryPetRepository, PetRepository};
use service::seed::seed_if_empty;

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn pets_url(&self) -> String {
        format!("{}/api/pets", self.base_url)
    }
}

async fn start_server(pets: Arc<dyn PetRepository>) -> anyhow::Result<TestApp> {
    let app = routes::build_router(StoreState::new(pets));
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

/// Storage that is always down.
struct UnavailableRepository;

#[async_trait]
impl PetRepository for UnavailableRepository {
    async fn list(&self) -> Result<Vec<Pet>, ServiceError> {
        Err(ServiceError::Db("connection refused".into()))
    }
    async fn create(&self, _pet: NewPet) -> Result<Pet, ServiceError> {
        Err(ServiceError::Db("connection refused".into()))
    }
    async fn count(&self) -> Result<u64, ServiceError> {
        Err(ServiceError::Db("connection refused".into()))
    }
    async fn insert_many(&self, _pets: Vec<NewPet>) -> Result<Vec<Pet>, ServiceError> {
        Err(ServiceError::Db("connection refused".into()))
    }
}

#[tokio::test]
async fn e2e_list_returns_seeded_pets() -> anyhow::Result<()> {
    let repo = Arc::new(InMemoryPetRepository::new());
    seed_if_empty(repo.as_ref()).await?;
    let app = start_server(repo).await?;

    let res = reqwest::get(app.pets_url()).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(
        res.headers()["content-type"].to_str()?,
        "application/json"
    );
    let body = res.json::<Vec<Value>>().await?;
    let names: Vec<&str> = body.iter().filter_map(|p| p["name"].as_str()).collect();
    assert_eq!(names, vec!["Max", "Bella", "Charlie", "Luna"]);
    assert!(body.iter().all(|p| p["_id"].is_string()));
    Ok(())
}

#[tokio::test]
async fn e2e_create_then_list_round_trip() -> anyhow::Result<()> {
    let app = start_server(Arc::new(InMemoryPetRepository::new())).await?;
    let c = reqwest::Client::new();

    let res = c
        .post(app.pets_url())
        .json(&json!({"name": "Rex", "type": "Dog", "age": 4}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<Value>().await?;
    let id = created["_id"].as_str().expect("assigned id").to_string();
    assert_eq!(created["name"], "Rex");
    assert_eq!(created["type"], "Dog");
    assert_eq!(created["age"], 4);

    let list = c.get(app.pets_url()).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0], created);
    assert_eq!(list[0]["_id"], id.as_str());
    Ok(())
}

#[tokio::test]
async fn e2e_partial_record_is_accepted() -> anyhow::Result<()> {
    let app = start_server(Arc::new(InMemoryPetRepository::new())).await?;
    let res = reqwest::Client::new()
        .post(app.pets_url())
        .json(&json!({"name": "Mystery", "microchip": "A-17"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["name"], "Mystery");
    assert!(body["type"].is_null());
    assert!(body["age"].is_null());
    assert_eq!(body["microchip"], "A-17");
    Ok(())
}

#[tokio::test]
async fn e2e_wrongly_typed_field_is_rejected() -> anyhow::Result<()> {
    let repo = Arc::new(InMemoryPetRepository::new());
    let app = start_server(repo.clone()).await?;
    let res = reqwest::Client::new()
        .post(app.pets_url())
        .json(&json!({"name": "Rex", "age": "old"}))
        .send()
        .await?;
    assert!(res.status().is_client_error());
    assert_eq!(repo.count().await?, 0);
    Ok(())
}

#[tokio::test]
async fn e2e_database_failure_is_bare_500() -> anyhow::Result<()> {
    let app = start_server(Arc::new(UnavailableRepository)).await?;
    let c = reqwest::Client::new();

    let res = c.get(app.pets_url()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.bytes().await?.is_empty());

    let res = c.post(app.pets_url()).json(&json!({"name": "Rex"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn e2e_cross_origin_requests_are_allowed() -> anyhow::Result<()> {
    let app = start_server(Arc::new(InMemoryPetRepository::new())).await?;
    let c = reqwest::Client::new();

    let res = c
        .get(app.pets_url())
        .header("Origin", "http://elsewhere.example")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");

    let preflight = c
        .request(reqwest::Method::OPTIONS, app.pets_url())
        .header("Origin", "http://elsewhere.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await?;
    assert!(preflight.status().is_success());
    assert_eq!(preflight.headers()["access-control-allow-origin"], "*");
    Ok(())
}
