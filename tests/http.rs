use once_cell::sync::Lazy;
use reqwest::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct BreakdownBody {
    transport: i64,
    energy: i64,
    food: i64,
    waste: i64,
}

#[derive(Debug, Deserialize)]
struct SharesBody {
    transport: i64,
    energy: i64,
    food: i64,
    waste: i64,
}

#[derive(Debug, Deserialize)]
struct ImpactBody {
    level: String,
    label: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct EstimateBody {
    total: i64,
    breakdown: BreakdownBody,
    shares: SharesBody,
    percent_of_average: i64,
    impact: ImpactBody,
}

#[derive(Debug, Deserialize)]
struct RecordBody {
    id: String,
    date: String,
    total: i64,
    breakdown: BreakdownBody,
}

#[derive(Debug, Deserialize)]
struct HistoryBody {
    records: Vec<RecordBody>,
    weekly_average: f64,
    monthly_average: f64,
}

#[derive(Debug, Deserialize)]
struct GoalBody {
    target: f64,
    period: String,
}

#[derive(Debug, Deserialize)]
struct GoalStatusBody {
    goal: Option<GoalBody>,
    current_average: Option<f64>,
    progress: Option<f64>,
    on_track: Option<bool>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_dir() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("ecotrack_http_{}_{}", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(client: &Client, base_url: &str) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/history")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(50)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let base_url = format!("http://127.0.0.1:{port}");
    let child = Command::new(env!("CARGO_BIN_EXE_ecotrack"))
        .env("PORT", port.to_string())
        .env("ECOTRACK_DATA_DIR", unique_data_dir())
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    wait_until_ready(&Client::new(), &base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

#[tokio::test]
async fn http_estimate_returns_rounded_breakdown() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let estimate: EstimateBody = client
        .post(format!("{}/api/estimate", server.base_url))
        .json(&serde_json::json!({
            "transport": { "car_miles": 100, "flights": 2, "public_transport_miles": 20 },
            "energy": { "electricity_kwh": 900, "gas_therms": 50 },
            "food": { "meat_servings": 7, "dairy_servings": 14 },
            "waste": { "recycling_percent": 50 }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(estimate.breakdown.transport, 223);
    assert_eq!(estimate.breakdown.energy, 1093);
    assert_eq!(estimate.breakdown.food, 315);
    assert_eq!(estimate.breakdown.waste, 0);
    assert_eq!(estimate.total, 1631);
    assert_eq!(estimate.percent_of_average, 10);
    assert_eq!(estimate.shares.transport, 14);
    assert_eq!(estimate.shares.energy, 67);
    assert_eq!(estimate.shares.food, 19);
    assert_eq!(estimate.shares.waste, 0);
    assert_eq!(estimate.impact.level, "excellent");
    assert_eq!(estimate.impact.label, "Excellent!");
    assert!(!estimate.impact.message.is_empty());
}

#[tokio::test]
async fn http_estimate_zero_activity_still_counts_waste() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let estimate: EstimateBody = client
        .post(format!("{}/api/estimate", server.base_url))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(estimate.total, 500);
    assert_eq!(estimate.breakdown.waste, 500);
    assert_eq!(estimate.shares.waste, 100);
}

#[tokio::test]
async fn http_history_roundtrip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let cleared = client
        .delete(format!("{}/api/history", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(cleared.status(), StatusCode::NO_CONTENT);

    let saved: RecordBody = client
        .post(format!("{}/api/history", server.base_url))
        .json(&serde_json::json!({
            "total": 1631,
            "breakdown": { "transport": 223, "energy": 1093, "food": 315, "waste": 0 }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!saved.id.is_empty());
    assert!(!saved.date.is_empty());
    assert_eq!(saved.total, 1631);
    assert_eq!(saved.breakdown.energy, 1093);

    let history: HistoryBody = client
        .get(format!("{}/api/history", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(history.records.len(), 1);
    assert_eq!(history.records[0].id, saved.id);
    assert_eq!(history.weekly_average, 1631.0);
    assert_eq!(history.monthly_average, 1631.0);

    let cleared = client
        .delete(format!("{}/api/history", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(cleared.status(), StatusCode::NO_CONTENT);

    let history: HistoryBody = client
        .get(format!("{}/api/history", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(history.records.is_empty());
    assert_eq!(history.weekly_average, 0.0);
}

#[tokio::test]
async fn http_goal_lifecycle() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let status: GoalStatusBody = client
        .put(format!("{}/api/goal", server.base_url))
        .json(&serde_json::json!({ "target": 5.5, "period": "weekly" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let goal = status.goal.expect("goal should be set");
    assert_eq!(goal.target, 5.5);
    assert_eq!(goal.period, "weekly");
    assert!(status.current_average.is_some());
    assert!(status.progress.is_some());
    assert!(status.on_track.is_some());

    let fetched: GoalStatusBody = client
        .get(format!("{}/api/goal", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched.goal.expect("goal persists").target, 5.5);

    let cleared = client
        .delete(format!("{}/api/goal", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(cleared.status(), StatusCode::NO_CONTENT);

    let fetched: GoalStatusBody = client
        .get(format!("{}/api/goal", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(fetched.goal.is_none());
    assert!(fetched.current_average.is_none());
    assert!(fetched.progress.is_none());
    assert!(fetched.on_track.is_none());
}

#[tokio::test]
async fn http_goal_rejects_non_positive_target() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for target in [0.0, -3.0] {
        let response = client
            .put(format!("{}/api/goal", server.base_url))
            .json(&serde_json::json!({ "target": target, "period": "daily" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn http_index_renders_summary() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body = response.text().await.unwrap();
    assert!(body.contains("EcoTrack"));
    assert!(!body.contains("{{"));
}
