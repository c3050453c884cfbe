use std::net::SocketAddr;

use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::time::{Duration, timeout};
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use crate::config::ServerConfig;
use crate::reply::TAROT_REPLY;
use crate::routes::api_routes;
use crate::state::AppState;

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn spawn_server() -> (SocketAddr, AppState) {
    let config = ServerConfig::from_lookup(|_| None).expect("default config");
    let state = AppState::new(config);
    let app = api_routes(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server failed");
    });
    (addr, state)
}

async fn connect(addr: SocketAddr, state: &AppState, expected_clients: usize) -> Client {
    let (client, _) = connect_async(format!("ws://{addr}/ws"))
        .await
        .expect("ws connect");
    // Registration happens after the upgrade completes on the server side.
    timeout(Duration::from_secs(2), async {
        while state.hub.len().await < expected_clients {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("client registration timed out");
    client
}

async fn recv_text(client: &mut Client) -> String {
    loop {
        let msg = timeout(Duration::from_secs(2), client.next())
            .await
            .expect("receive timed out")
            .expect("stream ended")
            .expect("ws error");
        if let WsMessage::Text(text) = msg {
            return text.to_string();
        }
    }
}

#[tokio::test]
async fn reply_is_broadcast_to_every_client_including_sender() {
    let (addr, state) = spawn_server().await;
    let mut alice = connect(addr, &state, 1).await;
    let mut bob = connect(addr, &state, 2).await;

    alice
        .send(WsMessage::Text("Ping: Toque na esfera".into()))
        .await
        .expect("send ping");

    assert_eq!(recv_text(&mut alice).await, "Aeon Ouviu: Ping: Toque na esfera");
    assert_eq!(recv_text(&mut bob).await, "Aeon Ouviu: Ping: Toque na esfera");
}

#[tokio::test]
async fn tarot_gets_the_shuffle_reply() {
    let (addr, state) = spawn_server().await;
    let mut client = connect(addr, &state, 1).await;

    client
        .send(WsMessage::Text("quero um TaRoT".into()))
        .await
        .expect("send tarot");

    assert_eq!(recv_text(&mut client).await, TAROT_REPLY);
}

#[tokio::test]
async fn closing_unregisters_the_client() {
    let (addr, state) = spawn_server().await;
    let mut client = connect(addr, &state, 1).await;

    client.close(None).await.expect("close");

    timeout(Duration::from_secs(2), async {
        while state.hub.len().await > 0 {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("client was never unregistered");
}

#[tokio::test]
async fn binary_frames_get_no_reply() {
    let (addr, state) = spawn_server().await;
    let mut client = connect(addr, &state, 1).await;

    client
        .send(WsMessage::Binary(vec![1, 2, 3].into()))
        .await
        .expect("send binary");
    client
        .send(WsMessage::Text("depois".into()))
        .await
        .expect("send text");

    assert_eq!(recv_text(&mut client).await, "Aeon Ouviu: depois");
}

#[tokio::test]
async fn healthz_reports_connected_clients() {
    let (addr, state) = spawn_server().await;
    let _client = connect(addr, &state, 1).await;

    let mut stream = TcpStream::connect(addr).await.expect("tcp connect");
    tokio::io::AsyncWriteExt::write_all(
        &mut stream,
        b"GET /healthz HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await
    .expect("write request");
    let mut body = String::new();
    tokio::io::AsyncReadExt::read_to_string(&mut stream, &mut body)
        .await
        .expect("read response");

    assert!(body.starts_with("HTTP/1.1 200"), "unexpected response: {body}");
    let (_, json) = body.split_once("\r\n\r\n").expect("response body");
    let health: serde_json::Value = serde_json::from_str(json).expect("health json");
    assert_eq!(health["status"], "ok");
    assert_eq!(health["clients"], 1);
}
