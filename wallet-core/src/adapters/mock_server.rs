//! Mock wallet API server for testing
//!
//! This module provides a mock HTTP server that simulates the wallet server,
//! so the network adapters can be tested without a running backend.
//!
//! Endpoints:
//! - POST /auth/login returns { token, user: { id, name, email } }
//! - GET /wallet/summary?userId= returns { balanceInCents }
//! - GET /wallet/contacts?userId= returns [{ id, ownerUserId, name, accountNumber }]
//! - POST /wallet/transfer returns { balanceInCents }
//! - POST /authorize returns { authorized, reason? }
//!
//! Error messages are the server's Portuguese ones.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::local_authorize::BLOCKED_AMOUNT_IN_CENTS;
use super::memory::seed_accounts;
use crate::domain::Account;

/// Mock wallet server for testing
pub struct MockWalletServer {
    port: u16,
    running: Arc<AtomicBool>,
    state: Arc<MockState>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

/// Configuration for the mock server
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Answer every request with HTTP 500
    pub server_error: bool,
    /// Delay in milliseconds before responding
    pub delay_ms: u64,
}

struct MockUser {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    password: &'static str,
}

const USERS: &[MockUser] = &[
    MockUser { id: "1", name: "Usuário Exemplo", email: "user@example.com", password: "123456" },
    MockUser { id: "2", name: "Alice", email: "alice@example.com", password: "alice123" },
    MockUser { id: "3", name: "Bob", email: "bob@example.com", password: "bob123" },
    MockUser { id: "4", name: "Carol", email: "carol@example.com", password: "carol123" },
];

struct MockState {
    accounts: Mutex<Vec<Account>>,
    requests: AtomicUsize,
    config: MockConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody {
    email: String,
    password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransferBody {
    user_id: String,
    to_contact_id: String,
    amount_in_cents: Option<i64>,
}

#[derive(Deserialize)]
struct AuthorizeBody {
    value: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MockContact {
    id: String,
    owner_user_id: String,
    name: String,
    account_number: String,
}

impl MockWalletServer {
    /// Start a new mock server on a random available port
    pub fn start(config: MockConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let state = Arc::new(MockState {
            accounts: Mutex::new(seed_accounts()),
            requests: AtomicUsize::new(0),
            config,
        });
        let state_clone = state.clone();

        // Set listener to non-blocking for graceful shutdown
        listener.set_nonblocking(true)?;

        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        let state = state_clone.clone();
                        thread::spawn(move || {
                            handle_connection(stream, &state);
                        });
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(std::time::Duration::from_millis(10));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            state,
            thread_handle: Some(thread_handle),
        })
    }

    /// Get the base URL for this mock server
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/", self.port)
    }

    /// Number of requests served so far
    pub fn request_count(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    /// Server-side balance of an account
    pub fn balance_of(&self, account_id: &str) -> Option<i64> {
        self.state
            .accounts
            .lock()
            .ok()?
            .iter()
            .find(|a| a.id == account_id)
            .map(|a| a.balance_in_cents)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockWalletServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Read one HTTP request: head, then as much body as Content-Length says
fn read_request(stream: &mut TcpStream) -> Option<(String, String)> {
    let mut data = Vec::new();
    let mut buffer = [0; 4096];

    let head_end = loop {
        let n = stream.read(&mut buffer).ok()?;
        if n == 0 {
            return None;
        }
        data.extend_from_slice(&buffer[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&data[..head_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while data.len() < head_end + content_length {
        let n = stream.read(&mut buffer).ok()?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buffer[..n]);
    }

    let body = String::from_utf8_lossy(&data[head_end..]).to_string();
    Some((head, body))
}

fn handle_connection(mut stream: TcpStream, state: &MockState) {
    let _ = stream.set_nonblocking(false);
    let Some((head, body)) = read_request(&mut stream) else {
        return;
    };
    state.requests.fetch_add(1, Ordering::SeqCst);

    if state.config.delay_ms > 0 {
        thread::sleep(std::time::Duration::from_millis(state.config.delay_ms));
    }

    let first_line = head.lines().next().unwrap_or("");
    let parts: Vec<&str> = first_line.split_whitespace().collect();
    if parts.len() < 2 {
        send_json(&mut stream, 400, "Bad Request", &json!({"message": "Invalid request"}));
        return;
    }

    if state.config.server_error {
        send_json(
            &mut stream,
            500,
            "Internal Server Error",
            &json!({"error": "internal"}),
        );
        return;
    }

    let method = parts[0];
    let (path, query) = parts[1].split_once('?').unwrap_or((parts[1], ""));
    let user_id = query_param(query, "userId").unwrap_or_default();

    match (method, path) {
        ("POST", "/auth/login") => handle_login(&mut stream, &body),
        ("GET", "/wallet/summary") => handle_summary(&mut stream, state, &user_id),
        ("GET", "/wallet/contacts") => handle_contacts(&mut stream, state, &user_id),
        ("POST", "/wallet/transfer") => handle_transfer(&mut stream, state, &body),
        ("POST", "/authorize") => handle_authorize(&mut stream, &body),
        _ => send_json(
            &mut stream,
            404,
            "Not Found",
            &json!({"message": "Endpoint not found"}),
        ),
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

fn handle_login(stream: &mut TcpStream, body: &str) {
    let Ok(login) = serde_json::from_str::<LoginBody>(body) else {
        send_json(stream, 400, "Bad Request", &json!({"message": "Invalid request"}));
        return;
    };

    match USERS
        .iter()
        .find(|u| u.email == login.email && u.password == login.password)
    {
        Some(user) => send_json(
            stream,
            200,
            "OK",
            &json!({
                "token": format!("fake-token-{}", user.id),
                "user": { "id": user.id, "name": user.name, "email": user.email },
            }),
        ),
        None => send_json(
            stream,
            401,
            "Unauthorized",
            &json!({"message": "Credenciais inválidas"}),
        ),
    }
}

fn handle_summary(stream: &mut TcpStream, state: &MockState, user_id: &str) {
    let accounts = match state.accounts.lock() {
        Ok(accounts) => accounts,
        Err(_) => return,
    };
    match accounts.iter().find(|a| a.owner_user_id == user_id) {
        Some(account) => send_json(
            stream,
            200,
            "OK",
            &json!({"balanceInCents": account.balance_in_cents}),
        ),
        None => send_json(
            stream,
            404,
            "Not Found",
            &json!({"message": "Conta não encontrada"}),
        ),
    }
}

fn handle_contacts(stream: &mut TcpStream, state: &MockState, user_id: &str) {
    let accounts = match state.accounts.lock() {
        Ok(accounts) => accounts,
        Err(_) => return,
    };
    let contacts: Vec<MockContact> = accounts
        .iter()
        .filter(|a| a.owner_user_id != user_id)
        .map(|a| MockContact {
            id: a.id.clone(),
            owner_user_id: a.owner_user_id.clone(),
            name: USERS
                .iter()
                .find(|u| u.id == a.owner_user_id)
                .map(|u| u.name.to_string())
                .unwrap_or_else(|| "Desconhecido".to_string()),
            account_number: a.account_number.clone(),
        })
        .collect();
    send_json(stream, 200, "OK", &json!(contacts));
}

fn handle_transfer(stream: &mut TcpStream, state: &MockState, body: &str) {
    let Ok(request) = serde_json::from_str::<TransferBody>(body) else {
        send_json(stream, 400, "Bad Request", &json!({"message": "Invalid request"}));
        return;
    };
    let mut accounts = match state.accounts.lock() {
        Ok(accounts) => accounts,
        Err(_) => return,
    };

    let payer = accounts.iter().position(|a| a.owner_user_id == request.user_id);
    let payee = accounts.iter().position(|a| a.id == request.to_contact_id);

    let result = match (payer, payee, request.amount_in_cents) {
        (_, None, _) => Err("Contato inválido"),
        (None, _, _) => Err("Conta não encontrada"),
        (Some(p), Some(q), _) if p == q => Err("Payer e payee não podem ser iguais"),
        (_, _, None) => Err("Valor inválido"),
        (_, _, Some(amount)) if amount <= 0 => Err("Valor inválido"),
        (Some(p), _, Some(amount)) if amount > accounts[p].balance_in_cents => {
            Err("Saldo insuficiente")
        }
        (Some(p), Some(q), Some(amount)) => {
            accounts[p].balance_in_cents -= amount;
            accounts[q].balance_in_cents += amount;
            Ok(accounts[p].balance_in_cents)
        }
    };

    match result {
        Ok(balance) => send_json(stream, 200, "OK", &json!({"balanceInCents": balance})),
        Err(message) => send_json(stream, 400, "Bad Request", &json!({"message": message})),
    }
}

fn handle_authorize(stream: &mut TcpStream, body: &str) {
    let value = serde_json::from_str::<AuthorizeBody>(body)
        .map(|b| b.value)
        .unwrap_or(0);
    if value == BLOCKED_AMOUNT_IN_CENTS {
        send_json(
            stream,
            200,
            "OK",
            &json!({"authorized": false, "reason": "operation not allowed"}),
        );
    } else {
        send_json(stream, 200, "OK", &json!({"authorized": true}));
    }
}

fn send_json(stream: &mut TcpStream, status: u16, status_text: &str, body: &serde_json::Value) {
    let body = body.to_string();
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        status_text,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
