use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::process::{Command, Output};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

/// A request as seen by the test server.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub path: String,
    pub user_agent: Option<String>,
}

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl ServerHandle {
    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Status the test server answers for a path: `/login` is blocked, `/api/data`
/// is missing, everything else succeeds.
pub fn status_for_path(path: &str) -> u16 {
    match path {
        "/login" => 403,
        "/api/data" => 404,
        _ => 200,
    }
}

/// Spawn a lightweight HTTP server that records every request it receives.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let server_seen = Arc::clone(&seen);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let seen = Arc::clone(&server_seen);
                    thread::spawn(move || handle_client(stream, &seen));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
            seen,
        },
    ))
}

fn read_head(stream: &mut TcpStream) -> Option<String> {
    drop(stream.set_nonblocking(false));
    drop(stream.set_read_timeout(Some(Duration::from_secs(2))));
    let mut head = Vec::new();
    let mut buffer = [0u8; 1024];
    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
        let read = stream.read(&mut buffer).ok()?;
        if read == 0 {
            return None;
        }
        head.extend_from_slice(buffer.get(..read)?);
    }
    Some(String::from_utf8_lossy(&head).into_owned())
}

fn parse_request(head: &str) -> SeenRequest {
    let mut lines = head.split("\r\n");
    let path = lines
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_owned();
    let user_agent = lines.find_map(|line| {
        let (name, value) = line.split_once(':')?;
        name.eq_ignore_ascii_case("user-agent")
            .then(|| value.trim().to_owned())
    });
    SeenRequest { path, user_agent }
}

fn handle_client(mut stream: TcpStream, seen: &Mutex<Vec<SeenRequest>>) {
    let Some(head) = read_head(&mut stream) else {
        return;
    };
    let request = parse_request(&head);
    let status = status_for_path(&request.path);
    if let Ok(mut seen) = seen.lock() {
        seen.push(request);
    }
    let response = format!(
        "HTTP/1.1 {} Test\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
        status
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Spawn a server that answers `403` with a 100-byte body, writes two bytes
/// of it, then holds the connection open for `stall`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created.
pub fn spawn_stalling_server(stall: Duration) -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind stalling server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            if read_head(&mut stream).is_none() {
                return;
            }
            let head = b"HTTP/1.1 403 Forbidden\r\nContent-Length: 100\r\n\r\nOK";
            if stream.write_all(head).is_err() || stream.flush().is_err() {
                return;
            }
            thread::sleep(stall);
            drop(stream.shutdown(Shutdown::Both));
        }
    });

    Ok(format!("http://{}", addr))
}

/// Returns a URL on localhost that nothing is listening on.
///
/// # Errors
///
/// Returns an error if a probe listener cannot be bound.
pub fn closed_port_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind probe listener failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("probe addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

/// Run the `botsim` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_botsim<I, S>(args: I, cwd: &std::path::Path) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = botsim_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env("BOTSIM_LOG", "error")
        .output()
        .map_err(|err| format!("run botsim failed: {}", err))
}

fn botsim_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_botsim").map_or_else(
        || Err("CARGO_BIN_EXE_botsim missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
